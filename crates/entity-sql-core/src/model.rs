// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Traits implemented by `#[derive(Model)]`.
//!
//! | Trait | Generated when | Used by |
//! |-------|----------------|---------|
//! | [`Model`] | always | [`DescriptorCache`](crate::DescriptorCache) |
//! | [`Identifiable`] | the struct has an `#[id]` field | [`EntityStore`](crate::EntityStore) |

use std::{fmt::Debug, hash::Hash};

use crate::declaration::EntityDeclaration;

/// A type that can describe its own schema.
///
/// Only declarations marked as entities (`#[entity]`) resolve to
/// descriptors; other models are rejected by the cache.
pub trait Model: Send + Sync + 'static {
    /// Build the declaration for this type.
    fn declaration() -> EntityDeclaration;
}

/// A model with a primary key accessor.
///
/// Generated from the first field marked `#[id]`.
pub trait Identifiable: Model {
    /// Primary key type.
    type Id: Eq + Hash + Clone + Debug + Send + Sync + 'static;

    /// Read the primary key value.
    fn id(&self) -> Self::Id;
}
