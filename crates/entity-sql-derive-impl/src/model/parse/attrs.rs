// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level attribute parsing with darling.
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `#[entity]` | No | unmarked | Marks the model as a table-backed entity |
//! | `table` | No | snake_case struct name | Table name override |

use darling::FromDeriveInput;
use syn::{Generics, Ident};

/// Attributes parsed from `#[entity(...)]`.
///
/// A bare `#[entity]` and a missing attribute both parse to `table: None`;
/// presence of the marker is detected separately in
/// [`ModelDef::from_derive_input`](super::ModelDef::from_derive_input).
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_named))]
pub struct EntityAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Explicit table name.
    #[darling(default)]
    pub table: Option<String>
}
