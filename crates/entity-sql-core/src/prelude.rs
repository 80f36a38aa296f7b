// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust
//! use entity_sql_core::prelude::*;
//! ```

pub use crate::{
    DatabaseConfig, DescriptorCache, Dialect, EntityDeclaration, EntityDescriptor, EntityManager,
    FieldDeclaration, Identifiable, Model, SqlGenerator, SqlKind, create_generator,
    create_generator_from_name
};
