// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Resolved entity metadata.
//!
//! # Architecture
//!
//! ```text
//! descriptor.rs (coordinator)
//! ├── field.rs  - FieldDescriptor: column name, strict SQL type, flags
//! ├── entity.rs - EntityDescriptor: table name, ordered fields, identity
//! └── cache.rs  - DescriptorCache: per-type memoization
//! ```

mod cache;
mod entity;
mod field;

pub use cache::DescriptorCache;
pub use entity::EntityDescriptor;
pub use field::FieldDescriptor;
