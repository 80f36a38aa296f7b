// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # entity-sql
//!
//! One crate, all features. Re-exports:
//! - [`Model`](macro@Model) derive macro from `entity-sql-derive-impl`
//! - All types from `entity-sql-core` ([`EntityDescriptor`],
//!   [`DescriptorCache`], [`SqlGenerator`], [`DatabaseConfig`],
//!   [`EntityManager`])
//!
//! # Quick Start
//!
//! ```rust
//! use entity_sql::{DescriptorCache, Dialect, Model, create_generator};
//!
//! #[derive(Model)]
//! #[entity(table = "users")]
//! pub struct User {
//!     #[id]
//!     pub id: i64,
//!     #[column(name = "user_name", nullable = false)]
//!     pub name: String,
//! }
//!
//! let descriptor = DescriptorCache::global().resolve::<User>().unwrap();
//! assert_eq!(descriptor.column_names(), ["id", "user_name"]);
//!
//! let generator = create_generator(Dialect::Postgres);
//! assert_eq!(
//!     generator.delete(&descriptor, "id"),
//!     "DELETE FROM users WHERE id = $1"
//! );
//! ```

pub use entity_sql_core::*;
pub use entity_sql_derive_impl::Model;
