// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for entity-sql.
//!
//! This crate resolves entity declarations into table metadata and renders
//! dialect-specific SQL text from it. It is used by `#[derive(Model)]`
//! generated code and can also be used standalone with hand-written
//! declarations.
//!
//! # Overview
//!
//! - [`EntityDeclaration`] / [`FieldDeclaration`]: raw schema description
//! - [`EntityDescriptor`] / [`FieldDescriptor`]: resolved table mapping
//! - [`DescriptorCache`]: compute-once, per-type descriptor memoization
//! - [`SqlGenerator`]: MySQL, PostgreSQL and Oracle statement text
//! - [`DatabaseConfig`]: connection settings and dialect selection
//! - [`EntityManager`] / [`EntityStore`]: in-memory persistence front door
//! - [`prelude`]: convenient re-exports
//!
//! # Pipeline
//!
//! ```text
//! #[derive(Model)] ──► EntityDeclaration ──► DescriptorCache::resolve
//!                                                  │
//!                                                  ▼
//!                   Dialect ──► SqlGenerator ◄── EntityDescriptor
//!                                    │
//!                                    ▼
//!                       SELECT / INSERT / UPDATE / DELETE / CREATE TABLE
//! ```
//!
//! # Usage
//!
//! Most users should use `entity-sql` directly, which re-exports this crate
//! together with the derive macro. For manual declarations:
//!
//! ```rust
//! use entity_sql_core::prelude::*;
//!
//! struct Tag;
//!
//! impl Model for Tag {
//!     fn declaration() -> EntityDeclaration {
//!         EntityDeclaration::entity("Tag")
//!             .field(FieldDeclaration::new("id", SqlKind::Integer).id())
//!             .field(FieldDeclaration::new("label", SqlKind::Text).unique())
//!     }
//! }
//!
//! let descriptor = DescriptorCache::global().resolve::<Tag>().unwrap();
//! let generator = create_generator(Dialect::Oracle);
//! assert_eq!(
//!     generator.select_by_id(&descriptor, "id"),
//!     "SELECT * FROM tag WHERE id = :1"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
mod declaration;
mod descriptor;
mod dialect;
mod error;
pub mod generator;
mod manager;
mod model;
pub mod naming;
pub mod prelude;
mod store;

pub use crate::config::DatabaseConfig;
pub use declaration::{EntityDeclaration, FieldDeclaration, SqlKind};
pub use descriptor::{DescriptorCache, EntityDescriptor, FieldDescriptor};
pub use dialect::Dialect;
pub use error::{Error, ErrorKind, Result};
pub use generator::{
    MySqlGenerator, OracleGenerator, PostgresGenerator, SqlGenerator, create_generator,
    create_generator_from_name
};
pub use manager::EntityManager;
pub use model::{Identifiable, Model};
pub use store::EntityStore;
