// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Internal proc-macro implementation for `entity-sql`.
//!
//! Use the `entity-sql` crate instead; generated code refers to items
//! through the `::entity_sql` path.
//!
//! # Attribute Quick Reference
//!
//! ## Struct-Level `#[entity(...)]`
//!
//! ```rust,ignore
//! #[derive(Model)]
//! #[entity(
//!     table = "users"       // Optional: table name (default: snake_case struct name)
//! )]
//! pub struct UserAccount { /* ... */ }
//! ```
//!
//! Without `#[entity]` the struct still derives `Model`, but the descriptor
//! cache refuses to resolve it.
//!
//! ## Field-Level Attributes
//!
//! ```rust,ignore
//! pub struct UserAccount {
//!     #[id]                                   // Primary key (first one wins)
//!     pub id: i64,
//!
//!     #[column(name = "user_name")]           // Column name override
//!     pub name: String,
//!
//!     #[column(nullable = false, unique)]     // NOT NULL UNIQUE
//!     pub email: String,
//!
//!     pub created_at: chrono::NaiveDateTime,  // TIMESTAMP, nullable
//! }
//! ```

mod model;

use proc_macro::TokenStream;

/// Derive macro for entity schema declarations.
///
/// # Generated Code
///
/// - `impl entity_sql::Model`: the struct's declaration, one field per
///   struct field, in declaration order
/// - `impl entity_sql::Identifiable`: id accessor, only when a field is
///   marked `#[id]`
///
/// # Attributes
///
/// | Attribute | Target | Description |
/// |-----------|--------|-------------|
/// | `#[entity]` | struct | Marks the struct as a table-backed entity |
/// | `#[entity(table = "...")]` | struct | Table name override |
/// | `#[id]` | field | Primary key |
/// | `#[column(name = "...")]` | field | Column name override |
/// | `#[column(nullable = false)]` | field | `NOT NULL` |
/// | `#[column(unique)]` | field | `UNIQUE` |
///
/// # Type Mapping
///
/// | Rust Type | SQL Kind |
/// |-----------|----------|
/// | `String` | `Text` |
/// | `i32` / `i64` | `Integer` / `BigInt` |
/// | `f32` / `f64` | `Float` / `Double` |
/// | `bool` | `Boolean` |
/// | `Decimal` | `Decimal` |
/// | `NaiveDate` / `NaiveTime` / `NaiveDateTime` | `Date` / `Time` / `Timestamp` |
/// | `Option<T>` | kind of `T` |
///
/// Other types derive fine but fail descriptor resolution with an
/// unsupported-type error.
///
/// # Example
///
/// ```rust,ignore
/// use entity_sql::Model;
///
/// #[derive(Model)]
/// #[entity(table = "products")]
/// pub struct Product {
///     #[id]
///     pub id: i64,
///
///     #[column(name = "product_name", nullable = false)]
///     pub name: String,
///
///     pub price: rust_decimal::Decimal,
/// }
/// ```
#[proc_macro_derive(Model, attributes(entity, id, column))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    model::derive(input)
}
