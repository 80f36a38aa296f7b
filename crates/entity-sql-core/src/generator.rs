// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dialect-specific SQL statement generation.
//!
//! Every dialect implements the small required surface of [`SqlGenerator`]
//! (placeholder syntax, type table, DDL tail); statement assembly lives in
//! the trait's provided methods and in [`base`].
//!
//! # Architecture
//!
//! ```text
//! generator.rs (trait + factory)
//! ├── base.rs     - shared column lists and CREATE TABLE layout
//! ├── mysql.rs    - MySqlGenerator
//! ├── postgres.rs - PostgresGenerator
//! └── oracle.rs   - OracleGenerator
//! ```
//!
//! # Example
//!
//! ```rust
//! use entity_sql_core::{
//!     Dialect, EntityDeclaration, EntityDescriptor, FieldDeclaration, SqlKind, create_generator
//! };
//!
//! let decl = EntityDeclaration::entity("Note")
//!     .field(FieldDeclaration::new("id", SqlKind::BigInt).id())
//!     .field(FieldDeclaration::new("body", SqlKind::Text));
//! let descriptor = EntityDescriptor::new(&decl).unwrap();
//!
//! let generator = create_generator(Dialect::Postgres);
//! assert_eq!(
//!     generator.insert(&descriptor),
//!     "INSERT INTO note (id, body) VALUES ($1, $2)"
//! );
//! ```

mod base;
mod mysql;
mod oracle;
mod postgres;

pub use mysql::MySqlGenerator;
pub use oracle::OracleGenerator;
pub use postgres::PostgresGenerator;
use tracing::debug;

use crate::{declaration::SqlKind, descriptor::EntityDescriptor, dialect::Dialect, error::Result};

/// SQL text generation for one dialect.
///
/// All operations are pure: the same descriptor always yields byte-identical
/// output, and generators hold no state.
pub trait SqlGenerator: Send + Sync {
    /// Dialect this generator targets.
    fn dialect(&self) -> Dialect;

    /// Positional placeholder for a 1-based parameter index.
    fn placeholder(&self, index: usize) -> String;

    /// SQL type for a semantic type.
    ///
    /// Never fails: unrecognized kinds map to the dialect's catch-all
    /// character type.
    fn map_type(&self, kind: SqlKind) -> &'static str;

    /// Text appended after the closing parenthesis of CREATE TABLE.
    fn table_suffix(&self) -> &'static str;

    /// `count` placeholders joined by `", "`. Zero yields an empty string.
    fn placeholders(&self, count: usize) -> String {
        (1..=count)
            .map(|i| self.placeholder(i))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `SELECT * FROM <table> WHERE <id_column> = <p1>`
    fn select_by_id(&self, descriptor: &EntityDescriptor, id_column: &str) -> String {
        format!(
            "SELECT * FROM {} WHERE {} = {}",
            descriptor.table_name(),
            id_column,
            self.placeholder(1)
        )
    }

    /// `SELECT <columns> FROM <table>` with resolved column names.
    fn select_all(&self, descriptor: &EntityDescriptor) -> String {
        format!(
            "SELECT {} FROM {}",
            descriptor.column_names().join(", "),
            descriptor.table_name()
        )
    }

    /// `INSERT INTO <table> (<columns>) VALUES (<placeholders>)`
    fn insert(&self, descriptor: &EntityDescriptor) -> String {
        let columns = base::attribute_columns(descriptor);
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            descriptor.table_name(),
            columns.join(", "),
            self.placeholders(columns.len())
        )
    }

    /// `UPDATE <table> SET <c1> = <p1>, ... WHERE <id_column> = <pN+1>`
    fn update(&self, descriptor: &EntityDescriptor, id_column: &str) -> String {
        let columns = base::update_columns(descriptor, id_column);
        let set_clause = columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = {}", column, self.placeholder(i + 1)))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "UPDATE {} SET {} WHERE {} = {}",
            descriptor.table_name(),
            set_clause,
            id_column,
            self.placeholder(columns.len() + 1)
        )
    }

    /// `DELETE FROM <table> WHERE <id_column> = <p1>`
    fn delete(&self, descriptor: &EntityDescriptor, id_column: &str) -> String {
        format!(
            "DELETE FROM {} WHERE {} = {}",
            descriptor.table_name(),
            id_column,
            self.placeholder(1)
        )
    }

    /// Full CREATE TABLE statement with a trailing PRIMARY KEY clause and
    /// the dialect's tail.
    fn create_table(&self, descriptor: &EntityDescriptor) -> String {
        base::create_table(self, descriptor)
    }
}

/// Create the generator for a dialect.
#[must_use]
pub fn create_generator(dialect: Dialect) -> Box<dyn SqlGenerator> {
    debug!(%dialect, "creating sql generator");
    match dialect {
        Dialect::MySql => Box::new(MySqlGenerator),
        Dialect::Postgres => Box::new(PostgresGenerator),
        Dialect::Oracle => Box::new(OracleGenerator)
    }
}

/// Create the generator for a dialect name (`mysql`, `postgresql`,
/// `oracle`, any case).
///
/// # Errors
///
/// - [`Error::EmptyDialect`](crate::Error::EmptyDialect) for empty input
/// - [`Error::UnsupportedDialect`](crate::Error::UnsupportedDialect) for
///   unknown names
pub fn create_generator_from_name(name: &str) -> Result<Box<dyn SqlGenerator>> {
    Ok(create_generator(name.parse()?))
}
