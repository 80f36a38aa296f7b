// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column metadata for a single field.
//!
//! # Strict Type Table
//!
//! | Kind | SQL Type |
//! |------|----------|
//! | `Text` | `VARCHAR(255)` |
//! | `TinyInt` | `TINYINT` |
//! | `SmallInt` | `SMALLINT` |
//! | `Integer` | `INTEGER` |
//! | `BigInt` | `BIGINT` |
//! | `Double` | `DOUBLE` |
//! | `Float` | `FLOAT` |
//! | `Boolean` | `BOOLEAN` |
//! | `Decimal` | `DECIMAL(19,4)` |
//! | `Date` | `DATE` |
//! | `Time` | `TIME` |
//! | `Timestamp` | `TIMESTAMP` |
//! | `Other` | error |
//!
//! This table is independent of the per-dialect tables used by the
//! generators, which fall back to a catch-all instead of failing.

use crate::{
    declaration::{FieldDeclaration, SqlKind},
    error::{Error, Result},
    naming
};

/// Resolved, immutable column definition of one entity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    attribute: String,
    kind:      SqlKind,
    column:    String,
    sql_type:  &'static str,
    nullable:  bool,
    unique:    bool,
    identity:  bool
}

impl FieldDescriptor {
    /// Resolve a field declaration.
    ///
    /// `entity` is only used to name the owner in error messages.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedType`] when the field's kind is
    /// [`SqlKind::Other`].
    pub fn new(entity: &str, decl: &FieldDeclaration) -> Result<Self> {
        let sql_type = strict_sql_type(decl.kind()).ok_or_else(|| Error::UnsupportedType {
            entity:    entity.to_string(),
            field:     decl.name().to_string(),
            type_name: decl.kind().type_name().to_string()
        })?;

        Ok(Self {
            attribute: decl.name().to_string(),
            kind: decl.kind(),
            column: naming::resolve_override(decl.column_override(), decl.name()),
            sql_type,
            nullable: decl.is_nullable(),
            unique: decl.is_unique(),
            identity: decl.is_id()
        })
    }

    /// Attribute name as declared on the type.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Semantic type tag.
    #[must_use]
    pub fn kind(&self) -> SqlKind {
        self.kind
    }

    /// Resolved column name.
    #[must_use]
    pub fn column_name(&self) -> &str {
        &self.column
    }

    /// SQL type from the strict table.
    #[must_use]
    pub fn sql_type(&self) -> &'static str {
        self.sql_type
    }

    /// Whether NULL is allowed.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Whether the column is UNIQUE.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Whether the field carries the identity marker.
    ///
    /// More than one field may carry it; only the first becomes the entity's
    /// primary key.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.identity
    }
}

fn strict_sql_type(kind: SqlKind) -> Option<&'static str> {
    let sql = match kind {
        SqlKind::Text => "VARCHAR(255)",
        SqlKind::TinyInt => "TINYINT",
        SqlKind::SmallInt => "SMALLINT",
        SqlKind::Integer => "INTEGER",
        SqlKind::BigInt => "BIGINT",
        SqlKind::Double => "DOUBLE",
        SqlKind::Float => "FLOAT",
        SqlKind::Boolean => "BOOLEAN",
        SqlKind::Decimal => "DECIMAL(19,4)",
        SqlKind::Date => "DATE",
        SqlKind::Time => "TIME",
        SqlKind::Timestamp => "TIMESTAMP",
        SqlKind::Other(_) => return None
    };
    Some(sql)
}
