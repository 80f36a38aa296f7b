// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Explicit schema declarations.
//!
//! A declaration is the raw, unvalidated description of one entity type:
//! its name, whether it is marked as an entity, an optional table override
//! and its fields in declaration order. Declarations are produced by
//! `#[derive(Model)]` or assembled by hand with the builder methods below,
//! then resolved into an [`EntityDescriptor`](crate::EntityDescriptor).
//!
//! # Example
//!
//! ```rust
//! use entity_sql_core::{EntityDeclaration, FieldDeclaration, SqlKind};
//!
//! let decl = EntityDeclaration::entity("ProductEntity")
//!     .table("products")
//!     .field(FieldDeclaration::new("id", SqlKind::BigInt).id())
//!     .field(
//!         FieldDeclaration::new("name", SqlKind::Text)
//!             .column("product_name")
//!             .not_null()
//!     );
//!
//! assert!(decl.is_entity());
//! assert_eq!(decl.fields().len(), 2);
//! ```

use std::fmt;

/// Semantic scalar type of a declared field.
///
/// This tag replaces runtime type inspection: every field declares which
/// SQL-relevant category its host type belongs to, and each consumer maps
/// the tag through its own fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlKind {
    /// Character data (`String`, `&str`).
    Text,

    /// 8-bit integer (`i8`, `u8`).
    TinyInt,

    /// 16-bit integer (`i16`, `u16`).
    SmallInt,

    /// 32-bit integer (`i32`, `u32`).
    Integer,

    /// 64-bit integer (`i64`, `u64`).
    BigInt,

    /// Double-precision float (`f64`).
    Double,

    /// Single-precision float (`f32`).
    Float,

    /// Boolean flag.
    Boolean,

    /// Fixed-point decimal (`rust_decimal::Decimal`).
    Decimal,

    /// Calendar date without time.
    Date,

    /// Time of day without date.
    Time,

    /// Date and time.
    Timestamp,

    /// A host type with no SQL category. Carries the type name for error
    /// reporting.
    Other(&'static str)
}

impl SqlKind {
    /// Host type name used in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text => "String",
            Self::TinyInt => "i8",
            Self::SmallInt => "i16",
            Self::Integer => "i32",
            Self::BigInt => "i64",
            Self::Double => "f64",
            Self::Float => "f32",
            Self::Boolean => "bool",
            Self::Decimal => "Decimal",
            Self::Date => "NaiveDate",
            Self::Time => "NaiveTime",
            Self::Timestamp => "NaiveDateTime",
            Self::Other(name) => name
        }
    }
}

impl fmt::Display for SqlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// One named, typed attribute of an entity declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    name:     String,
    kind:     SqlKind,
    column:   Option<String>,
    nullable: bool,
    unique:   bool,
    id:       bool
}

impl FieldDeclaration {
    /// Declare a field with default constraints: nullable, not unique,
    /// not an identity field.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: SqlKind) -> Self {
        Self {
            name: name.into(),
            kind,
            column: None,
            nullable: true,
            unique: false,
            id: false
        }
    }

    /// Override the column name. An empty override is ignored at resolution.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.column = Some(name.into());
        self
    }

    /// Set nullability explicitly.
    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Shorthand for `nullable(false)`.
    #[must_use]
    pub fn not_null(self) -> Self {
        self.nullable(false)
    }

    /// Set the uniqueness flag explicitly.
    #[must_use]
    pub fn unique_if(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Mark the column unique.
    #[must_use]
    pub fn unique(self) -> Self {
        self.unique_if(true)
    }

    /// Mark this field as an identity (primary key) candidate.
    #[must_use]
    pub fn id(mut self) -> Self {
        self.id = true;
        self
    }

    /// Attribute name as declared.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Semantic type tag.
    #[must_use]
    pub fn kind(&self) -> SqlKind {
        self.kind
    }

    /// Column override, if any.
    #[must_use]
    pub fn column_override(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Whether NULL is allowed.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Whether a UNIQUE constraint is requested.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Whether the field carries the identity marker.
    #[must_use]
    pub fn is_id(&self) -> bool {
        self.id
    }
}

/// Schema declaration of one entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDeclaration {
    name:   String,
    entity: bool,
    table:  Option<String>,
    fields: Vec<FieldDeclaration>
}

impl EntityDeclaration {
    /// Start a declaration that is **not** marked as an entity.
    ///
    /// Resolving such a declaration fails; use [`EntityDeclaration::entity`]
    /// or [`EntityDeclaration::mark_entity`] for entity types.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:   name.into(),
            entity: false,
            table:  None,
            fields: Vec::new()
        }
    }

    /// Start a declaration marked as an entity.
    #[must_use]
    pub fn entity(name: impl Into<String>) -> Self {
        Self::new(name).mark_entity()
    }

    /// Mark the declaration as an entity.
    #[must_use]
    pub fn mark_entity(mut self) -> Self {
        self.entity = true;
        self
    }

    /// Override the table name. An empty override is ignored at resolution.
    #[must_use]
    pub fn table(mut self, name: impl Into<String>) -> Self {
        self.table = Some(name.into());
        self
    }

    /// Append a field. Order of calls is declaration order.
    #[must_use]
    pub fn field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }

    /// Entity simple name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the declaration is marked as an entity.
    #[must_use]
    pub fn is_entity(&self) -> bool {
        self.entity
    }

    /// Table override, if any.
    #[must_use]
    pub fn table_override(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDeclaration] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_defaults() {
        let field = FieldDeclaration::new("description", SqlKind::Text);
        assert!(field.is_nullable());
        assert!(!field.is_unique());
        assert!(!field.is_id());
        assert_eq!(field.column_override(), None);
    }

    #[test]
    fn field_builder_sets_constraints() {
        let field = FieldDeclaration::new("name", SqlKind::Text)
            .column("custom_name")
            .not_null()
            .unique();
        assert_eq!(field.column_override(), Some("custom_name"));
        assert!(!field.is_nullable());
        assert!(field.is_unique());
    }

    #[test]
    fn new_declaration_is_not_an_entity() {
        assert!(!EntityDeclaration::new("Plain").is_entity());
        assert!(EntityDeclaration::new("Plain").mark_entity().is_entity());
        assert!(EntityDeclaration::entity("User").is_entity());
    }

    #[test]
    fn fields_keep_declaration_order() {
        let decl = EntityDeclaration::entity("Ordered")
            .field(FieldDeclaration::new("zeta", SqlKind::Text))
            .field(FieldDeclaration::new("alpha", SqlKind::Text))
            .field(FieldDeclaration::new("mid", SqlKind::Text));
        let names: Vec<_> = decl.fields().iter().map(FieldDeclaration::name).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn kind_display_uses_host_type_name() {
        assert_eq!(SqlKind::BigInt.to_string(), "i64");
        assert_eq!(SqlKind::Other("Vec<u8>").to_string(), "Vec<u8>");
    }
}
