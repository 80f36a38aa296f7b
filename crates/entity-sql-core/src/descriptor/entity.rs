// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Table metadata for a single entity.

use tracing::{debug, warn};

use super::FieldDescriptor;
use crate::{
    declaration::EntityDeclaration,
    error::{Error, Result},
    naming
};

/// Resolved, immutable table mapping of one entity type.
///
/// Built once per entity declaration. Fields keep declaration order, and
/// exactly one of them is the identity field: the first one marked `#[id]`.
///
/// # Example
///
/// ```rust
/// use entity_sql_core::{EntityDeclaration, EntityDescriptor, FieldDeclaration, SqlKind};
///
/// let decl = EntityDeclaration::entity("UserEntity")
///     .table("custom_users")
///     .field(FieldDeclaration::new("id", SqlKind::BigInt).id())
///     .field(FieldDeclaration::new("username", SqlKind::Text).not_null());
///
/// let descriptor = EntityDescriptor::new(&decl).unwrap();
/// assert_eq!(descriptor.table_name(), "custom_users");
/// assert_eq!(descriptor.id_field().column_name(), "id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescriptor {
    entity:   String,
    table:    String,
    fields:   Vec<FieldDescriptor>,
    id_index: usize
}

impl EntityDescriptor {
    /// Resolve an entity declaration.
    ///
    /// The entity marker is not checked here; that is the cache's job.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedType`] if any field type has no SQL mapping
    /// - [`Error::MissingIdentity`] if no field is marked as identity
    pub fn new(decl: &EntityDeclaration) -> Result<Self> {
        let entity = decl.name();
        let table = naming::resolve_override(decl.table_override(), entity);

        let mut fields = Vec::with_capacity(decl.fields().len());
        let mut id_index = None;

        for (index, field_decl) in decl.fields().iter().enumerate() {
            let field = FieldDescriptor::new(entity, field_decl)?;
            if field.is_identity() {
                match id_index {
                    None => id_index = Some(index),
                    Some(_) => warn!(
                        entity,
                        field = field.attribute(),
                        "additional #[id] field ignored, first declared identity wins"
                    )
                }
            }
            fields.push(field);
        }

        let id_index = id_index.ok_or_else(|| Error::MissingIdentity {
            entity: entity.to_string()
        })?;

        debug!(
            entity,
            table = %table,
            fields = fields.len(),
            "resolved entity descriptor"
        );

        Ok(Self {
            entity: entity.to_string(),
            table,
            fields,
            id_index
        })
    }

    /// Entity simple name.
    #[must_use]
    pub fn entity_name(&self) -> &str {
        &self.entity
    }

    /// Resolved table name.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// All fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a field by attribute name.
    #[must_use]
    pub fn field(&self, attribute: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.attribute() == attribute)
    }

    /// The primary key field.
    #[must_use]
    pub fn id_field(&self) -> &FieldDescriptor {
        &self.fields[self.id_index]
    }

    /// Resolved column names in declaration order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.fields.iter().map(FieldDescriptor::column_name).collect()
    }

    /// Render a dialect-agnostic `CREATE TABLE IF NOT EXISTS` statement.
    ///
    /// Column types come from the strict field table. Constraint suffixes
    /// follow the fixed order `PRIMARY KEY`, `NOT NULL`, `UNIQUE`.
    #[must_use]
    pub fn create_table_sql(&self) -> String {
        let columns: Vec<String> = self
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let mut parts = vec![format!("    {}", field.column_name()), field.sql_type().to_string()];
                if index == self.id_index {
                    parts.push("PRIMARY KEY".to_string());
                }
                if !field.is_nullable() {
                    parts.push("NOT NULL".to_string());
                }
                if field.is_unique() {
                    parts.push("UNIQUE".to_string());
                }
                parts.join(" ")
            })
            .collect();

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
            self.table,
            columns.join(",\n")
        )
    }
}
