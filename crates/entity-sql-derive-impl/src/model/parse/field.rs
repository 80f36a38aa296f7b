// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! ```rust,ignore
//! #[id]                                        // identity candidate
//! pub id: i64,
//!
//! #[column(name = "user_name", nullable = false, unique)]
//! pub name: String,
//!
//! pub nickname: Option<String>,                // Text, nullable
//! ```

mod column;

pub use column::ColumnConfig;
use syn::{Field, Ident, Type, ext::IdentExt};

use super::kind::FieldKind;

/// One named struct field with its parsed attributes.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Declared type.
    pub ty: Type,

    /// Semantic SQL kind derived from `ty`.
    pub kind: FieldKind,

    /// `#[id]` marker.
    pub is_id: bool,

    /// `#[column(...)]` settings.
    pub column: ColumnConfig
}

impl FieldDef {
    /// Parse a field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Returns error for unnamed fields and malformed `#[column]`.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Model fields must be named").with_span(field)
        })?;

        let mut is_id = false;
        let mut column = ColumnConfig::default();
        for attr in &field.attrs {
            if attr.path().is_ident("id") {
                is_id = true;
            } else if attr.path().is_ident("column") {
                column = ColumnConfig::from_attr(attr)?;
            }
        }

        Ok(Self {
            kind: FieldKind::from_type(&field.ty),
            ty: field.ty.clone(),
            ident,
            is_id,
            column
        })
    }

    /// Attribute name as declared, without a raw-identifier prefix.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Check if this field carries `#[id]`.
    #[must_use]
    pub fn is_id(&self) -> bool {
        self.is_id
    }
}
