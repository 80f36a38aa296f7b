// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column-level configuration.
//!
//! | Attribute | Example | Effect |
//! |-----------|---------|--------|
//! | `name` | `#[column(name = "user_name")]` | Column name override |
//! | `nullable` | `#[column(nullable = false)]` | `NOT NULL` when false |
//! | `unique` | `#[column(unique)]` | `UNIQUE` |

use syn::{Attribute, LitBool, LitStr, Meta, Token};

/// Parsed `#[column(...)]` attribute.
///
/// Fields left unset keep the declaration defaults: column name derived
/// from the field name, nullable, not unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Custom column name.
    pub name: Option<String>,

    /// Explicit nullability.
    pub nullable: Option<bool>,

    /// UNIQUE constraint.
    pub unique: bool
}

impl ColumnConfig {
    /// Parse `#[column(...)]`.
    ///
    /// `nullable` and `unique` accept both marker form and `= bool`.
    ///
    /// # Errors
    ///
    /// Returns error for unknown keys or values of the wrong literal type.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        let mut config = Self::default();

        if let Meta::List(meta_list) = &attr.meta {
            meta_list.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    config.name = Some(value.value());
                } else if meta.path.is_ident("nullable") {
                    config.nullable = Some(parse_flag(&meta)?);
                } else if meta.path.is_ident("unique") {
                    config.unique = parse_flag(&meta)?;
                } else {
                    return Err(meta.error("expected `name`, `nullable` or `unique`"));
                }
                Ok(())
            })?;
        }

        Ok(config)
    }

    /// Effective nullability: nullable unless explicitly disabled.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable.unwrap_or(true)
    }
}

/// `flag` or `flag = true|false`.
fn parse_flag(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<bool> {
    if meta.input.peek(Token![=]) {
        let value: LitBool = meta.value()?.parse()?;
        Ok(value.value)
    } else {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn parse(attr: Attribute) -> ColumnConfig {
        ColumnConfig::from_attr(&attr).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(parse_quote!(#[column]));
        assert_eq!(config, ColumnConfig::default());
        assert!(config.is_nullable());
    }

    #[test]
    fn all_options() {
        let config = parse(parse_quote!(#[column(name = "entity_name", nullable = false, unique)]));
        assert_eq!(config.name.as_deref(), Some("entity_name"));
        assert!(!config.is_nullable());
        assert!(config.unique);
    }

    #[test]
    fn flags_accept_explicit_values() {
        let config = parse(parse_quote!(#[column(nullable = true, unique = false)]));
        assert!(config.is_nullable());
        assert!(!config.unique);

        let config = parse(parse_quote!(#[column(nullable)]));
        assert_eq!(config.nullable, Some(true));
    }

    #[test]
    fn rejects_unknown_key() {
        let attr: Attribute = parse_quote!(#[column(varchar = 10)]);
        assert!(ColumnConfig::from_attr(&attr).is_err());
    }

    #[test]
    fn rejects_wrong_literal() {
        let attr: Attribute = parse_quote!(#[column(name = 5)]);
        assert!(ColumnConfig::from_attr(&attr).is_err());

        let attr: Attribute = parse_quote!(#[column(nullable = "no")]);
        assert!(ColumnConfig::from_attr(&attr).is_err());
    }
}
