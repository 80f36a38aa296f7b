// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! ModelDef: the parsed struct handed to every generator.

use darling::FromDeriveInput;
use syn::{DeriveInput, Generics, Ident, parse_quote};

use super::{attrs::EntityAttrs, field::FieldDef};

/// Complete parsed model definition.
///
/// No structural validation beyond "named struct" happens here: missing or
/// repeated `#[id]` fields are reported when the descriptor is resolved at
/// runtime, which keeps unmarked models and id-less entities expressible.
#[derive(Debug)]
pub struct ModelDef {
    /// Struct identifier (e.g., `UserAccount`).
    pub ident: Ident,

    /// Struct generics, propagated to the generated impls.
    pub generics: Generics,

    /// Whether `#[entity]` is present.
    pub is_entity: bool,

    /// `#[entity(table = "...")]` override.
    pub table: Option<String>,

    /// Named fields in declaration order.
    pub fields: Vec<FieldDef>
}

impl ModelDef {
    /// Parse a model from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - applied to an enum or union
    /// - applied to a tuple or unit struct
    /// - malformed `#[entity]` or `#[column]` attributes
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;
        let is_entity = input.attrs.iter().any(|a| a.path().is_ident("entity"));

        let fields = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(FieldDef::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("Model requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Model can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            is_entity,
            table: attrs.table,
            fields
        })
    }

    /// Struct name as written, used as the entity name.
    #[must_use]
    pub fn name(&self) -> String {
        self.ident.to_string()
    }

    /// Struct generics with `Send + Sync + 'static` added for every type
    /// parameter, as required by the `Model` supertraits.
    #[must_use]
    pub fn bounded_generics(&self) -> Generics {
        let mut generics = self.generics.clone();
        let params: Vec<Ident> = generics.type_params().map(|p| p.ident.clone()).collect();
        let where_clause = generics.make_where_clause();
        for param in params {
            where_clause
                .predicates
                .push(parse_quote!(#param: ::core::marker::Send + ::core::marker::Sync + 'static));
        }
        generics
    }

    /// First field marked `#[id]`.
    #[must_use]
    pub fn id_field(&self) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.is_id())
    }
}
