// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `impl Model` generation.
//!
//! Emits a builder chain over `EntityDeclaration` / `FieldDeclaration`
//! mirroring the struct's attributes in declaration order.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{FieldDef, ModelDef};

/// Generate `impl ::entity_sql::Model`.
pub fn generate(model: &ModelDef) -> TokenStream {
    let ident = &model.ident;
    let name = model.name();
    let generics = model.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let constructor = if model.is_entity {
        quote!(::entity_sql::EntityDeclaration::entity(#name))
    } else {
        quote!(::entity_sql::EntityDeclaration::new(#name))
    };
    let table = model.table.as_ref().map(|table| quote!(.table(#table)));
    let fields = model.fields.iter().map(field_declaration);

    quote! {
        impl #impl_generics ::entity_sql::Model for #ident #ty_generics #where_clause {
            fn declaration() -> ::entity_sql::EntityDeclaration {
                #constructor
                    #table
                    #(.field(#fields))*
            }
        }
    }
}

fn field_declaration(field: &FieldDef) -> TokenStream {
    let name = field.name_str();
    let kind = &field.kind;
    let column = field.column.name.as_ref().map(|column| quote!(.column(#column)));
    let nullable = field.column.is_nullable();
    let unique = field.column.unique;
    let id = field.is_id().then(|| quote!(.id()));

    quote! {
        ::entity_sql::FieldDeclaration::new(#name, #kind)
            #column
            .nullable(#nullable)
            .unique_if(#unique)
            #id
    }
}
