// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `impl Identifiable` generation.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::ModelDef;

/// Generate `impl ::entity_sql::Identifiable` from the first `#[id]` field.
///
/// Returns an empty stream when the model has no identity field; such a
/// model still derives `Model` but cannot be stored.
pub fn generate(model: &ModelDef) -> TokenStream {
    let Some(id) = model.id_field() else {
        return TokenStream::new();
    };

    let ident = &model.ident;
    let generics = model.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let field = &id.ident;
    let ty = &id.ty;

    quote! {
        impl #impl_generics ::entity_sql::Identifiable for #ident #ty_generics #where_clause {
            type Id = #ty;

            fn id(&self) -> Self::Id {
                ::core::clone::Clone::clone(&self.#field)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(input: syn::DeriveInput) -> String {
        let model = ModelDef::from_derive_input(&input).unwrap();
        generate(&model).to_string().replace(' ', "")
    }

    #[test]
    fn uses_first_id_field() {
        let code = render(syn::parse_quote! {
            #[entity]
            struct Pair {
                #[id]
                left: String,
                #[id]
                right: i64,
            }
        });
        assert!(code.contains("typeId=String;"));
        assert!(code.contains("&self.left"));
    }

    #[test]
    fn generic_model_is_bounded() {
        let code = render(syn::parse_quote! {
            #[entity]
            struct Tagged<T> {
                #[id]
                id: i64,
                tag: T,
            }
        });
        assert!(code.contains("IdentifiableforTagged<T>whereT:::core::marker::Send+::core::marker::Sync+'static"));
    }

    #[test]
    fn absent_without_id() {
        let code = render(syn::parse_quote! {
            #[entity]
            struct Log {
                message: String,
            }
        });
        assert!(code.is_empty());
    }
}
