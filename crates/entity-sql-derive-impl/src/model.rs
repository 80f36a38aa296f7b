// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! model.rs (orchestrator)
//! │
//! ├── parse/          → Attribute parsing (ModelDef, FieldDef, ColumnConfig)
//! │
//! ├── declaration.rs  → impl Model (schema declaration)
//! └── identity.rs     → impl Identifiable (only with an #[id] field)
//! ```
//!
//! # Generated Code
//!
//! For a model like:
//!
//! ```rust,ignore
//! #[derive(Model)]
//! #[entity(table = "users")]
//! pub struct User {
//!     #[id]
//!     pub id: i64,
//!     #[column(name = "user_name", nullable = false)]
//!     pub name: String,
//! }
//! ```
//!
//! The macro generates:
//!
//! | Item | Purpose |
//! |------|---------|
//! | `impl Model for User` | Entity declaration consumed by the descriptor cache |
//! | `impl Identifiable for User` | `type Id = i64`, `fn id(&self)` for the store |

mod declaration;
mod identity;
pub mod parse;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::ModelDef;

/// Main entry point for the Model derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ModelDef::from_derive_input(&input) {
        Ok(model) => generate(&model).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(model: &ModelDef) -> proc_macro2::TokenStream {
    let declaration = declaration::generate(model);
    let identity = identity::generate(model);

    quote! {
        #declaration
        #identity
    }
}
