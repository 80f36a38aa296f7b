// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Model derive macro.
//!
//! Struct-level `#[entity(...)]` is parsed with [`darling`]; field-level
//! `#[id]` and `#[column(...)]` use manual parsing because `#[id]` is a bare
//! marker and `#[column]` mixes markers with key-value pairs.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── attrs.rs      - #[entity(table = "...")] via darling
//! ├── def.rs        - ModelDef: struct-level definition
//! ├── field.rs      - FieldDef: one named field
//! │   └── column.rs - #[column(name, nullable, unique)]
//! └── kind.rs       - Rust type → semantic SQL kind
//! ```
//!
//! # Data Structures
//!
//! ```text
//! ModelDef
//! ├── ident: Ident            (struct name, e.g., "UserAccount")
//! ├── generics: Generics
//! ├── is_entity: bool         (#[entity] present)
//! ├── table: Option<String>   (#[entity(table = "...")])
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident: Ident
//!         ├── ty: Type
//!         ├── kind: FieldKind
//!         ├── is_id: bool
//!         └── column: ColumnConfig
//! ```

mod attrs;
mod def;
mod field;
mod kind;


pub use def::ModelDef;
pub use field::FieldDef;
