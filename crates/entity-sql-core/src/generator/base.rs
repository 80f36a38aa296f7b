// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Helpers shared by every dialect.
//!
//! Statement columns on the DML and DDL paths are derived from attribute
//! names (snake-cased), not from column overrides. Only `select_all` uses
//! the descriptor's resolved column names.

use super::SqlGenerator;
use crate::{descriptor::EntityDescriptor, naming::camel_to_snake};

/// Snake-cased attribute names in declaration order.
pub(crate) fn attribute_columns(descriptor: &EntityDescriptor) -> Vec<String> {
    descriptor
        .fields()
        .iter()
        .map(|f| camel_to_snake(f.attribute()))
        .collect()
}

/// Columns for the SET clause: everything except the identity column.
///
/// A field is excluded when its attribute name, its snake-cased form or its
/// resolved column name equals `id_column`.
pub(crate) fn update_columns(descriptor: &EntityDescriptor, id_column: &str) -> Vec<String> {
    descriptor
        .fields()
        .iter()
        .filter(|f| f.attribute() != id_column && f.column_name() != id_column)
        .map(|f| camel_to_snake(f.attribute()))
        .filter(|column| column != id_column)
        .collect()
}

/// Build `<col> <type>[ NOT NULL][ UNIQUE]` lines and wrap them into the
/// dialect's CREATE TABLE layout.
pub(crate) fn create_table<G: SqlGenerator + ?Sized>(generator: &G, descriptor: &EntityDescriptor) -> String {
    let columns: Vec<String> = descriptor
        .fields()
        .iter()
        .map(|field| {
            let mut def = format!(
                "  {} {}",
                camel_to_snake(field.attribute()),
                generator.map_type(field.kind())
            );
            if !field.is_nullable() {
                def.push_str(" NOT NULL");
            }
            if field.is_unique() {
                def.push_str(" UNIQUE");
            }
            def
        })
        .collect();

    let primary_key = camel_to_snake(descriptor.id_field().attribute());

    format!(
        "CREATE TABLE {} (\n{}\n, PRIMARY KEY ({})\n){}",
        descriptor.table_name(),
        columns.join(",\n"),
        primary_key,
        generator.table_suffix()
    )
}
