// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Minimal entity with an id and a table override.

use entity_sql::{Identifiable, Model};

#[derive(Debug, Clone, Model)]
#[entity(table = "users")]
pub struct User {
    #[id]
    pub id: i64,

    pub username: String,
}

fn main() {
    let decl = <User as entity_sql::Model>::declaration();
    assert!(decl.is_entity());
    assert_eq!(decl.table_override(), Some("users"));

    let user = User {
        id: 5,
        username: "neo".to_string(),
    };
    let id: i64 = user.id();
    assert_eq!(id, 5);
}
