// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! All `#[column]` forms accepted by the derive.

use entity_sql::Model;

#[derive(Model)]
#[entity]
pub struct Account {
    #[id]
    pub id: i64,

    #[column(name = "account_name", nullable = false, unique)]
    pub name: String,

    #[column(nullable = false)]
    pub email: String,

    #[column(unique = true, nullable = true)]
    pub handle: Option<String>,

    #[column]
    pub note: Option<String>,
}

fn main() {
    let decl = <Account as entity_sql::Model>::declaration();
    let name = &decl.fields()[1];
    assert_eq!(name.column_override(), Some("account_name"));
    assert!(!name.is_nullable());
    assert!(name.is_unique());
}
