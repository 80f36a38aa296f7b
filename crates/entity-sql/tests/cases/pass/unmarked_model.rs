// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Models without `#[entity]` or without `#[id]` still derive.

use entity_sql::Model;

#[derive(Model)]
pub struct Draft {
    #[id]
    pub key: i32,
}

#[derive(Model)]
#[entity]
pub struct AuditLog {
    pub message: String,
    pub level: u8,
}

fn main() {
    assert!(!<Draft as entity_sql::Model>::declaration().is_entity());

    let log = <AuditLog as entity_sql::Model>::declaration();
    assert!(log.is_entity());
    assert!(log.fields().iter().all(|f| !f.is_id()));
}
