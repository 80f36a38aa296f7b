// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_sql::Model;

#[derive(Model)]
#[entity]
pub struct Account {
    #[id]
    pub id: i64,
    #[column(indexed)]
    pub email: String,
}

fn main() {}
