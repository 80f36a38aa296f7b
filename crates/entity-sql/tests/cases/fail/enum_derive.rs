// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_sql::Model;

#[derive(Model)]
#[entity(table = "statuses")]
pub enum Status {
    Active,
    Inactive,
}

fn main() {}
