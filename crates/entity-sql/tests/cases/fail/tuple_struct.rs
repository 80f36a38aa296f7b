// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_sql::Model;

#[derive(Model)]
#[entity(table = "items")]
pub struct Item(i64, String);

fn main() {}
