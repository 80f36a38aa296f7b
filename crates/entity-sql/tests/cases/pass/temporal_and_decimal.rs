// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! chrono and rust_decimal field types.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use entity_sql::{Model, SqlKind};
use rust_decimal::Decimal;

#[derive(Model)]
#[entity(table = "invoices")]
pub struct Invoice {
    #[id]
    pub id: u64,
    pub amount: Decimal,
    pub issued_on: NaiveDate,
    pub due_at: NaiveTime,
    pub created_at: NaiveDateTime,
    pub paid_at: Option<DateTime<Utc>>,
}

fn main() {
    let decl = <Invoice as entity_sql::Model>::declaration();
    let kinds: Vec<SqlKind> = decl.fields().iter().map(|f| f.kind()).collect();
    assert_eq!(
        kinds,
        [
            SqlKind::BigInt,
            SqlKind::Decimal,
            SqlKind::Date,
            SqlKind::Time,
            SqlKind::Timestamp,
            SqlKind::Timestamp
        ]
    );
}
