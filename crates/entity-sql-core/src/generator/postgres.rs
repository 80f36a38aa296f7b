// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! PostgreSQL generator.

use super::SqlGenerator;
use crate::{declaration::SqlKind, dialect::Dialect};

/// Generator for PostgreSQL: `$n` placeholders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostgresGenerator;

impl SqlGenerator for PostgresGenerator {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn placeholder(&self, index: usize) -> String {
        format!("${index}")
    }

    fn map_type(&self, kind: SqlKind) -> &'static str {
        match kind {
            SqlKind::Text => "VARCHAR(255)",
            SqlKind::Integer => "INTEGER",
            SqlKind::BigInt => "BIGINT",
            SqlKind::Double => "DOUBLE PRECISION",
            SqlKind::Float => "REAL",
            SqlKind::Boolean => "BOOLEAN",
            SqlKind::Decimal => "NUMERIC(19,4)",
            SqlKind::Date => "DATE",
            SqlKind::Time => "TIME",
            SqlKind::Timestamp => "TIMESTAMP",
            SqlKind::TinyInt | SqlKind::SmallInt | SqlKind::Other(_) => "VARCHAR(255)"
        }
    }

    fn table_suffix(&self) -> &'static str {
        ";"
    }
}
