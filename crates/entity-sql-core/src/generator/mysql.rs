// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! MySQL / InnoDB generator.

use super::SqlGenerator;
use crate::{declaration::SqlKind, dialect::Dialect};

/// Generator for MySQL: `?` placeholders, InnoDB table options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MySqlGenerator;

impl SqlGenerator for MySqlGenerator {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }

    fn map_type(&self, kind: SqlKind) -> &'static str {
        match kind {
            SqlKind::Text => "VARCHAR(255)",
            SqlKind::Integer => "INT",
            SqlKind::BigInt => "BIGINT",
            SqlKind::Double => "DOUBLE",
            SqlKind::Float => "FLOAT",
            SqlKind::Boolean => "TINYINT(1)",
            SqlKind::Decimal => "DECIMAL(19,4)",
            SqlKind::Date => "DATE",
            SqlKind::Time => "TIME",
            SqlKind::Timestamp => "TIMESTAMP",
            SqlKind::TinyInt | SqlKind::SmallInt | SqlKind::Other(_) => "VARCHAR(255)"
        }
    }

    fn table_suffix(&self) -> &'static str {
        " ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci;"
    }
}
