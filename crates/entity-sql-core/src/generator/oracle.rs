// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Oracle generator.

use super::SqlGenerator;
use crate::{declaration::SqlKind, dialect::Dialect};

/// Generator for Oracle: `:n` placeholders, `NUMBER` based numerics and no
/// statement terminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OracleGenerator;

impl SqlGenerator for OracleGenerator {
    fn dialect(&self) -> Dialect {
        Dialect::Oracle
    }

    fn placeholder(&self, index: usize) -> String {
        format!(":{index}")
    }

    fn map_type(&self, kind: SqlKind) -> &'static str {
        match kind {
            SqlKind::Text => "VARCHAR2(255)",
            SqlKind::Integer => "NUMBER(10)",
            SqlKind::BigInt => "NUMBER(19)",
            SqlKind::Double | SqlKind::Float | SqlKind::Decimal => "NUMBER(19,4)",
            SqlKind::Boolean => "NUMBER(1)",
            SqlKind::Date => "DATE",
            SqlKind::Time | SqlKind::Timestamp => "TIMESTAMP",
            SqlKind::TinyInt | SqlKind::SmallInt | SqlKind::Other(_) => "VARCHAR2(255)"
        }
    }

    fn table_suffix(&self) -> &'static str {
        ""
    }
}
