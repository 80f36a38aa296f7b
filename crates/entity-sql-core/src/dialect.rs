// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Database dialect selection.
//!
//! This module defines [`Dialect`], which selects the SQL generator used
//! for statement text (placeholders, type names, DDL tail).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported SQL dialects.
///
/// | Dialect | Placeholders | DDL tail |
/// |---------|--------------|----------|
/// | MySQL | `?, ?, ?` | `) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci;` |
/// | PostgreSQL | `$1, $2, $3` | `);` |
/// | Oracle | `:1, :2, :3` | `)` |
///
/// # Examples
///
/// ```rust
/// use entity_sql_core::Dialect;
///
/// assert_eq!("postgresql".parse::<Dialect>().unwrap(), Dialect::Postgres);
/// assert_eq!(Dialect::default(), Dialect::MySql);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dialect {
    /// MySQL / InnoDB.
    #[default]
    MySql,

    /// PostgreSQL.
    Postgres,

    /// Oracle Database.
    Oracle
}

impl Dialect {
    /// All supported dialects.
    pub const ALL: [Self; 3] = [Self::MySql, Self::Postgres, Self::Oracle];

    /// Canonical upper-case name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MySql => "MYSQL",
            Self::Postgres => "POSTGRESQL",
            Self::Oracle => "ORACLE"
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    /// Case-insensitive match against the canonical names.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().is_empty() {
            return Err(Error::EmptyDialect);
        }

        match value.to_ascii_uppercase().as_str() {
            "MYSQL" => Ok(Self::MySql),
            "POSTGRESQL" => Ok(Self::Postgres),
            "ORACLE" => Ok(Self::Oracle),
            _ => Err(Error::UnsupportedDialect(value.to_string()))
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.as_str().to_string()
    }
}
