// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types.
//!
//! Every failure in this crate is a schema or configuration defect surfaced
//! to the caller immediately. Nothing is retried.
//!
//! | Kind | Variants | Raised by |
//! |------|----------|-----------|
//! | [`ErrorKind::Structural`] | `NotAnEntity`, `MissingIdentity` | descriptor construction, cache |
//! | [`ErrorKind::TypeMapping`] | `UnsupportedType` | field descriptor construction |
//! | [`ErrorKind::Configuration`] | `EmptyDialect`, `UnsupportedDialect`, `ConfigSource` | dialect parsing, config loading |

use thiserror::Error;

/// Result alias with [`enum@Error`] as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Classification of an [`enum@Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Entity declaration is structurally invalid.
    Structural,

    /// Field type has no SQL equivalent.
    TypeMapping,

    /// Dialect or configuration source cannot be resolved.
    Configuration
}

/// Errors raised while resolving entities or configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The type was not marked with `#[entity]`.
    #[error("type `{entity}` is not an entity")]
    NotAnEntity {
        /// Declared type name.
        entity: String
    },

    /// No field carries the `#[id]` marker.
    #[error("entity `{entity}` must have an #[id] field")]
    MissingIdentity {
        /// Declared type name.
        entity: String
    },

    /// A field's host type has no SQL type mapping.
    #[error("unsupported type `{type_name}` for field `{entity}.{field}`")]
    UnsupportedType {
        /// Declared type name.
        entity:    String,
        /// Attribute name of the offending field.
        field:     String,
        /// Host type name.
        type_name: String
    },

    /// Dialect name was empty or blank.
    #[error("database dialect cannot be empty")]
    EmptyDialect,

    /// Dialect name did not match any supported dialect.
    #[error("unsupported database dialect: {0}")]
    UnsupportedDialect(String),

    /// Configuration source could not be read or deserialized.
    #[error("failed to load database configuration: {0}")]
    ConfigSource(#[from] ::config::ConfigError)
}

impl Error {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotAnEntity {
                ..
            }
            | Self::MissingIdentity {
                ..
            } => ErrorKind::Structural,
            Self::UnsupportedType {
                ..
            } => ErrorKind::TypeMapping,
            Self::EmptyDialect | Self::UnsupportedDialect(_) | Self::ConfigSource(_) => {
                ErrorKind::Configuration
            }
        }
    }
}
