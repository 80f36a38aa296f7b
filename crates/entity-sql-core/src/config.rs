// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Database connection settings.
//!
//! Settings live under a `[database]` section. [`DatabaseConfig::load`]
//! layers an optional TOML file under environment variables:
//!
//! ```toml
//! [database]
//! url = "jdbc:postgresql://localhost:5432/app"
//! username = "app"
//! password = "secret"
//! dialect = "postgresql"
//! ```
//!
//! | Source | Example |
//! |--------|---------|
//! | file | `config/database.toml` |
//! | environment | `ENTITY_SQL__DATABASE__DIALECT=oracle` |

use std::{fmt, path::Path};

use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{dialect::Dialect, error::Result};

/// Default configuration file consulted by [`DatabaseConfig::load`].
pub const DEFAULT_CONFIG_PATH: &str = "config/database.toml";

/// Environment variable prefix consulted by [`DatabaseConfig::load`].
pub const ENV_PREFIX: &str = "ENTITY_SQL";

/// Connection settings plus the SQL dialect to generate for.
///
/// # Example
///
/// ```rust
/// use entity_sql_core::{DatabaseConfig, Dialect};
///
/// let config = DatabaseConfig::new("jdbc:mysql://localhost/app", "root", "pw")
///     .with_dialect(Dialect::Oracle);
/// assert_eq!(config.dialect_name(), "ORACLE");
/// assert!(!format!("{config:?}").contains("pw"));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    url:      String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    dialect:  Dialect
}

impl DatabaseConfig {
    /// Create settings for the default dialect (MySQL).
    #[must_use]
    pub fn new(url: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            url:      url.into(),
            username: username.into(),
            password: password.into(),
            dialect:  Dialect::default()
        }
    }

    /// Replace the dialect.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Replace the dialect by name (`mysql`, `postgresql`, `oracle`, any
    /// case).
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the name is empty or unknown.
    pub fn with_dialect_name(self, name: &str) -> Result<Self> {
        Ok(self.with_dialect(name.parse()?))
    }

    /// Load from [`DEFAULT_CONFIG_PATH`] (optional) and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigSource`](crate::Error::ConfigSource) if the
    /// `database` section is missing, malformed or names an unknown dialect.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load from a TOML file (optional) overlaid by `ENTITY_SQL__*`
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Same as [`DatabaseConfig::load`].
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_layered(path.as_ref(), environment())
    }

    fn load_layered(path: &Path, env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()?;

        let config: Self = settings.get("database")?;
        debug!(path = %path.display(), dialect = %config.dialect, "loaded database configuration");
        Ok(config)
    }

    /// Parse settings from an in-memory TOML document.
    ///
    /// # Errors
    ///
    /// Same as [`DatabaseConfig::load`].
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;
        Ok(settings.get("database")?)
    }

    /// Connection URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Login user.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Login password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Selected dialect.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Upper-case dialect name, e.g. `POSTGRESQL`.
    #[must_use]
    pub fn dialect_name(&self) -> &'static str {
        self.dialect.as_str()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("dialect", &self.dialect)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ::config::Map;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::{Error, ErrorKind};

    fn env(vars: &[(&str, &str)]) -> Environment {
        let vars: Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        environment().source(Some(vars))
    }

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const POSTGRES_FILE: &str = r#"
        [database]
        url = "jdbc:postgresql://localhost:5432/app"
        username = "app"
        password = "secret"
        dialect = "postgresql"
    "#;

    #[test]
    fn new_defaults_to_mysql() {
        let config = DatabaseConfig::new("jdbc:mysql://localhost/app", "root", "pw");
        assert_eq!(config.dialect(), Dialect::MySql);
        assert_eq!(config.dialect_name(), "MYSQL");
        assert_eq!(config.url(), "jdbc:mysql://localhost/app");
        assert_eq!(config.username(), "root");
        assert_eq!(config.password(), "pw");
    }

    #[test]
    fn dialect_by_name() {
        let config = DatabaseConfig::new("url", "u", "p")
            .with_dialect_name("PostgreSQL")
            .unwrap();
        assert_eq!(config.dialect(), Dialect::Postgres);

        let err = DatabaseConfig::new("url", "u", "p")
            .with_dialect_name("MongoDB")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        assert!(matches!(
            DatabaseConfig::new("url", "u", "p").with_dialect_name(" "),
            Err(Error::EmptyDialect)
        ));
    }

    #[test]
    fn debug_redacts_password() {
        let config = DatabaseConfig::new("url", "admin", "hunter2");
        let debug = format!("{config:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn parses_toml() {
        let config = DatabaseConfig::from_toml_str(
            r#"
            [database]
            url = "jdbc:oracle:thin:@localhost:1521/XE"
            username = "system"
            password = "oracle"
            dialect = "Oracle"
            "#
        )
        .unwrap();
        assert_eq!(config.dialect(), Dialect::Oracle);
        assert_eq!(config.username(), "system");
    }

    #[test]
    fn missing_dialect_defaults_to_mysql() {
        let config = DatabaseConfig::from_toml_str(
            r#"
            [database]
            url = "jdbc:mysql://localhost/app"
            "#
        )
        .unwrap();
        assert_eq!(config.dialect(), Dialect::MySql);
        assert_eq!(config.password(), "");
    }

    #[test]
    fn unknown_dialect_fails() {
        let err = DatabaseConfig::from_toml_str(
            r#"
            [database]
            url = "jdbc:db2://localhost/app"
            dialect = "db2"
            "#
        )
        .unwrap_err();
        assert!(matches!(err, Error::ConfigSource(_)));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn missing_section_fails() {
        let err = DatabaseConfig::from_toml_str("[other]\nkey = 1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn loads_file() {
        let file = toml_file(POSTGRES_FILE);
        let config = DatabaseConfig::load_layered(file.path(), env(&[])).unwrap();
        assert_eq!(config.url(), "jdbc:postgresql://localhost:5432/app");
        assert_eq!(config.username(), "app");
        assert_eq!(config.password(), "secret");
        assert_eq!(config.dialect(), Dialect::Postgres);
    }

    #[test]
    fn environment_overrides_file() {
        let file = toml_file(POSTGRES_FILE);
        let config = DatabaseConfig::load_layered(
            file.path(),
            env(&[("ENTITY_SQL__DATABASE__DIALECT", "oracle")])
        )
        .unwrap();
        assert_eq!(config.dialect(), Dialect::Oracle);
        assert_eq!(config.username(), "app");
    }

    #[test]
    fn environment_alone_is_enough() {
        let config = DatabaseConfig::load_layered(
            Path::new("does/not/exist.toml"),
            env(&[("ENTITY_SQL__DATABASE__URL", "jdbc:mysql://db/app")])
        )
        .unwrap();
        assert_eq!(config.url(), "jdbc:mysql://db/app");
        assert_eq!(config.dialect(), Dialect::MySql);
    }

    #[test]
    fn missing_file_and_environment_fails() {
        let err = DatabaseConfig::load_layered(Path::new("does/not/exist.toml"), env(&[])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
