use std::path::PathBuf;

use freezo_core::config::{env_lookup, parse_var, string_var, ConfigError};

/// Storage configuration loaded from environment variables.
///
/// | Env Var                   | Default        |
/// |---------------------------|----------------|
/// | `DB_PATH`                 | `./freezer.db` |
/// | `DB_MAX_CONNECTIONS`      | `5`            |
/// | `DB_ENFORCE_FOREIGN_KEYS` | `true`         |
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path of the SQLite database file.
    pub path: PathBuf,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// Turn on `PRAGMA foreign_keys` so the store rejects dangling
    /// `freezer_id`/`category_id` references and deletes of referenced freezers.
    pub enforce_foreign_keys: bool,
}

impl DbConfig {
    pub const DEFAULT_PATH: &'static str = "./freezer.db";

    /// Configuration for a database file at `path` with every other
    /// setting at its default.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: 5,
            enforce_foreign_keys: true,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::for_path(Self::DEFAULT_PATH);
        Ok(Self {
            path: PathBuf::from(string_var(&lookup, "DB_PATH", Self::DEFAULT_PATH)),
            max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            enforce_foreign_keys: parse_var(
                &lookup,
                "DB_ENFORCE_FOREIGN_KEYS",
                defaults.enforce_foreign_keys,
            )?,
        })
    }
}
