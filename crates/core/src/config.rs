//! Environment-variable parsing shared by the server and storage configs.
//!
//! Config structs expose a `from_lookup` constructor taking a key lookup
//! closure so they can be tested without touching the process environment.
//! `from_env` wraps it with [`std::env::var`].

use std::str::FromStr;

/// A configuration value was present but could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Look up a process environment variable, treating unset and non-UTF-8
/// values alike.
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Read `key` through `lookup` and parse it, falling back to `default` when
/// the variable is unset or blank.
pub fn parse_var<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key,
                expected: std::any::type_name::<T>(),
                value: raw,
            })
        }
        _ => Ok(default),
    }
}

/// Read a string variable, falling back to `default` when unset or blank.
pub fn string_var<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
