//! Environment variable abstraction for testability.
//!
//! Production code uses [`Env::real()`] which delegates to [`std::env::var`].
//! Tests use [`Env::mock()`] backed by a `HashMap`, so config layering can be
//! exercised without touching the process environment.

use std::collections::HashMap;
use std::str::FromStr;

/// Environment variable reader.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Create an `Env` that reads from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Create an `Env` backed by explicit key-value pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up an environment variable by name.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Look up and parse a variable.
    ///
    /// Returns `None` when the variable is absent. A present but unparsable
    /// value is reported with a warning and also yields `None`.
    pub fn parse<T: FromStr>(&self, name: &str) -> Option<T> {
        let raw = self.var(name).ok()?;
        match raw.trim().parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid {name} value: {raw}");
                None
            }
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_env_reads_cargo_manifest_dir() {
        let env = Env::real();
        assert!(env.var("CARGO_MANIFEST_DIR").is_ok());
    }

    #[test]
    fn mock_env_returns_set_values() {
        let env = Env::mock([("TASKSCOUT_TASKS", "todo.json"), ("OTHER", "x")]);
        assert_eq!(env.var("TASKSCOUT_TASKS").unwrap(), "todo.json");
        assert_eq!(env.var("OTHER").unwrap(), "x");
    }

    #[test]
    fn mock_env_returns_not_present_for_missing() {
        let env = Env::mock(Vec::<(&str, &str)>::new());
        assert!(env.var("NONEXISTENT").is_err());
    }

    #[test]
    fn parse_reads_numbers() {
        let env = Env::mock([("INTERVAL", " 15 ")]);
        assert_eq!(env.parse::<u64>("INTERVAL"), Some(15));
    }

    #[test]
    fn parse_rejects_garbage() {
        let env = Env::mock([("INTERVAL", "soon")]);
        assert_eq!(env.parse::<u64>("INTERVAL"), None);
        assert_eq!(env.parse::<u64>("MISSING"), None);
    }
}
