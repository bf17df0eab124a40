//! Configuration management for the contact manager binary.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact manager binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the `first,last,phone` record file
    pub contacts_file: PathBuf,

    /// Abort on the first rejected record (default: false)
    pub strict_import: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `CONTACTS_FILE`: Path to the record file
    ///
    /// Optional environment variables:
    /// - `STRICT_IMPORT`: Stop at the first invalid record (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();
        Self::from_process_env()
    }

    /// Read configuration from the process environment only, ignoring `.env`.
    fn from_process_env() -> ConfigResult<Self> {
        let contacts_file = env::var("CONTACTS_FILE")
            .map_err(|_| ConfigError::MissingVar("CONTACTS_FILE".to_string()))?;

        if contacts_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let strict_import = Self::parse_env_bool("STRICT_IMPORT", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            contacts_file: PathBuf::from(contacts_file),
            strict_import,
            log_level,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Sets or removes env vars for one test and restores them on drop
    struct EnvGuard {
        saved: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { saved: Vec::new() }
        }

        fn save(&mut self, key: &str) {
            if !self.saved.iter().any(|(k, _)| k == key) {
                self.saved.push((key.to_string(), env::var(key).ok()));
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            self.save(key);
            env::set_var(key, value);
        }

        fn remove(&mut self, key: &str) {
            self.save(key);
            env::remove_var(key);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_missing_contacts_file() {
        let mut guard = EnvGuard::new();
        guard.remove("CONTACTS_FILE");

        match Config::from_process_env() {
            Err(ConfigError::MissingVar(var)) => assert_eq!(var, "CONTACTS_FILE"),
            other => panic!("Expected MissingVar error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_env_guard_restores_previous_values() {
        env::set_var("TEST_GUARD_KEPT", "before");
        env::remove_var("TEST_GUARD_ADDED");

        {
            let mut guard = EnvGuard::new();
            guard.remove("TEST_GUARD_KEPT");
            guard.set("TEST_GUARD_ADDED", "during");
            guard.set("TEST_GUARD_KEPT", "changed");
            assert_eq!(env::var("TEST_GUARD_KEPT").unwrap(), "changed");
        }

        assert_eq!(env::var("TEST_GUARD_KEPT").unwrap(), "before");
        assert!(env::var("TEST_GUARD_ADDED").is_err());
        env::remove_var("TEST_GUARD_KEPT");
    }

    #[test]
    #[serial]
    fn test_config_from_env_blank_contacts_file() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_FILE", "   ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "CONTACTS_FILE"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_FILE", "contacts.csv");
        guard.set("STRICT_IMPORT", "TRUE");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.contacts_file, PathBuf::from("contacts.csv"));
        assert!(config.strict_import);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_invalid_strict_import() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_FILE", "contacts.csv");
        guard.set("STRICT_IMPORT", "maybe");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, reason }) => {
                assert_eq!(var, "STRICT_IMPORT");
                assert!(reason.contains("maybe"));
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL", "0");

        assert!(!Config::parse_env_bool("TEST_BOOL", true).unwrap());
        assert!(Config::parse_env_bool("NONEXISTENT_BOOL", true).unwrap());
    }
}
