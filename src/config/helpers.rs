// src/config/helpers.rs
// Helper functions for loading environment variables

use std::env;
use std::str::FromStr;

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an env var, falling back to `default` when unset or unparseable
pub fn env_parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Boolean env var: accepts true/false, 1/0, yes/no, on/off
pub fn env_bool(key: &str, default: bool) -> bool {
    env::var(key)
        .ok()
        .and_then(|v| parse_bool(&v))
        .unwrap_or(default)
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_variants() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool("sometimes"), None);
    }

    #[test]
    fn missing_vars_fall_back() {
        assert_eq!(env_or("SARDINAI_TEST_SURELY_UNSET", "x"), "x");
        assert_eq!(env_parsed::<u16>("SARDINAI_TEST_SURELY_UNSET", 5), 5);
        assert!(env_bool("SARDINAI_TEST_SURELY_UNSET", true));
    }
}
