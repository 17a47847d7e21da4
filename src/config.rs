//! Runtime configuration read from the environment (and `.env`).

use crate::models::DEFAULT_ROOM;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP server listens on (`BIND_ADDR`)
    pub bind_addr: String,
    /// Room given to seminars created through `/seminars/new` (`DEFAULT_ROOM`)
    pub default_room: String,
}

impl Config {
    /// Load `.env` if present, then read the environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            bind_addr: read("BIND_ADDR", DEFAULT_BIND_ADDR),
            default_room: read("DEFAULT_ROOM", DEFAULT_ROOM),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.default_room, "4070");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> =
            HashMap::from([("BIND_ADDR", "127.0.0.1:8080"), ("DEFAULT_ROOM", " B 12 ")]);
        let config = Config::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.default_room, "B 12");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = Config::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, Config::default());
    }
}
