use std::env;

use crate::errors::ConfigError;

pub const DEFAULT_PUBLIC_TABLE: &str = "PublicExhibitions";
pub const DEFAULT_PRIVATE_TABLE: &str = "PrivateExhibitions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub public_table: String,
    pub private_table: String,
    /// Keep the historical wire quirks: `"exhibitions": ""` for an empty
    /// match and the `userID` wording in the 400 message.
    pub legacy_wire_compat: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            public_table: DEFAULT_PUBLIC_TABLE.to_string(),
            private_table: DEFAULT_PRIVATE_TABLE.to_string(),
            legacy_wire_compat: false,
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if `LEGACY_WIRE_COMPAT` is set to something that is
    /// not a recognizable boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let legacy_wire_compat = match non_empty("LEGACY_WIRE_COMPAT") {
            Some(raw) => parse_bool("LEGACY_WIRE_COMPAT", &raw)?,
            None => false,
        };

        Ok(Self {
            public_table: non_empty("PUBLIC_EXHIBITIONS_TABLE")
                .unwrap_or_else(|| DEFAULT_PUBLIC_TABLE.to_string()),
            private_table: non_empty("PRIVATE_EXHIBITIONS_TABLE")
                .unwrap_or_else(|| DEFAULT_PRIVATE_TABLE.to_string()),
            legacy_wire_compat,
        })
    }
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_table_overrides_and_compat_flag() {
        let config = config_from(&[
            ("PUBLIC_EXHIBITIONS_TABLE", "pub-staging"),
            ("PRIVATE_EXHIBITIONS_TABLE", "priv-staging"),
            ("LEGACY_WIRE_COMPAT", "Yes"),
        ])
        .unwrap();
        assert_eq!(config.public_table, "pub-staging");
        assert_eq!(config.private_table, "priv-staging");
        assert!(config.legacy_wire_compat);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("PUBLIC_EXHIBITIONS_TABLE", "  ")]).unwrap();
        assert_eq!(config.public_table, DEFAULT_PUBLIC_TABLE);
    }

    #[test]
    fn rejects_garbage_compat_flag() {
        let err = config_from(&[("LEGACY_WIRE_COMPAT", "sometimes")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "LEGACY_WIRE_COMPAT: invalid boolean value \"sometimes\""
        );
    }
}
