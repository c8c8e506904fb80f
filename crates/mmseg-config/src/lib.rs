use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;

pub mod dictionary;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,

    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: DictionaryConfig::default(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Self::default().with_env()
    }

    /// Parse a JSON config; missing fields fall back to defaults
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Apply `MMSEG_DIC_DIR`, `MMSEG_LOG_LEVEL` and `MMSEG_LOG_JSON`
    pub fn with_env(mut self) -> Self {
        if let Ok(dir) = env::var("MMSEG_DIC_DIR") {
            self.dictionary.dir = Some(dir);
        }

        if let Ok(level) = env::var("MMSEG_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Ok(raw) = env::var("MMSEG_LOG_JSON") {
            match parse_flag(&raw) {
                Some(json) => self.log_json = json,
                None => tracing::warn!("Ignoring MMSEG_LOG_JSON={raw:?}, expected true/false or 1/0"),
            }
        }

        self
    }
}

/// `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`, any case
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
