use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use agenda_core::search::DEFAULT_MAX_QUERY_CHARS;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub data_path: PathBuf,
    pub max_query_chars: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = value_or_default(&lookup, "AGENDA_API_BIND_ADDR", "127.0.0.1:5026");
        let data_path = PathBuf::from(value_or_default(
            &lookup,
            "AGENDA_DATA_PATH",
            "db/data.json",
        ));

        let default_max = DEFAULT_MAX_QUERY_CHARS.to_string();
        let max_query_chars = value_or_default(&lookup, "AGENDA_MAX_QUERY_CHARS", &default_max)
            .parse::<usize>()
            .map_err(|_| {
                ConfigError::Invalid(
                    "AGENDA_MAX_QUERY_CHARS must be an integer in [1, 4096]".to_string(),
                )
            })?;
        if !(1..=4_096).contains(&max_query_chars) {
            return Err(ConfigError::Invalid(
                "AGENDA_MAX_QUERY_CHARS must be in [1, 4096]".to_string(),
            ));
        }

        Ok(Self {
            bind_addr,
            data_path,
            max_query_chars,
        })
    }
}

fn value_or_default(lookup: impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
