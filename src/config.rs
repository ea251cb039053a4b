use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::HISTORICAL_MATCH_THRESHOLD;
use crate::error::{MatcherError, Result};
use crate::matching::HistoricalMatcher;

pub const DEFAULT_CONFIG_PATH: &str = "matcher.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub matching: MatchingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchingConfig {
    /// A historical match needs a similarity score strictly above this
    pub similarity_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: HISTORICAL_MATCH_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: String,
    pub file_prefix: String,
    /// Used when RUST_LOG is not set
    pub default_filter: String,
    pub file_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: "logs".to_string(),
            file_prefix: "matcher.log".to_string(),
            default_filter: "fwt_event_matcher=info".to_string(),
            file_output: true,
        }
    }
}

impl Config {
    /// Load an explicitly named config file, or `matcher.toml` if it exists.
    /// Without either, defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            MatcherError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.matching.similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(MatcherError::Config(format!(
                "similarity_threshold must be within [0, 1], got {threshold}"
            )));
        }
        Ok(())
    }

    pub fn matcher(&self) -> HistoricalMatcher {
        HistoricalMatcher::with_threshold(self.matching.similarity_threshold)
    }
}
