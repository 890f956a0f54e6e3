use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants;
use crate::error::{AppError, Result};
use crate::validation::OntologyPolicy;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub ontology_policy: OntologyPolicy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: String,
    pub file_name: String,
    /// Filter directive used when `RUST_LOG` is unset
    pub default_directive: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: constants::DEFAULT_LOG_DIR.to_string(),
            file_name: constants::DEFAULT_LOG_FILE.to_string(),
            default_directive: constants::DEFAULT_LOG_DIRECTIVE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: constants::DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

impl Config {
    /// Loads `config.toml` (or the file named by `EVIDENCE_VALIDATOR_CONFIG`),
    /// then applies environment overrides. A missing file means defaults.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var(constants::CONFIG_PATH_ENV)
            .unwrap_or_else(|_| constants::DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::load_from(Path::new(&config_path))?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let config_content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(policy) = std::env::var(constants::ONTOLOGY_POLICY_ENV) {
            self.validation.ontology_policy = policy.parse().map_err(AppError::Config)?;
        }
        Ok(())
    }
}
