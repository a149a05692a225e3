use super::{
    organism::OrganismConfig,
    pssm::PssmConfig,
    recombination::RecombinationConfig,
    traits::ConfigSection,
};
use crate::error::MotifError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix of environment overrides, e.g. `MOTIFEVO__RECOMBINATION__SAMPLE_SIZE=20`
pub const ENV_PREFIX: &str = "MOTIFEVO";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub organism: OrganismConfig,
    pub pssm: PssmConfig,
    pub recombination: RecombinationConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), MotifError> {
        self.organism.validate()?;
        self.pssm.validate()?;
        self.recombination.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML or JSON file (by extension), then apply environment overrides
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MotifError> {
        let layered = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| MotifError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = layered
            .try_deserialize()
            .map_err(|e| MotifError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());

        *self.write()? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), MotifError> {
        let config = self.get()?;
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| MotifError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| MotifError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> Result<AppConfig, MotifError> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|_| MotifError::Configuration("configuration lock poisoned".to_string()))
    }

    pub fn update<F>(&self, f: F) -> Result<(), MotifError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.write()?;
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, AppConfig>, MotifError> {
        self.config
            .write()
            .map_err(|_| MotifError::Configuration("configuration lock poisoned".to_string()))
    }
}
