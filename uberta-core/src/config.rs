use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::errors::SetupError;
use crate::models::{OptSetup, RunSetup, StopSetup};

///
/// Training hyperparameters as stored in a TOML file:
///
/// ```toml
/// [run]
/// batch_size = 32
/// epochs = 10
/// warmup_perc = 0.1
///
/// [optimizer]
/// learning_rate = 2e-5
/// epsilon = 1e-8
/// betas = [0.9, 0.999]
/// weight_decay = 0.01
///
/// [stopping]
/// rounds = 3
/// tolerance = 0.001
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    pub run: RunSetup,
    pub optimizer: OptSetup,
    pub stopping: StopSetup,
}

#[derive(Debug)]
pub enum ConfigFileType {
    Toml,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing or invalid file extension in training config file. It must be `toml`")]
    InvalidFileType,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Setup(#[from] SetupError),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl ConfigFileType {
    ///
    /// Determine the type of a training config file based on its extension.
    /// # Arguments
    /// * `path` - path to the config file
    /// # Returns
    /// * `ConfigFileType`, or `ConfigError::InvalidFileType`
    ///
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(OsStr::to_str) {
            Some("toml") => Ok(ConfigFileType::Toml),
            _ => Err(ConfigError::InvalidFileType),
        }
    }
}

impl TrainingConfig {
    /// Check every section, reporting the first invalid field.
    pub fn validate(&self) -> ConfigResult<()> {
        self.run.validate()?;
        self.optimizer.validate()?;
        self.stopping.validate()?;
        Ok(())
    }
}

impl FromStr for TrainingConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: TrainingConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

impl TryFrom<&Path> for TrainingConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        ConfigFileType::from_path(path)?;
        debug!("Loading training config from {}", path.display());

        let toml_str = read_to_string(path)?;
        let config = toml_str.parse::<TrainingConfig>()?;

        debug!(
            batch_size = config.run.batch_size,
            epochs = config.run.epochs,
            learning_rate = config.optimizer.learning_rate,
            "Training config loaded"
        );
        Ok(config)
    }
}
