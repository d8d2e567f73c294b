// config.rs - Startup configuration, loaded from YAML
// Every field has a default so partial files are accepted.

use crate::error::ConfigError;
use crate::patterns;
use crate::state::{CellColor, SizePreset, TickRate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub simulation: SimulationConfig,
}

/// Drawing surface the grid is painted onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { width: 800, height: 600 }
    }
}

/// Startup simulation settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub tick_rate: TickRate,
    pub cell_color: CellColor,
    pub grid_size: SizePreset,
    /// Pattern placed in the centre of the startup grid
    pub initial_pattern: Option<String>,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let DisplayConfig { width, height } = self.display;
        if width == 0 || height == 0 {
            return Err(ConfigError::Invalid("display width and height must be positive".to_string()));
        }
        // Every preset is reachable from the size menu, so each must fit
        for preset in SizePreset::ALL {
            let (rows, cols) = preset.dimensions();
            if (width as usize) < cols || (height as usize) < rows {
                return Err(ConfigError::Invalid(format!(
                    "display {}x{} is too small for the {} grid ({}x{})",
                    width, height, preset.name(), rows, cols
                )));
            }
        }
        if let Some(name) = &self.simulation.initial_pattern {
            if patterns::find(name).is_none() {
                return Err(ConfigError::Invalid(format!("unknown pattern '{}'", name)));
            }
        }
        Ok(())
    }
}
