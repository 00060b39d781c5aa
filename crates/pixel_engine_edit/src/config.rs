use pixel_engine::{Color, EngineError, Result, Size};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CANVAS_SIZE: Size = Size::new(32, 32);

/// Settings handed to the engine by the application that composes it.
///
/// Nothing here is read from the process environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Indent JSON written by [`crate::Artwork::to_json`].
    pub pretty_print: bool,
    /// Log every recorded, undone and redone operation at info level instead of debug.
    pub verbose: bool,
    /// Size of newly created artworks.
    pub default_size: Size,
    /// Color of palette id 0 in newly created artworks.
    pub default_color: Color,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pretty_print: false,
            verbose: false,
            default_size: DEFAULT_CANVAS_SIZE,
            default_color: Color::WHITE,
        }
    }
}

impl EngineConfig {
    /// # Errors
    ///
    /// Fails on malformed TOML or a negative canvas size.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(text).map_err(EngineError::invalid_config)?;
        if config.default_size.width < 0 || config.default_size.height < 0 {
            return Err(EngineError::invalid_config(format!("negative default size {}", config.default_size)));
        }
        Ok(config)
    }

    /// # Errors
    ///
    /// Fails if the config can't be represented as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(EngineError::invalid_config)
    }

    pub(crate) fn operation_log_level(&self) -> log::Level {
        if self.verbose { log::Level::Info } else { log::Level::Debug }
    }
}
