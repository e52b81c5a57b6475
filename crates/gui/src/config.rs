//! GUI settings loaded from TOML

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Default settings file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "checkers.toml";

/// Which board binding renders the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardStyle {
    /// One canvas; pixel positions are mapped to cells.
    #[default]
    Canvas,
    /// One mouse area per cell.
    Widgets,
}

impl BoardStyle {
    pub const ALL: [BoardStyle; 2] = [BoardStyle::Canvas, BoardStyle::Widgets];
}

impl fmt::Display for BoardStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardStyle::Canvas => write!(f, "Canvas"),
            BoardStyle::Widgets => write!(f, "Widgets"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    pub title: String,
    pub square_size: f32,
    pub board_style: BoardStyle,
    /// Default `tracing` filter; `RUST_LOG` takes precedence.
    pub log_filter: String,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            title: "Checkers".to_string(),
            square_size: 50.0,
            board_style: BoardStyle::Canvas,
            log_filter: "info".to_string(),
        }
    }
}

impl GuiConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: GuiConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if !self.square_size.is_finite() || self.square_size <= 0.0 {
            return Err(ConfigError::Validation(
                "square_size must be a finite number > 0".into(),
            ));
        }
        Ok(())
    }
}
