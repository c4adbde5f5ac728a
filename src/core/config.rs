//! Window layout and font configuration for the chat view.
//!
//! Geometry feeds the renderer only; classification never looks at it. The
//! file lives in the platform config directory and is written atomically
//! through a temp file in the same directory.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Placement of one window, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl WindowRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Layout and type settings for the chat view.
///
/// The defaults place a 400x200 transcript pane at the origin and a 300x24
/// input box beneath it, with a 16px font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_chat_window")]
    pub chat_window: WindowRect,
    #[serde(default = "default_input_box")]
    pub input_box: WindowRect,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
}

fn default_chat_window() -> WindowRect {
    WindowRect::new(0, 0, 400, 200)
}

fn default_input_box() -> WindowRect {
    WindowRect::new(50, 220, 300, 24)
}

fn default_font_size() -> u32 {
    16
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            chat_window: default_chat_window(),
            input_box: default_input_box(),
            font_size: default_font_size(),
        }
    }
}

/// Errors that can occur when loading configuration from disk.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Failed to read config at {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(
                    f,
                    "Failed to parse config at {}: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

impl ChatConfig {
    pub fn load() -> Result<ChatConfig, Box<dyn StdError>> {
        Self::load_from_path(&Self::config_path())
    }

    /// Loads from `config_path`, falling back to the defaults when the
    /// file does not exist.
    pub fn load_from_path(config_path: &Path) -> Result<ChatConfig, Box<dyn StdError>> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                path: config_path.to_path_buf(),
                source,
            })?;
            let config: ChatConfig =
                toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                    path: config_path.to_path_buf(),
                    source,
                })?;
            Ok(config)
        } else {
            Ok(ChatConfig::default())
        }
    }

    pub fn save(&self) -> Result<(), Box<dyn StdError>> {
        self.save_to_path(&Self::config_path())
    }

    pub fn save_to_path(&self, config_path: &Path) -> Result<(), Box<dyn StdError>> {
        let parent = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty());

        if let Some(dir) = parent {
            fs::create_dir_all(dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        let mut temp_file = match parent {
            Some(dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new()?,
        };

        temp_file.write_all(contents.as_bytes())?;
        temp_file.as_file_mut().sync_all()?;
        temp_file
            .persist(config_path)
            .map_err(|err| -> Box<dyn StdError> { Box::new(err) })?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let proj_dirs = ProjectDirs::from("org", "causerie", "causerie")
            .expect("Failed to determine config directory");
        proj_dirs.config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_describe_the_stock_layout() {
        let config = ChatConfig::default();
        assert_eq!(config.chat_window, WindowRect::new(0, 0, 400, 200));
        assert_eq!(config.input_box, WindowRect::new(50, 220, 300, 24));
        assert_eq!(config.font_size, 16);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = ChatConfig::load_from_path(&path).unwrap();
        assert_eq!(config, ChatConfig::default());
    }

    #[test]
    fn save_then_load_round_trips_geometry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = ChatConfig {
            chat_window: WindowRect::new(10, 20, 640, 320),
            input_box: WindowRect::new(0, 340, 640, 32),
            font_size: 20,
        };
        config.save_to_path(&path).unwrap();
        let loaded = ChatConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn malformed_toml_reports_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "font_size = \"big\"").unwrap();
        let err = ChatConfig::load_from_path(&path).unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().expect("ConfigError");
        assert!(matches!(config_err, ConfigError::Parse { .. }));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "font_size = 24").unwrap();
        let config = ChatConfig::load_from_path(&path).unwrap();
        assert_eq!(config.font_size, 24);
        assert_eq!(config.chat_window, WindowRect::new(0, 0, 400, 200));
        assert_eq!(config.input_box, WindowRect::new(50, 220, 300, 24));
    }
}
