use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, SegmentBarError};

use super::Config;
use super::validation::validate_config;

/// Result of loading a configuration, with the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Path of the file that was read, `None` when defaults were used.
    pub source: Option<PathBuf>,
}

impl LoadResult {
    fn defaults() -> Self {
        Self {
            config: Config::default(),
            source: None,
        }
    }
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read, parsed or validated.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = ".segment-bar.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Platform-specific configuration directory for segment-bar.
    ///
    /// - Windows: `%APPDATA%\segment-bar`
    /// - macOS: `~/Library/Application Support/segment-bar`
    /// - Linux: `~/.config/segment-bar` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "segment-bar")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.segment-bar.toml` in the current directory
/// 2. `config.toml` in the platform user config directory
/// 3. `Config::default()` if neither exists
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn read_config(&self, path: &Path) -> Result<LoadResult> {
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| SegmentBarError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        let config = parse_config(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

/// Parse and validate config text.
///
/// # Errors
/// Returns an error if the TOML is malformed or the config fails validation.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        let candidates = [self.local_config_path(), self.user_config_path()];
        for path in candidates.into_iter().flatten() {
            if self.fs.exists(&path) {
                return self.read_config(&path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(LoadResult::defaults())
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        self.read_config(path)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
