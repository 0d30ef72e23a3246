//! Config loading with an embedded fallback
//!
//! - If no config path is configured: use the embedded `config.yaml`
//! - If a path is configured and exists: read it from the filesystem
//! - If a path is configured but missing: fall back to the embedded copy

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "config.yaml"]
struct EmbeddedConfig;

const CONFIG_NAME: &str = "config.yaml";

/// Where the active config comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
    /// A path was configured but does not exist.
    Missing(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Embedded => f.write_str("embedded"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Missing(path) => {
                write!(f, "embedded ({} not found)", path.display())
            }
        }
    }
}

/// Asset loader with optional filesystem override for the config file
pub struct AssetLoader {
    /// External config file path (from --config or CONFIG_FILE)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `config_file` should be `Some` only if a path was explicitly given.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Loader honouring an explicit path, then the `CONFIG_FILE` env var.
    pub fn from_env(explicit: Option<PathBuf>) -> Self {
        let config_file = explicit.or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
        Self::new(config_file)
    }

    pub fn config_source(&self) -> ConfigSource {
        match self.config_file {
            Some(ref path) if path.exists() => ConfigSource::File(path.clone()),
            Some(ref path) => ConfigSource::Missing(path.clone()),
            None => ConfigSource::Embedded,
        }
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
            tracing::warn!(path = %path.display(), "Config file not found, using embedded config");
        }

        Self::embedded_config().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
        })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the embedded config to `path` for customization.
    ///
    /// Returns `false` without touching the file if it exists and `force`
    /// is not set.
    pub fn extract_config(path: &Path, force: bool) -> io::Result<bool> {
        if !force && path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = Self::embedded_config().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
        })?;
        fs::write(path, &*data)?;
        tracing::info!(path = %path.display(), "Wrote default config");
        Ok(true)
    }

    fn embedded_config() -> Option<Cow<'static, [u8]>> {
        EmbeddedConfig::get(CONFIG_NAME).map(|f| {
            tracing::trace!("Loading config from embedded assets");
            f.data
        })
    }
}
