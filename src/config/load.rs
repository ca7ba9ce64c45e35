//! The main config loading module for gls.
//!
//! Handles loading and deserializing settings from `gls.toml`.
//!
//! Provides the main [Config] struct, as well as the [RawConfig] used for parsing.
//! Also writes the default config file for `gls --init`.

use crate::config::{Display, InternalLayout, Layout, Owner};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

/// Raw configuration as read from the toml file.
/// Converted into the main [Config] struct after parsing.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    layout: Layout,
    display: Display,
    owner: Owner,
}

/// Main configuration struct for gls
#[derive(Debug, Default)]
pub struct Config {
    layout: InternalLayout,
    display: Display,
    owner: Owner,
}

/// Conversion from RawConfig to Config
/// Clamps out-of-range layout values.
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            layout: InternalLayout::from(raw.layout),
            display: raw.display,
            owner: raw.owner,
        }
    }
}

const DEFAULT_TOML: &str = r##"# gls.toml - default configuration for gls

# Grid layout used for directory listings
[layout]
columns = 5
max_name_width = 20
gutter = 4

[display]
icons = true
colors = true
# Show the host's permission bits in long listings instead of
# the fixed per-type strings (drwxr-xr-x, -rw-r--r--, ...)
permission_bits = false

# Fixed owner/group shown in long listings.
# Defaults to the current login name when unset.
# [owner]
# user = "user"
# group = "group"
"##;

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                eprintln!("[gls] Error parsing config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("cannot read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parses a gls.toml document.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawConfig>(content).map(Config::from)
    }

    // Getters

    #[inline]
    pub fn layout(&self) -> &InternalLayout {
        &self.layout
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Determine the default configuration file path.
    /// Checks the GLS_CONFIG environment variable first,
    /// then XDG_CONFIG_HOME,
    /// then defaults to ~/.config/gls/gls.toml.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("GLS_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("gls/gls.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/gls/gls.toml");
        }

        PathBuf::from("gls.toml")
    }

    /// Generate the default configuration file at `path`.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        println!("Default config generated at {:?}", path);
        Ok(())
    }
}
