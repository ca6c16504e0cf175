// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;

// environment variable naming the demo to open
pub const PROJECT_ENV: &str = "GEODEMOS_PROJECT";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub app: AppConfig,
    pub chaos_game: ChaosGameConfig,
    pub graphing: GraphingConfig,
    pub monge: MongeConfig,
    pub napoleon: NapoleonConfig,
    pub ptolemy: PtolemyConfig,
    pub trigonometry: TrigonometryConfig,
    pub viviani: VivianiConfig,
}

impl Config {
    /// Load config.toml from beside the executable, then from the working
    /// directory. Returns the config and the path it was read from.
    pub fn load() -> Result<(Self, PathBuf), Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    /// Like `load`, but a missing or unreadable file yields the defaults.
    pub fn load_or_default() -> (Self, Option<PathBuf>) {
        match Self::load() {
            Ok((config, path)) => (config, Some(path)),
            Err(e) => {
                println!("No usable config.toml ({}), using defaults", e);
                (Self::default(), None)
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(toml::from_str(content)?)
    }

    fn load_from_exe_dir() -> Option<(Self, PathBuf)> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            match toml::from_str(&content) {
                Ok(config) => Some((config, config_path)),
                Err(e) => {
                    eprintln!("Ignoring {}: {}", config_path.display(), e);
                    None
                }
            }
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<(Self, PathBuf), Box<dyn std::error::Error>> {
        let path = Path::new("config.toml");
        let content = fs::read_to_string(path)?;
        Ok((toml::from_str(&content)?, path.to_path_buf()))
    }

    /// Demo name by priority: command line, environment, config file.
    pub fn resolve_demo_name(
        &self,
        arg: Option<String>,
        env: Option<String>,
    ) -> Option<String> {
        arg.or(env)
            .or_else(|| self.app.demo.clone())
            .filter(|name| !name.trim().is_empty())
    }
}
