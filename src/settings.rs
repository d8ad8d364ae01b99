use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::constants::{DEFAULT_PORT, DEFAULT_STATION_COUNT, MAX_STATION_COUNT};

const CONFIG_FILE_NAME: &str = "station_map.ini";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub port: u16,
    pub station_count: usize,
    /// Fixed seed for reproducible station sets; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub auto_open_browser: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            station_count: DEFAULT_STATION_COUNT,
            seed: None,
            auto_open_browser: false,
        }
    }
}

impl Settings {
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        Self::parse(&content)
    }

    /// Parses `key = value` lines; `#` starts a comment line.
    pub fn parse(content: &str) -> Result<Self> {
        let mut settings = Settings::default();
        let mut config_map = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                config_map.insert(key.trim(), value.trim().trim_matches('"'));
            }
        }

        if let Some(port_str) = config_map.get("port") {
            match port_str.parse::<u16>() {
                Ok(port) => settings.port = port,
                Err(_) => warn!(value = %port_str, "Ignoring invalid port"),
            }
        }
        if let Some(count_str) = config_map.get("station_count") {
            let count = count_str
                .parse::<usize>()
                .with_context(|| format!("Invalid station_count: {}", count_str))?;
            if count > MAX_STATION_COUNT {
                bail!(
                    "station_count {} exceeds the maximum of {}",
                    count,
                    MAX_STATION_COUNT
                );
            }
            settings.station_count = count;
        }
        if let Some(seed_str) = config_map.get("seed") {
            if !seed_str.is_empty() {
                let seed = seed_str
                    .parse::<u64>()
                    .with_context(|| format!("Invalid seed: {}", seed_str))?;
                settings.seed = Some(seed);
            }
        }
        if let Some(auto_open_str) = config_map.get("auto_open_browser") {
            match auto_open_str.parse::<bool>() {
                Ok(auto_open) => settings.auto_open_browser = auto_open,
                Err(_) => warn!(value = %auto_open_str, "Ignoring invalid auto_open_browser"),
            }
        }

        Ok(settings)
    }

    pub fn to_ini_string(&self) -> String {
        let mut content = String::new();
        content.push_str("# StationMap Configuration File\n");
        content.push_str(&format!("port = {}\n", self.port));
        content.push_str(&format!("station_count = {}\n", self.station_count));
        if let Some(seed) = self.seed {
            content.push_str(&format!("seed = {}\n", seed));
        }
        content.push_str(&format!("auto_open_browser = {}\n", self.auto_open_browser));
        content
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Creating config directory")?;
        }
        std::fs::write(config_path, self.to_ini_string())
            .context("Failed to write to config file")?;
        Ok(())
    }

    /// Config file next to the executable, or the project root during `cargo run`.
    pub fn config_path() -> PathBuf {
        let mut path = std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        if path.ends_with("target/debug") || path.ends_with("target/release") {
            path.pop();
            path.pop();
        }
        path.push(CONFIG_FILE_NAME);
        path
    }
}
