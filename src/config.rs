use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_input_name() -> String {
    "input.txt".to_string()
}
fn default_output_name() -> String {
    "output_point.txt".to_string()
}

/// Settings read from `polyclip.toml`; command-line flags take precedence.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// polygon file looked up in every batch case directory
    #[serde(default = "default_input_name")]
    pub input_name: String,
    /// triangle file written next to it
    #[serde(default = "default_output_name")]
    pub output_name: String,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            input_name: default_input_name(),
            output_name: default_output_name(),
            log_level: None,
        }
    }
}

impl FileConfig {
    /// Loads an explicitly requested config file, which must exist.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context(format!("Failed to parse config file: {:?}", path))
    }

    /// Looks for a config file in the working directory.
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists() {
                match Self::from_path(&path) {
                    Ok(config) => return Some(config),
                    // the logger is not set up yet
                    Err(e) => eprintln!("Warning: {:#}", e),
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    vec![PathBuf::from("polyclip.toml"), PathBuf::from(".polyclip.toml")]
}
