use crate::domain::models::ConfigFile;
use std::path::{Path, PathBuf};

pub fn config_file_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/netsmoke/config.toml"))
}

/// Loads the probe config. A missing default file means built-in defaults;
/// a missing explicitly-passed file is an error.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let path = config_file_path(explicit)?;
    if !path.exists() {
        if explicit.is_some() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        return Ok(ConfigFile::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
