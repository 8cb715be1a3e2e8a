// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::model::EdgeCatalog;

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
  /// Replaces the bundled edges.json when set
  pub edge_data_path: Option<PathBuf>,

  /// Decimal places for energies in edge labels
  pub energy_decimals: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      edge_data_path: None,
      energy_decimals: EdgeCatalog::DEFAULT_ENERGY_DECIMALS,
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/eels-edges/settings.json)
  pub fn load() -> Self {
    Self::load_from(&Self::get_path())
  }

  /// Missing or broken files fall back to defaults.
  pub fn load_from(path: &Path) -> Self {
    if !path.exists() {
      log::debug!("No config found at {:?}. Using defaults.", path);
      return Self::default();
    }

    match File::open(path) {
      Ok(file) => {
        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
          Ok(cfg) => {
            log::info!("Config loaded from {:?}", path);
            cfg
          }
          Err(e) => {
            log::warn!("Error parsing config {:?}: {}", path, e);
            Self::default()
          }
        }
      }
      Err(e) => {
        log::warn!("Error opening config {:?}: {}", path, e);
        Self::default()
      }
    }
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    self.save_to(&Self::get_path())
  }

  pub fn save_to(&self, path: &Path) -> String {
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(path) {
      Ok(file) => {
        let writer = BufWriter::new(file);
        match serde_json::to_writer_pretty(writer, self) {
          Ok(_) => format!("Config saved to {:?}", path),
          Err(e) => format!("Failed to save config: {}", e),
        }
      }
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  pub fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("com", "nion", "eels-edges") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir()
      .join(format!("eels-edges-config-{}-{}", std::process::id(), name))
      .join("settings.json")
  }

  #[test]
  fn test_missing_file_gives_defaults() {
    let cfg = Config::load_from(&temp_path("missing"));
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.energy_decimals, 1);
  }

  #[test]
  fn test_save_and_load() {
    let path = temp_path("roundtrip");
    let cfg = Config {
      edge_data_path: Some(PathBuf::from("/opt/data/edges.json")),
      energy_decimals: 2,
    };
    let msg = cfg.save_to(&path);
    assert!(msg.starts_with("Config saved"), "{}", msg);
    assert_eq!(Config::load_from(&path), cfg);
    let _ = fs::remove_dir_all(path.parent().unwrap());
  }

  #[test]
  fn test_partial_and_broken_files() {
    let path = temp_path("partial");
    fs::create_dir_all(path.parent().unwrap()).unwrap();

    fs::write(&path, r#"{ "energy_decimals": 3 }"#).unwrap();
    let cfg = Config::load_from(&path);
    assert_eq!(cfg.energy_decimals, 3);
    assert_eq!(cfg.edge_data_path, None);

    fs::write(&path, "not json").unwrap();
    assert_eq!(Config::load_from(&path), Config::default());

    let _ = fs::remove_dir_all(path.parent().unwrap());
  }
}
