use crate::model::{Extent, SpatialRef};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub theme: ThemeConfig,
    pub map: MapConfig,
    pub ui: UiConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Initial map view configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MapConfig {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
    /// Well-known id of the spatial reference
    pub wkid: i32,
}

/// UI behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UiConfig {
    /// Show the extent history panel on startup
    pub show_history_panel: bool,
    /// Duration of animated goTo jumps (in milliseconds)
    pub animation_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig {
                mode: "dark".to_string(),
            },
            // Whole-world extent in Web Mercator.
            map: MapConfig {
                xmin: -20_037_508.34,
                ymin: -20_037_508.34,
                xmax: 20_037_508.34,
                ymax: 20_037_508.34,
                wkid: SpatialRef::WEB_MERCATOR.0,
            },
            ui: UiConfig {
                show_history_panel: true,
                animation_ms: 350,
            },
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "chizu") {
            let config_dir = proj_dirs.config_dir();
            return Some(config_dir.join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("Failed to parse config file: {}", e);
                            eprintln!("Using default configuration");
                        }
                    },
                    Err(e) => {
                        eprintln!("Failed to read config file: {}", e);
                        eprintln!("Using default configuration");
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let contents = toml::to_string_pretty(self)?;
            fs::write(&path, contents)?;
            return Ok(());
        }

        Err("Could not determine config directory".into())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                let config = Config::default();
                config.save()?;
            }
        }
        Ok(())
    }

    /// The configured startup extent.
    pub fn initial_extent(&self) -> Extent {
        Extent::new(
            self.map.xmin,
            self.map.ymin,
            self.map.xmax,
            self.map.ymax,
            SpatialRef(self.map.wkid),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.map.wkid, 3857);
        assert!(config.ui.show_history_panel);
        assert_eq!(config.ui.animation_ms, 350);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(config.map.xmin, deserialized.map.xmin);
        assert_eq!(config.map.wkid, deserialized.map.wkid);
    }

    #[test]
    fn test_initial_extent_matches_map_section() {
        let config = Config::default();
        let extent = config.initial_extent();
        assert_eq!(extent.xmin, config.map.xmin);
        assert_eq!(extent.ymax, config.map.ymax);
        assert_eq!(extent.spatial_ref, SpatialRef::WEB_MERCATOR);
    }
}
