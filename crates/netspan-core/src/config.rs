//! Netspan configuration
//!
//! Rendering options load from an optional TOML file passed via
//! `--config`; every field has a default so the file (and any field in
//! it) can be omitted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

/// Canvas and color options for raster output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Blank border around the drawing, in pixels
    pub margin: u32,
    /// Node disc radius, in pixels
    pub node_radius: u32,
    /// Colors as "#rrggbb"
    pub background: String,
    pub edge_color: String,
    pub node_color: String,
    pub route_edge_color: String,
    pub route_node_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 800,
            height: 800,
            margin: 40,
            node_radius: 6,
            background: "#ffffff".to_string(),
            edge_color: "#9aa0a6".to_string(),
            node_color: "#1a73e8".to_string(),
            route_edge_color: "#d93025".to_string(),
            route_node_color: "#188038".to_string(),
        }
    }
}

impl Config {
    /// Load from a TOML file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            None => Ok(Config::default()),
            Some(path) => {
                let data = fs::read_to_string(path)?;
                Ok(toml::from_str(&data)?)
            }
        }
    }
}
