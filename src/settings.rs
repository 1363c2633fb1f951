use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::constants::{DEFAULT_QUANTITY, OFFICIAL_BASES};
use crate::common::types::DistributionMode;
use crate::normalizer::{CampaignPolicy, ContentPolicy};

fn default_true() -> bool {
    true
}

fn default_bases() -> Vec<String> {
    OFFICIAL_BASES.iter().map(|b| b.to_string()).collect()
}

fn default_quantity() -> u32 {
    DEFAULT_QUANTITY
}

fn default_output_dir() -> String {
    ".".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base catalog: offered for selection and used to clean campaigns
    #[serde(default = "default_bases")]
    pub bases: Vec<String>,
    #[serde(default = "default_true")]
    pub generate_base_link: bool,
    #[serde(default = "default_true")]
    pub generate_buttons: bool,
    #[serde(default)]
    pub generate_images: bool,
    #[serde(default)]
    pub generate_hyperlinks: bool,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub distribution_mode: DistributionMode,
    #[serde(default)]
    pub campaign_policy: CampaignPolicy,
    #[serde(default)]
    pub content_policy: ContentPolicy,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub overwrite_existing_file: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bases: default_bases(),
            generate_base_link: true,
            generate_buttons: true,
            generate_images: false,
            generate_hyperlinks: false,
            quantity: default_quantity(),
            distribution_mode: DistributionMode::default(),
            campaign_policy: CampaignPolicy::default(),
            content_policy: ContentPolicy::default(),
            output_dir: default_output_dir(),
            overwrite_existing_file: false,
        }
    }
}

impl Settings {
    pub fn load(settings_file: &str) -> Result<Self> {
        let path = Path::new(settings_file);
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "settings file not found at '{}'. Exiting...",
                settings_file
            ));
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", settings_file))?;

        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", settings_file))?;

        info!("Settings loaded from '{}'.", settings_file);
        Ok(settings)
    }

    /// `<config dir>/link-growth/settings.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("link-growth").join("settings.json"))
    }

    /// Explicit path first, then the default location, then built-in defaults.
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path.to_string_lossy()),
            _ => {
                debug!("No settings file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }
}
