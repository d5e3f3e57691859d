use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Shell settings read from the `[shell]` table of `config.toml`.
///
/// Every field has a default so that a missing or incomplete file still
/// yields a working shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellConfig {
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
    /// Viewports narrower than this many CSS pixels use the drawer layout.
    #[serde(default = "default_narrow_breakpoint_px")]
    pub narrow_breakpoint_px: u32,
    #[serde(default = "default_drawer_width_px")]
    pub drawer_width_px: u32,
    /// Prefix for the auth backend's endpoints, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_brand_name() -> String {
    "CreditSea".to_string()
}

fn default_narrow_breakpoint_px() -> u32 {
    600
}

fn default_drawer_width_px() -> u32 {
    250
}

fn default_api_base_url() -> String {
    "/api".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand_name: default_brand_name(),
            narrow_breakpoint_px: default_narrow_breakpoint_px(),
            drawer_width_px: default_drawer_width_px(),
            api_base_url: default_api_base_url(),
        }
    }
}

impl ShellConfig {
    /// CSS media query matching narrow viewports. The upper bound sits just
    /// below the breakpoint so the breakpoint width itself is wide.
    pub fn narrow_media_query(&self) -> String {
        format!("(max-width: {}px)", self.narrow_breakpoint_px as f64 - 0.05)
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub shell: ShellConfig,
}

impl AppConfig {
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(source)?)
    }
}
