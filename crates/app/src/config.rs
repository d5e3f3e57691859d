use shared_types::{AppConfig, ShellConfig};

const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse the embedded `config.toml`, falling back to defaults when it is
/// malformed.
pub fn load() -> ShellConfig {
    match AppConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config.shell,
        Err(err) => {
            tracing::warn!(error = %err, "invalid config.toml, using default shell settings");
            ShellConfig::default()
        }
    }
}
