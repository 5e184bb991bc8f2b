use serde::Deserialize;
use std::path::PathBuf;

/// Optional tunables shared by the tools. The CLI contract does not depend on
/// any of these; a missing or malformed file silently falls back to defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Milliseconds to wait after a focus change before injecting input.
    /// Focus propagation is asynchronous on Windows; this is a heuristic
    /// settle delay, not a guarantee.
    pub settle_ms: u64,
    /// Shell launched by winctl-new-console.
    pub shell: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_ms: 100,
            shell: "cmd.exe".to_string(),
        }
    }
}

pub fn load() -> Config {
    let path = match config_path() {
        Some(p) => p,
        None => return Config::default(),
    };
    if !path.exists() {
        return Config::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

fn config_path() -> Option<PathBuf> {
    Some(
        dirs::home_dir()?
            .join(".config")
            .join("winctl")
            .join("config.toml"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.settle_ms, 100);
        assert_eq!(config.shell, "cmd.exe");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config: Config = toml::from_str("settle_ms = 250").unwrap();
        assert_eq!(config.settle_ms, 250);
        assert_eq!(config.shell, "cmd.exe");
    }
}
