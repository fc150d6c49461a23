use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_URL: &str = "https://6706923ca0e04071d2276bd7.mockapi.io/api/v1/currencyData";
pub const DATA_URL_VAR: &str = "RUB_RATES_DATA_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_url: String,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            output_dir: PathBuf::from("output"),
        }
    }
}

fn get_config_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("config.toml");
    path
}

/// Reads `config.toml` from `path`, or from the crate directory when no path is given.
/// A missing file is not an error and yields the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    let config: Config = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;
    Ok(config)
}

pub fn save_config(config: &Config, path: &Path) -> anyhow::Result<()> {
    let config_str = toml::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

impl Config {
    /// Applies the environment override for the data URL, then the explicit one.
    pub fn with_overrides(mut self, url: Option<String>) -> Self {
        if let Ok(env_url) = env::var(DATA_URL_VAR) {
            if !env_url.is_empty() {
                self.data_url = env_url;
            }
        }
        if let Some(url) = url {
            self.data_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    /// Runs `f` with `DATA_URL_VAR` set to `value`, restoring the previous value afterwards.
    fn with_data_url_var<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let previous = env::var(DATA_URL_VAR).ok();
        match value {
            Some(value) => env::set_var(DATA_URL_VAR, value),
            None => env::remove_var(DATA_URL_VAR),
        }

        let result = f();

        match previous {
            Some(previous) => env::set_var(DATA_URL_VAR, previous),
            None => env::remove_var(DATA_URL_VAR),
        }
        result
    }

    #[test]
    fn test_missing_file_gives_defaults() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let config = load_config(Some(&dir.path().join("config.toml")))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_file() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_url = \"http://localhost:8080/rates\"\n")?;

        let config = load_config(Some(&path))?;
        assert_eq!(config.data_url, "http://localhost:8080/rates");
        assert_eq!(config.output_dir, PathBuf::from("output"));
        Ok(())
    }

    #[test]
    fn test_save_and_load() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        let config = Config {
            data_url: "http://example.test/data".to_string(),
            output_dir: dir.path().join("charts"),
        };

        save_config(&config, &path)?;
        assert_eq!(load_config(Some(&path))?, config);
        Ok(())
    }

    #[test]
    fn test_invalid_file() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_url = [")?;
        assert!(load_config(Some(&path)).is_err());
        Ok(())
    }

    #[test]
    #[serial]
    fn test_no_overrides() {
        let config = with_data_url_var(None, || Config::default().with_overrides(None));
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
    }

    #[test]
    #[serial]
    fn test_env_url_applied() {
        let config = with_data_url_var(Some("http://env.test/rates"), || {
            Config::default().with_overrides(None)
        });
        assert_eq!(config.data_url, "http://env.test/rates");
    }

    #[test]
    #[serial]
    fn test_empty_env_url_ignored() {
        let config = with_data_url_var(Some(""), || Config::default().with_overrides(None));
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
    }

    #[test]
    #[serial]
    fn test_explicit_url_wins() {
        let config = with_data_url_var(Some("http://env.test/rates"), || {
            Config::default().with_overrides(Some("http://cli.test".to_string()))
        });
        assert_eq!(config.data_url, "http://cli.test");
    }
}
