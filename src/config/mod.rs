use crate::models::RecolorConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "recolor.yaml";

/// Configuration manager for loading and saving the YAML run configuration.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a ConfigManager for the given configuration file.
    ///
    /// The file does not have to exist; see [`ConfigManager::load_config`].
    pub fn new<P: AsRef<Utf8Path>>(config_path: P) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
        }
    }

    /// Load the run configuration.
    ///
    /// # Returns
    /// The parsed RecolorConfig, or the built-in defaults if the file doesn't exist
    pub fn load_config(&self) -> Result<RecolorConfig> {
        if !self.config_path.exists() {
            tracing::warn!(
                "Config file not found at {}, using built-in defaults",
                self.config_path
            );
            return Ok(RecolorConfig::default());
        }

        let file_contents = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config: {}", self.config_path))?;

        let config: RecolorConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse config: {}", self.config_path))?;

        tracing::info!("Loaded config from {}", self.config_path);
        Ok(config)
    }

    /// Save the run configuration, creating parent directories as needed.
    pub fn save_config(&self, config: &RecolorConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {}", parent))?;
            }
        }

        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize config to YAML")?;

        fs::write(&self.config_path, yaml_string)
            .with_context(|| format!("Failed to write config: {}", self.config_path))?;

        tracing::info!("Saved config to {}", self.config_path);
        Ok(())
    }

    /// Get the configuration file path.
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let manager = ConfigManager::new(config_dir.join(DEFAULT_CONFIG_FILE));
        (manager, temp_dir)
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let (manager, _temp_dir) = create_test_config_manager();

        let config = manager.load_config().unwrap();
        assert_eq!(config, RecolorConfig::default());
    }

    #[test]
    fn test_load_save_config() {
        let (manager, _temp_dir) = create_test_config_manager();

        let config = RecolorConfig::default().with_target_dir("src/charts");
        manager.save_config(&config).unwrap();

        let loaded = manager.load_config().unwrap();
        assert_eq!(loaded.settings.target_dir, "src/charts");
        assert_eq!(loaded.rules(), config.rules());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let (manager, _temp_dir) = create_test_config_manager();
        fs::write(manager.config_path(), "Recolor_Settings: [unterminated").unwrap();

        let err = manager.load_config().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
