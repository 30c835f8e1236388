use crate::core::models::ProjectPaths;
use crate::utils::{KumuError, Logger, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file format (kumu.config.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KumuConfig {
    /// Template directory, relative to the project root (default: "src/ejs")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<String>,

    /// Template file extension (default: "ejs")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_ext: Option<String>,

    /// Script entry point (default: "./src/js/main")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,

    /// Static image directory (default: "src/images")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_dir: Option<String>,

    /// Output directory (default: "public")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir: Option<String>,

    /// Dev server port (default: 8080)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl Default for KumuConfig {
    fn default() -> Self {
        Self {
            template_dir: Some("src/ejs".to_string()),
            template_ext: Some("ejs".to_string()),
            entry: Some("./src/js/main".to_string()),
            image_dir: Some("src/images".to_string()),
            outdir: Some("public".to_string()),
            port: Some(8080),
        }
    }
}

/// Config loader that supports config files with CLI override
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from file if it exists
    /// Searches for kumu.config.json in the project root
    pub fn load_from_file(root: &Path) -> Result<Option<KumuConfig>> {
        let config_path = root.join("kumu.config.json");

        if !config_path.exists() {
            Logger::debug("No kumu.config.json found, using defaults");
            return Ok(None);
        }

        Logger::debug(&format!("Loading config from {}", config_path.display()));

        let content = std::fs::read_to_string(&config_path).map_err(KumuError::Io)?;

        let config: KumuConfig = serde_json::from_str(&content)
            .map_err(|e| KumuError::config(format!("Failed to parse kumu.config.json: {}", e)))?;

        Logger::debug("✅ Config file loaded successfully");
        Ok(Some(config))
    }

    /// Merge file config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(
        file_config: Option<KumuConfig>,
        root: PathBuf,
        port: Option<u16>,
    ) -> ProjectPaths {
        let base = file_config.unwrap_or_default();
        let defaults = ProjectPaths::default();

        ProjectPaths {
            root,
            template_dir: base
                .template_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.template_dir),
            template_ext: base.template_ext.unwrap_or(defaults.template_ext),
            entry: base.entry.unwrap_or(defaults.entry),
            image_dir: base
                .image_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.image_dir),
            outdir: base.outdir.map(PathBuf::from).unwrap_or(defaults.outdir),
            port: port.or(base.port).unwrap_or(defaults.port),
        }
    }

    /// Generate example config file
    pub fn generate_example() -> String {
        let example = KumuConfig::default();
        serde_json::to_string_pretty(&example).unwrap_or_else(|_| {
            r#"{
  "templateDir": "src/ejs",
  "templateExt": "ejs",
  "entry": "./src/js/main",
  "imageDir": "src/images",
  "outdir": "public",
  "port": 8080
}"#
            .to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_file_not_exists() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = ConfigLoader::load_from_file(temp_dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_from_file_valid() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("kumu.config.json");
        std::fs::write(&config_path, r#"{"outdir": "build", "port": 9000}"#).unwrap();

        let result = ConfigLoader::load_from_file(temp_dir.path()).unwrap();
        assert!(result.is_some());

        let config = result.unwrap();
        assert_eq!(config.outdir, Some("build".to_string()));
        assert_eq!(config.port, Some(9000));
        assert!(config.template_dir.is_none());
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("kumu.config.json");
        std::fs::write(&config_path, "not json").unwrap();

        let result = ConfigLoader::load_from_file(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_with_cli_override() {
        let file_config = KumuConfig {
            outdir: Some("build".to_string()),
            port: Some(9000),
            ..Default::default()
        };

        let merged = ConfigLoader::merge_with_cli(
            Some(file_config),
            PathBuf::from("."),
            Some(3000), // CLI override
        );

        assert_eq!(merged.outdir, PathBuf::from("build"));
        assert_eq!(merged.port, 3000); // CLI wins
    }

    #[test]
    fn test_merge_defaults() {
        let merged = ConfigLoader::merge_with_cli(None, PathBuf::from("/site"), None);

        assert_eq!(merged.root, PathBuf::from("/site"));
        assert_eq!(merged.template_dir, PathBuf::from("src/ejs"));
        assert_eq!(merged.entry, "./src/js/main");
        assert_eq!(merged.outdir, PathBuf::from("public"));
        assert_eq!(merged.port, 8080);
    }

    #[test]
    fn test_generate_example() {
        let example = ConfigLoader::generate_example();
        assert!(example.contains("templateDir"));
        assert!(example.contains("outdir"));
    }
}
