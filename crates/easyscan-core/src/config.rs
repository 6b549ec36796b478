//! Persistent configuration for easyscan.
//!
//! Loads/saves a TOML config at `~/.easyscan/config.toml`.

use crate::ScanError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level easyscan configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EasyscanConfig {
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

impl EasyscanConfig {
    /// Load configuration from the given path.
    pub fn load(path: &Path) -> Result<Self, ScanError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ScanError::Config(e.to_string()))
    }

    /// Load from the default path, or return defaults if the file doesn't exist.
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Default config path: `~/.easyscan/config.toml`.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".easyscan")
            .join("config.toml")
    }
}

/// Scan defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Include every struct type even without a directive.
    pub all_structs: bool,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            pretty: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrips_through_toml() {
        let config = EasyscanConfig::default();
        let toml_str =
            toml::to_string_pretty(&config).expect("default config should serialize to TOML");
        let parsed: EasyscanConfig =
            toml::from_str(&toml_str).expect("serialized TOML should parse back");
        assert_eq!(parsed, config);
        assert!(!parsed.scan.all_structs);
        assert_eq!(parsed.output.format, OutputFormat::Human);
        assert!(parsed.output.pretty);
    }

    #[test]
    fn load_nonexistent_returns_error() {
        let result = EasyscanConfig::load(Path::new("/tmp/nonexistent_easyscan_config.toml"));
        assert!(matches!(result, Err(ScanError::Io(_))));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[scan]\nall_structs = true\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let loaded = EasyscanConfig::load(&path).expect("load should succeed");

        assert!(loaded.scan.all_structs);
        assert_eq!(loaded.output.format, OutputFormat::Json);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scan\nall_structs = ").unwrap();
        let result = EasyscanConfig::load(&path);
        assert!(matches!(result, Err(ScanError::Config(_))));
    }

    #[test]
    fn default_path_ends_with_config_toml() {
        let path = EasyscanConfig::default_path();
        assert!(path.ends_with("config.toml"));
        assert!(path.to_string_lossy().contains(".easyscan"));
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_fields() {
        let partial = r#"
[output]
format = "json"
"#;
        let config: EasyscanConfig = toml::from_str(partial).expect("partial TOML should parse");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
        assert!(!config.scan.all_structs);
    }
}
