//! Configuration loading & display.

use easyscan_core::EasyscanConfig;
use std::path::Path;

/// Load an explicit config file, or the default one if present.
pub(crate) fn load(path: Option<&Path>) -> anyhow::Result<EasyscanConfig> {
    match path {
        Some(p) => Ok(EasyscanConfig::load(p)?),
        None => Ok(EasyscanConfig::load_or_default()),
    }
}

pub(crate) fn cmd_config(config: &EasyscanConfig) -> anyhow::Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use easyscan_core::OutputFormat;

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scan]\nall_structs = true\n\n[output]\nformat = \"json\"\n").unwrap();

        let config = load(Some(&path)).unwrap();
        assert!(config.scan.all_structs);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        assert!(load(Some(Path::new("/tmp/no_such_easyscan_config.toml"))).is_err());
    }
}
