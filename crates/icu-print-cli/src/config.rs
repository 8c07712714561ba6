use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub out_file: String,
    pub pretty: bool,
    pub log_filter: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            out_file: "lang/messages.json".to_string(),
            pretty: true,
            log_filter: "warn".to_string(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<CliConfig, CliError> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> Result<CliConfig, CliError> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(CliConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{CliConfig, load_config_or_default};
    use crate::error::CliError;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("icu_print_{name}_{nanos}.toml"));
        path
    }

    #[test]
    fn uses_default_when_missing() {
        let path = temp_path("missing");
        let config = load_config_or_default(&path).expect("config");
        assert_eq!(config.out_file, "lang/messages.json");
        assert!(config.pretty);
    }

    #[test]
    fn loads_partial_file() {
        let path = temp_path("config");
        fs::write(&path, "pretty = false\nout_file = \"dist/en.json\"\n").expect("write");
        let config = load_config_or_default(&path).expect("config");
        assert_eq!(config.out_file, "dist/en.json");
        assert!(!config.pretty);
        assert_eq!(config.log_filter, "warn");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn rejects_invalid_toml() {
        let path = temp_path("invalid");
        fs::write(&path, "pretty = maybe").expect("write");
        let err = load_config_or_default(&path).expect_err("invalid");
        assert!(matches!(err, CliError::Toml(_)));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn default_values_are_stable() {
        let config = CliConfig::default();
        assert_eq!(config.log_filter, "warn");
    }
}
