use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::CliConfig;
use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct IoOptions {
    pub input: PathBuf,
    pub out_path: Option<PathBuf>,
    pub config_path: PathBuf,
}

/// `--out` wins; otherwise the configured file, relative to the config file.
pub fn resolve_out_path(options: &IoOptions, config: &CliConfig) -> PathBuf {
    if let Some(path) = &options.out_path {
        return path.clone();
    }
    let path = Path::new(&config.out_file);
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let base = options
        .config_path
        .parent()
        .unwrap_or_else(|| Path::new("."));
    base.join(path)
}

pub fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut contents = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    contents.push('\n');
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{IoOptions, resolve_out_path, write_json};
    use crate::config::CliConfig;
    use serde_json::json;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn options(out_path: Option<&str>, config_path: &str) -> IoOptions {
        IoOptions {
            input: PathBuf::from("in.json"),
            out_path: out_path.map(PathBuf::from),
            config_path: PathBuf::from(config_path),
        }
    }

    #[test]
    fn explicit_out_path_wins() {
        let options = options(Some("x/out.json"), "cfg/icu-print.toml");
        let path = resolve_out_path(&options, &CliConfig::default());
        assert_eq!(path, PathBuf::from("x/out.json"));
    }

    #[test]
    fn configured_path_is_relative_to_config() {
        let options = options(None, "cfg/icu-print.toml");
        let path = resolve_out_path(&options, &CliConfig::default());
        assert_eq!(path, PathBuf::from("cfg/lang/messages.json"));
    }

    #[test]
    fn writes_compact_and_pretty_json() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("icu_print_output_{nanos}"));
        let compact = dir.join("nested").join("compact.json");
        let pretty = dir.join("pretty.json");
        write_json(&compact, &json!({"a": "b"}), false).expect("compact");
        write_json(&pretty, &json!({"a": "b"}), true).expect("pretty");
        assert_eq!(fs::read_to_string(&compact).expect("read"), "{\"a\":\"b\"}\n");
        assert_eq!(fs::read_to_string(&pretty).expect("read"), "{\n  \"a\": \"b\"\n}\n");
        fs::remove_dir_all(&dir).ok();
    }
}
