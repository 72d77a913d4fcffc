//! Configuration file discovery and loading.
//!
//! The discovery order is:
//! 1. `NUBBS_CONFIG` environment variable.
//! 2. `~/.nubbs/config.json`
//! 3. If none found, defaults.
//!
//! An explicit `--config` path bypasses discovery and must exist.

use std::path::{Path, PathBuf};

use nubbs_types::{NubbsError, ShellConfig};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "NUBBS_CONFIG";

/// Discover the config file path using the fallback chain.
///
/// A path from `env_path` is returned as-is, without an existence check;
/// the caller decides what to do when it is missing.
pub fn discover_config_path(env_path: Option<String>, home_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(env_path) = env_path.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(env_path));
    }

    let path = home_dir?.join(".nubbs").join("config.json");
    path.exists().then_some(path)
}

/// Load configuration from the given path override or via discovery.
pub fn load_config(config_override: Option<&str>) -> anyhow::Result<ShellConfig> {
    if let Some(path_str) = config_override {
        let path = Path::new(path_str);
        if !path.exists() {
            return Err(NubbsError::ConfigNotFound {
                path: path_str.into(),
            }
            .into());
        }
        return read_config(path);
    }

    let discovered = discover_config_path(std::env::var(CONFIG_ENV).ok(), dirs::home_dir());
    let Some(path) = discovered else {
        tracing::info!("no config file found, using defaults");
        return Ok(ShellConfig::default());
    };

    if !path.exists() {
        tracing::warn!(
            path = %path.display(),
            "config path does not exist, using defaults"
        );
        return Ok(ShellConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> anyhow::Result<ShellConfig> {
    tracing::debug!(path = %path.display(), "loading config file");
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("failed to parse config file {}: {e}", path.display()))
}

/// Parse and validate a JSON config document.
pub fn parse_config(contents: &str) -> nubbs_types::Result<ShellConfig> {
    let config: ShellConfig = serde_json::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ── discovery ─────────────────────────────────────────────────────

    #[test]
    fn env_var_wins() {
        let path = discover_config_path(Some("/etc/nubbs.json".into()), None);
        assert_eq!(path, Some(PathBuf::from("/etc/nubbs.json")));
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let home = tempfile::tempdir().unwrap();
        let path = discover_config_path(Some(String::new()), Some(home.path().to_path_buf()));
        assert!(path.is_none());
    }

    #[test]
    fn home_config_found() {
        let home = tempfile::tempdir().unwrap();
        let dir = home.path().join(".nubbs");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.json"), "{}").unwrap();

        let path = discover_config_path(None, Some(home.path().to_path_buf()));
        assert_eq!(path, Some(dir.join("config.json")));
    }

    #[test]
    fn nothing_found_without_home() {
        assert!(discover_config_path(None, None).is_none());
    }

    #[test]
    fn nothing_found_in_empty_home() {
        let home = tempfile::tempdir().unwrap();
        assert!(discover_config_path(None, Some(home.path().to_path_buf())).is_none());
    }

    // ── parsing ───────────────────────────────────────────────────────

    #[test]
    fn parse_valid_config() {
        let cfg = parse_config(r#"{"prompt": "> ", "showIntro": false, "color": false}"#).unwrap();
        assert_eq!(cfg.prompt, "> ");
        assert!(!cfg.show_intro);
        assert!(!cfg.color);
    }

    #[test]
    fn parse_malformed_json() {
        let err = parse_config("{ nope").unwrap_err();
        assert!(matches!(err, NubbsError::Json(_)));
    }

    #[test]
    fn parse_rejects_invalid_values() {
        let err = parse_config(r#"{"prompt": "a\nb"}"#).unwrap_err();
        assert!(matches!(err, NubbsError::ConfigInvalid { .. }));
    }

    // ── loading ───────────────────────────────────────────────────────

    #[test]
    fn load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"intro": "custom banner"}}"#).unwrap();

        let cfg = load_config(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(cfg.intro, "custom banner");
        assert_eq!(cfg.prompt, "(nu) ");
    }

    #[test]
    fn load_explicit_missing_path_fails() {
        let err = load_config(Some("/tmp/.nubbs-test-does-not-exist.json")).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_explicit_malformed_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_config(Some(file.path().to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }
}
