//! Settings loader for config.toml
//!
//! Lookup order: an explicit `--config` path, then `.taxguard/config.toml`
//! in the working directory, then `<config_dir>/taxguard/config.toml`.
//! A missing or unparsable file falls back to defaults; only an explicit
//! path that does not exist is an error.

use std::path::{Path, PathBuf};

use taxguard_core::prelude::*;

use super::types::{CliOverrides, Settings, MIN_TIMEOUT_SECS};

const CONFIG_FILENAME: &str = "config.toml";
const TAXGUARD_DIR: &str = ".taxguard";
const APP_DIR: &str = "taxguard";

/// Overrides the configured base URL
pub const SERVER_ENV_VAR: &str = "TAXGUARD_SERVER";

/// Settings plus the file they came from, if any
#[derive(Debug, Clone, Default)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub source: Option<PathBuf>,
}

/// Files searched when no explicit path is given, in priority order
pub fn config_candidates(cwd: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![cwd.join(TAXGUARD_DIR).join(CONFIG_FILENAME)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join(APP_DIR).join(CONFIG_FILENAME));
    }
    candidates
}

/// Load settings from the first config file found
pub fn load_settings(explicit: Option<&Path>, cwd: &Path) -> Result<LoadedSettings> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        return Ok(LoadedSettings {
            settings: read_settings_file(path),
            source: Some(path.to_path_buf()),
        });
    }

    Ok(load_first_existing(&config_candidates(cwd)))
}

/// Load the first candidate that exists, or defaults when none do
pub fn load_first_existing(candidates: &[PathBuf]) -> LoadedSettings {
    match candidates.iter().find(|p| p.exists()) {
        Some(path) => LoadedSettings {
            settings: read_settings_file(path),
            source: Some(path.clone()),
        },
        None => {
            debug!("No config file in {:?}, using defaults", candidates);
            LoadedSettings::default()
        }
    }
}

/// Parse one config file, falling back to defaults on any failure
pub fn read_settings_file(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Apply `TAXGUARD_SERVER`, if set and non-empty
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(server) = std::env::var(SERVER_ENV_VAR) {
        let server = server.trim();
        if !server.is_empty() {
            debug!("{} overrides base URL: {}", SERVER_ENV_VAR, server);
            settings.service.base_url = server.to_string();
        }
    }
}

/// Apply command-line flags; these win over file and environment
pub fn apply_cli_overrides(settings: &mut Settings, cli: &CliOverrides) {
    if let Some(server) = &cli.server {
        settings.service.base_url = server.clone();
    }
    if let Some(secs) = cli.timeout_secs {
        settings.service.timeout_secs = secs;
    }
}

/// Reject settings the client cannot work with
pub fn validate_settings(settings: &mut Settings) -> Result<()> {
    taxguard_client::endpoint_for(&settings.service.base_url)?;

    if settings.service.timeout_secs < MIN_TIMEOUT_SECS {
        warn!(
            "timeout_secs = {} is below the minimum, using {}",
            settings.service.timeout_secs, MIN_TIMEOUT_SECS
        );
        settings.service.timeout_secs = MIN_TIMEOUT_SECS;
    }
    Ok(())
}

/// Create `.taxguard/config.toml` with commented defaults.
///
/// Leaves an existing file untouched. Returns the file path.
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let dir = project_path.join(TAXGUARD_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir).with_context(|| format!("Failed to create {:?}", dir))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        debug!("{:?} already exists, not overwriting", config_path);
        return Ok(config_path);
    }

    let default_content = r#"# taxguard configuration

[service]
base_url = "http://localhost:5000"   # /predict is appended
timeout_secs = 30                    # minimum 1

[ui]
# Pre-select a model on the detection form:
# logistic_regression, random_forest, decision_tree or svm
# default_model = "random_forest"
"#;
    std::fs::write(&config_path, default_content)
        .with_context(|| format!("Failed to write {:?}", config_path))?;

    info!("Created {:?}", config_path);
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use taxguard_core::ModelType;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let taxguard_dir = dir.join(".taxguard");
        std::fs::create_dir_all(&taxguard_dir).unwrap();
        let path = taxguard_dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let loaded = load_first_existing(&[temp.path().join("nope.toml")]);

        assert_eq!(loaded.settings, Settings::default());
        assert!(loaded.source.is_none());
    }

    #[test]
    fn test_custom_file() {
        let temp = tempdir().unwrap();
        let path = write_config(
            temp.path(),
            r#"
[service]
base_url = "http://10.0.0.5:8080"
timeout_secs = 10

[ui]
default_model = "decision_tree"
"#,
        );

        let loaded = load_settings(Some(&path), temp.path()).unwrap();
        assert_eq!(loaded.settings.service.base_url, "http://10.0.0.5:8080");
        assert_eq!(loaded.settings.service.timeout_secs, 10);
        assert_eq!(
            loaded.settings.ui.default_model,
            Some(ModelType::DecisionTree)
        );
        assert_eq!(loaded.source, Some(path));
    }

    #[test]
    fn test_invalid_toml_gives_defaults() {
        let temp = tempdir().unwrap();
        let path = write_config(temp.path(), "this is not [valid toml");

        let loaded = load_first_existing(&[path.clone()]);
        assert_eq!(loaded.settings, Settings::default());
        assert_eq!(loaded.source, Some(path));
    }

    #[test]
    fn test_project_file_is_found_first() {
        let temp = tempdir().unwrap();
        write_config(temp.path(), "[service]\ntimeout_secs = 7\n");

        let loaded = load_settings(None, temp.path()).unwrap();
        assert_eq!(loaded.settings.service.timeout_secs, 7);
    }

    #[test]
    fn test_first_existing_candidate_wins() {
        let temp = tempdir().unwrap();
        let first = temp.path().join("a.toml");
        let second = temp.path().join("b.toml");
        std::fs::write(&second, "[service]\ntimeout_secs = 3\n").unwrap();

        let loaded = load_first_existing(&[first, second.clone()]);
        assert_eq!(loaded.source, Some(second));
        assert_eq!(loaded.settings.service.timeout_secs, 3);
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let temp = tempdir().unwrap();
        let err = load_settings(Some(&temp.path().join("gone.toml")), temp.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    #[serial]
    fn test_env_override() {
        std::env::set_var(SERVER_ENV_VAR, "http://fraud.internal:9000");
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings);
        std::env::remove_var(SERVER_ENV_VAR);

        assert_eq!(settings.service.base_url, "http://fraud.internal:9000");
    }

    #[test]
    #[serial]
    fn test_empty_env_is_ignored() {
        std::env::set_var(SERVER_ENV_VAR, "  ");
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings);
        std::env::remove_var(SERVER_ENV_VAR);

        assert_eq!(settings.service.base_url, "http://localhost:5000");
    }

    #[test]
    #[serial]
    fn test_cli_beats_env() {
        std::env::set_var(SERVER_ENV_VAR, "http://from-env:1");
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings);
        std::env::remove_var(SERVER_ENV_VAR);

        apply_cli_overrides(
            &mut settings,
            &CliOverrides {
                server: Some("http://from-cli:2".into()),
                timeout_secs: Some(12),
            },
        );

        assert_eq!(settings.service.base_url, "http://from-cli:2");
        assert_eq!(settings.service.timeout_secs, 12);
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut settings = Settings::default();
        settings.service.base_url = "localhost:5000/".into();
        let err = validate_settings(&mut settings).unwrap_err();
        assert!(matches!(err, Error::InvalidServiceUrl { .. }));
    }

    #[test]
    fn test_validate_clamps_timeout() {
        let mut settings = Settings::default();
        settings.service.timeout_secs = 0;
        validate_settings(&mut settings).unwrap();
        assert_eq!(settings.service.timeout_secs, 1);
    }

    #[test]
    fn test_init_config_dir_writes_parsable_defaults() {
        let temp = tempdir().unwrap();
        let path = init_config_dir(temp.path()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Settings = toml::from_str(&content).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let path = write_config(temp.path(), "[service]\ntimeout_secs = 9\n");

        init_config_dir(temp.path()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("timeout_secs = 9"));
    }

    #[test]
    fn test_init_config_dir_reports_io_failure() {
        let temp = tempdir().unwrap();
        // A plain file where the directory should go
        std::fs::write(temp.path().join(TAXGUARD_DIR), "").unwrap();

        let err = init_config_dir(temp.path()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
