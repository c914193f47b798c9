//! Configuration file parsing for taxguard
//!
//! Supports:
//! - `--config <PATH>` - Explicit file
//! - `.taxguard/config.toml` - Per-directory settings
//! - `<config_dir>/taxguard/config.toml` - Per-user settings

pub mod settings;
pub mod types;

pub use settings::{
    apply_cli_overrides, apply_env_overrides, config_candidates, init_config_dir,
    load_first_existing, load_settings, read_settings_file, validate_settings, LoadedSettings,
    SERVER_ENV_VAR,
};
pub use types::*;
