use std::path::PathBuf;

use engine::DEFAULT_STORE_PATH;
use serde::Deserialize;

use crate::{cli::Cli, error::Result};

const DEFAULT_CONFIG_PATH: &str = "spendlog.toml";
const ENV_PREFIX: &str = "SPENDLOG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path of the JSON expenses file.
    pub file: PathBuf,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_STORE_PATH),
            log_level: "warn".to_string(),
        }
    }
}

/// Settings plus the error that made `load` skip the implicit settings file.
#[derive(Debug)]
pub struct Loaded {
    pub settings: Settings,
    pub skipped_file: Option<config::ConfigError>,
}

/// Layers defaults, the optional TOML file, `SPENDLOG_*` environment
/// variables and finally CLI flags.
///
/// A file named with `--config` must exist and parse. The implicit
/// `spendlog.toml` may be absent, and is skipped when it does not parse.
pub fn load(cli: &Cli) -> Result<Loaded> {
    load_with_default(cli, DEFAULT_CONFIG_PATH)
}

fn load_with_default(cli: &Cli, default_path: &str) -> Result<Loaded> {
    let (mut settings, skipped_file) = match cli.config.as_deref() {
        Some(path) => (build(Some(path), true)?, None),
        None => match build(Some(default_path), false) {
            Ok(settings) => (settings, None),
            Err(err) => (build(None, false)?, Some(err)),
        },
    };

    if let Some(file) = &cli.file {
        settings.file = file.clone();
    }
    if let Some(level) = &cli.log_level {
        settings.log_level = level.clone();
    }

    Ok(Loaded {
        settings,
        skipped_file,
    })
}

fn build(file: Option<&str>, required: bool) -> std::result::Result<Settings, config::ConfigError> {
    let mut builder = config::Config::builder();
    if let Some(path) = file {
        builder = builder.add_source(config::File::with_name(path).required(required));
    }
    builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));
    builder.build()?.try_deserialize()
}
