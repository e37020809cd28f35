use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{builder::DefaultState, ConfigBuilder, File, FileFormat};
use portfolio_models::Sensitive;
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of config files, loaded in order. Defaults to
/// [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATHS_ENV: &str = "PORTFOLIO_CONFIG";

pub const RESEND_API_KEY_ENV: &str = "RESEND_API_KEY";
pub const CONTACT_TO_EMAIL_ENV: &str = "CONTACT_TO_EMAIL";
pub const CONTACT_FROM_EMAIL_ENV: &str = "CONTACT_FROM_EMAIL";

/// Load the config files listed in [`CONFIG_PATHS_ENV`] and apply the
/// email provider settings from the environment.
pub fn load() -> anyhow::Result<Config> {
    let paths = match std::env::var_os(CONFIG_PATHS_ENV) {
        Some(paths) => std::env::split_paths(&paths).collect(),
        None => vec![PathBuf::from(DEFAULT_CONFIG_PATH)],
    };

    let env = |key| std::env::var(key).ok();

    builder(&paths, &[])?
        .set_override_option("resend.api_key", env(RESEND_API_KEY_ENV))?
        .set_override_option("contact.to", env(CONTACT_TO_EMAIL_ENV))?
        .set_override_option("contact.from", env(CONTACT_FROM_EMAIL_ENV))?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

/// Load the given config files followed by the `overrides`, each of which
/// is parsed as a TOML document. The environment is not consulted.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    builder(paths, overrides)?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

fn builder(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<ConfigBuilder<DefaultState>> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    Ok(overrides.iter().fold(builder, |builder, &content| {
        builder.add_source(File::from_str(content, FileFormat::Toml))
    }))
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub resend: ResendConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origins allowed to submit the contact form from a browser.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResendConfig {
    pub api_key: Option<Sensitive<String>>,
    pub endpoint_override: Option<Url>,
    pub timeout: Duration,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactConfig {
    /// Recipient of the contact messages.
    pub to: Option<String>,
    /// Sender of the contact messages.
    pub from: Option<String>,
}
