//! CLI configuration
use anyhow::{bail, Context, Result};
use podcastr_player::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "podcastr.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_episodes_file")]
    pub episodes_file: PathBuf,

    #[serde(default = "default_show_prompt")]
    pub show_prompt: bool,

    #[serde(default)]
    pub player: PlayerConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            episodes_file: default_episodes_file(),
            show_prompt: default_show_prompt(),
            player: PlayerConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `podcastr.toml` in the working
    /// directory is read if present. Environment variables prefixed with
    /// `PODCASTR_` override both (`PODCASTR_PLAYER__LOOPING=true`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("PODCASTR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .context("Failed to read configuration")?;

        config
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.episodes_file.as_os_str().is_empty() {
            bail!("Episodes file is required (set PODCASTR_EPISODES_FILE)");
        }

        if !self.episodes_file.exists() {
            bail!("Episodes file not found at {:?}", self.episodes_file);
        }

        Ok(())
    }
}

// Default values
fn default_episodes_file() -> PathBuf {
    PathBuf::from("episodes.json")
}

fn default_show_prompt() -> bool {
    true
}
