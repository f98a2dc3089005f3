//! Configuration loading for moonrank.
//! Reads the file named by `--config` / MOONRANK_CONFIG, else ./moonrank.toml
//! when present, else built-in defaults. Command line values win.

use std::path::{Path, PathBuf};

use anyhow::Context;
use moonrank_common::MoonrankError;
use moonrank_ranker::RankConfig;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

const DEFAULT_CONFIG_FILE: &str = "moonrank.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub ranking: RankConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    pub input_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub duplicates: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String { "moonrank=info,info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}


impl Config {
    /// Load configuration. An explicitly named file must exist; the default
    /// file is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(p) => {
                if !p.exists() {
                    anyhow::bail!("Config file not found: {}", p.display());
                }
                p.to_path_buf()
            }
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay command line values on top of the file configuration.
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(ref p) = cli.input_dir {
            self.paths.input_dir = Some(p.clone());
        }
        if let Some(ref p) = cli.output {
            self.paths.output = Some(p.clone());
        }
        if let Some(ref p) = cli.duplicates {
            self.paths.duplicates = Some(p.clone());
        }
        self.ranking = self
            .ranking
            .with_filtered(cli.filtered.iter().cloned())
            .with_frivolous(cli.frivolous.iter().cloned());
        self.ranking.include_frivolous |= cli.include_frivolous;
        self
    }

    /// Input directory and output file, both of which a run needs.
    pub fn require_paths(&self) -> moonrank_common::Result<(&Path, &Path)> {
        let input = self
            .paths
            .input_dir
            .as_deref()
            .ok_or_else(|| MoonrankError::Config("no input dir provided".to_string()))?;
        let output = self
            .paths
            .output
            .as_deref()
            .ok_or_else(|| MoonrankError::Config("no out file provided".to_string()))?;
        Ok((input, output))
    }
}
