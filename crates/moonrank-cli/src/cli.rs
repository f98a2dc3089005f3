//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "moonrank", version, about = "Rank generative-asset metadata by rarity")]
pub struct Cli {
    /// Input directory containing *.json metadata files
    #[arg(short = 'i', long = "input", value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Rarity output as a JSON file
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Duplicate report as a JSON file
    #[arg(short = 'd', long = "duplicates", value_name = "FILE")]
    pub duplicates: Option<PathBuf>,

    /// Filtered trait category, can be given N times
    #[arg(long = "filtered", value_name = "NAME")]
    pub filtered: Vec<String>,

    /// Frivolous trait category, can be given N times
    #[arg(long = "frivolous", value_name = "NAME")]
    pub frivolous: Vec<String>,

    /// Keep frivolous records in filtered_rank_explain
    #[arg(long)]
    pub include_frivolous: bool,

    /// TOML configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE", env = "MOONRANK_CONFIG")]
    pub config: Option<PathBuf>,
}
