use crate::error::DfResult;
use crate::model::{DiscRatings, ThrowStyle};
use clap::{Args, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Disc flight numbers as given on the command line.
///
/// Kept as raw strings so the command line follows the same fail-soft
/// parsing as the interactive form (`--turn abc` means 0).
#[derive(Args, Debug, Clone)]
pub struct DiscArgs {
    #[arg(long, default_value = "7", allow_hyphen_values = true)]
    pub speed: String,
    #[arg(long, default_value = "5", allow_hyphen_values = true)]
    pub glide: String,
    #[arg(long, default_value = "-2", allow_hyphen_values = true)]
    pub turn: String,
    #[arg(long, default_value = "2", allow_hyphen_values = true)]
    pub fade: String,

    /// JSON file with {speed, glide, turn, fade}; overrides the flags above
    #[arg(long)]
    pub disc: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ThrowStyle::RightHandBackhand)]
    pub style: ThrowStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl DiscRatings {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DfResult<Self> {
        let path = path.as_ref();
        info!("📂 Loading disc: {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
