//! Command line / environment configuration.

use std::path::PathBuf;

use clap::Parser;
use stockroom_inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use stockroom_observability::LogFormat;

/// Keep a small inventory in a local file and manage it from the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "stockroom", version)]
pub struct Config {
    /// File the inventory is loaded from and saved to.
    /// Defaults to `<data dir>/stockroom/inventory.json`.
    #[arg(long, env = "STOCKROOM_DATA_FILE", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Items with a quantity below this are listed by "View Reports".
    #[arg(
        long,
        env = "STOCKROOM_LOW_STOCK_THRESHOLD",
        default_value_t = DEFAULT_LOW_STOCK_THRESHOLD,
        allow_negative_numbers = true
    )]
    pub low_stock_threshold: i64,

    /// Log line format (`compact` or `json`). Logs go to stderr; filter with RUST_LOG.
    #[arg(long, env = "STOCKROOM_LOG_FORMAT", default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl Config {
    /// The configured data file, or the default location.
    pub fn data_file(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(default_data_file)
    }
}

/// Resolve the default inventory file:
/// `{app_data_dir}/stockroom/inventory.json`, or `./inventory.json` when the
/// OS reports no data directory.
pub fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut home| {
                home.push(".local");
                home.push("share");
                home
            })
        })
        .map(|mut dir| {
            dir.push("stockroom");
            dir.push("inventory.json");
            dir
        })
        .unwrap_or_else(|| PathBuf::from("inventory.json"))
}
