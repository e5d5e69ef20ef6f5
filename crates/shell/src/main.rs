//! `stockroom` entry point.

use clap::Parser;
use stockroom_infra::{InventoryStore, JsonFileRepository};
use stockroom_shell::{Config, Shell};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    stockroom_observability::init(config.log_format);

    let data_file = config.data_file();
    tracing::info!(path = %data_file.display(), "opening inventory");
    let store = InventoryStore::open(JsonFileRepository::new(data_file));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(store, stdin.lock(), stdout.lock())
        .with_low_stock_threshold(config.low_stock_threshold)
        .run()
}
