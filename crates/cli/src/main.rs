use std::io;

use anyhow::Context;
use clap::Parser;

use foodtrack_cli::{Args, Config, Menu};
use foodtrack_infra::InventoryStore;

fn main() -> anyhow::Result<()> {
    let config = Config::from(Args::parse());
    foodtrack_observability::init(config.log_format);

    let store = InventoryStore::open(config.data_file.clone());
    match store.persistence_path() {
        Some(path) => tracing::info!(
            path = %path.display(),
            records = store.len(),
            "using backing file"
        ),
        None => tracing::warn!("persistence disabled; changes will be lost on exit"),
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&store, &config, stdin.lock(), stdout.lock())
        .run()
        .context("terminal I/O failed")?;

    Ok(())
}
