use std::io;

use clap::Parser;

use tillbook_console::{Cli, Desk, Menu};
use tillbook_infra::FlatFileStore;

fn main() -> anyhow::Result<()> {
    tillbook_observability::init();

    let cli = Cli::parse();
    let config = cli.store_config();
    tracing::info!(data_dir = %config.data_dir.display(), "starting front desk");

    let desk = Desk::new(
        FlatFileStore::customers(&config),
        FlatFileStore::products(&config),
    );
    Menu::new(desk, io::stdin().lock(), io::stdout().lock()).run()?;

    Ok(())
}
