//! Command-line interface definition and parsing.

use std::path::PathBuf;

use clap::Parser;

use tillbook_infra::StoreConfig;

/// Point-of-sale invoicing over flat record files.
#[derive(Parser, Debug)]
#[command(name = "tillbook", version, long_about = None)]
pub struct Cli {
    /// Directory holding the product and customer record files.
    #[arg(short, long, default_value = ".")]
    pub data_dir: PathBuf,
}

impl Cli {
    /// Record store configuration for the chosen data directory.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::in_dir(&self.data_dir)
    }
}
