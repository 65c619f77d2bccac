//! CLI command definitions

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hwtrack")]
#[command(about = "Menu-driven homework assignment tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Storage backend (memory, document)
    ///
    /// The document backend reads the collection file path from the
    /// HWTRACK_DB environment variable.
    #[arg(short, long, default_value = "memory")]
    pub backend: String,
}
