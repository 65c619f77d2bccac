use std::io;
use std::str::FromStr;

use clap::Parser;
use hwtrack::cli::{menu, Cli};
use hwtrack::error::HwtrackError;
use hwtrack::store::{DocumentStore, MemoryStore, StoreBackend};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), HwtrackError> {
    let backend = StoreBackend::from_str(&cli.backend).map_err(HwtrackError::Config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();

    match backend {
        StoreBackend::Memory => {
            let mut store = MemoryStore::new();
            menu::run(&mut store, stdin.lock(), stdout.lock())
        }
        StoreBackend::Document => {
            let mut store = DocumentStore::open_from_env()?;
            menu::run(&mut store, stdin.lock(), stdout.lock())
        }
    }
}
