//! CLI layer - Argument surface, menu loop and output rendering

pub mod commands;
pub mod menu;
pub mod output;

pub use commands::Cli;
pub use output::{format_listing, write_listing};
