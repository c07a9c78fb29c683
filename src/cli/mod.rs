//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the library layer.

pub mod export;
pub mod show;

pub use export::{handle_export_command, ExportCommands};
pub use show::{handle_show_command, ShowCommands};
