//! CLI commands for data export
//!
//! Provides commands for writing the schedule's two sheets to disk, either
//! as separate CSV files or as a single bundled artifact.

use clap::Subcommand;
use std::path::PathBuf;

use crate::config::PlanConfig;
use crate::error::{PlannerError, PlannerResult};
use crate::export::Workbook;
use crate::schedule::Schedule;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Write each sheet to its own CSV file
    Sheets {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Write both sheets into one downloadable file
    Bundle {
        /// Output file path
        output: PathBuf,
    },

    /// Show export information without writing files
    Info,
}

/// Handle export commands
pub fn handle_export_command(config: &PlanConfig, cmd: ExportCommands) -> PlannerResult<()> {
    let schedule = Schedule::build(config);
    let workbook = Workbook::from_schedule(&schedule)?;

    match cmd {
        ExportCommands::Sheets { dir } => {
            workbook.write_sheets(&dir)?;
            for sheet in workbook.sheets() {
                println!(
                    "Exported {} rows to: {}",
                    sheet.row_count(),
                    dir.join(sheet.file_name()).display()
                );
            }
        }
        ExportCommands::Bundle { output } => {
            std::fs::write(&output, workbook.to_bytes()).map_err(|e| {
                PlannerError::Export(format!("Failed to write {}: {}", output.display(), e))
            })?;
            println!("Exported workbook to: {}", output.display());
        }
        ExportCommands::Info => {
            println!("Export Information");
            println!("==================\n");
            println!("Pay periods: {}", schedule.len());
            for sheet in workbook.sheets() {
                println!("  Sheet '{}': {} rows", sheet.name, sheet.row_count());
            }
            println!();
            println!("Bundle extension: {}", Workbook::extension());
            println!("Bundle MIME type: {}", Workbook::mime_type());
        }
    }

    Ok(())
}
