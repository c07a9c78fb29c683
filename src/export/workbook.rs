//! Two-sheet workbook artifact
//!
//! Bundles the "Paychecks" and "Grocery Plan" sheets into a single
//! downloadable byte buffer. Sheets are CSV-encoded; the bundle separates
//! them with a `=== <sheet name> ===` marker line so the artifact stays a
//! plain-text spreadsheet import.

use std::io::Write;
use std::path::Path;

use crate::error::{PlannerError, PlannerResult};
use crate::schedule::Schedule;

use super::csv::{export_grocery_csv, export_paychecks_csv};

/// A single named tabular sheet, CSV-encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    /// Sheet name ("Paychecks" or "Grocery Plan")
    pub name: String,
    /// CSV-encoded rows including the header line
    pub data: Vec<u8>,
}

impl Sheet {
    /// A filesystem-safe file name for this sheet
    pub fn file_name(&self) -> String {
        let stem: String = self
            .name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}.csv", stem)
    }

    /// Number of data rows (excluding the header)
    pub fn row_count(&self) -> usize {
        self.data
            .split(|b| *b == b'\n')
            .filter(|line| !line.is_empty())
            .count()
            .saturating_sub(1)
    }
}

/// The exported two-sheet artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Build the workbook from a schedule
    pub fn from_schedule(schedule: &Schedule) -> PlannerResult<Self> {
        let mut paychecks = Vec::new();
        export_paychecks_csv(schedule, &mut paychecks)?;

        let mut grocery = Vec::new();
        export_grocery_csv(schedule, &mut grocery)?;

        Ok(Self {
            sheets: vec![
                Sheet {
                    name: "Paychecks".to_string(),
                    data: paychecks,
                },
                Sheet {
                    name: "Grocery Plan".to_string(),
                    data: grocery,
                },
            ],
        })
    }

    /// The sheets, in order
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Serialize the whole workbook into one downloadable byte buffer
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::new();
        for sheet in &self.sheets {
            // Infallible: writing into a Vec cannot fail.
            let _ = writeln!(buffer, "=== {} ===", sheet.name);
            buffer.extend_from_slice(&sheet.data);
            let _ = writeln!(buffer);
        }
        buffer
    }

    /// File extension for the bundled artifact
    pub fn extension() -> &'static str {
        "csv"
    }

    /// MIME type for the bundled artifact
    pub fn mime_type() -> &'static str {
        "text/csv"
    }

    /// Write each sheet to its own file under `dir`
    pub fn write_sheets(&self, dir: &Path) -> PlannerResult<()> {
        std::fs::create_dir_all(dir)
            .map_err(|e| PlannerError::Export(format!("Failed to create {}: {}", dir.display(), e)))?;

        for sheet in &self.sheets {
            let path = dir.join(sheet.file_name());
            std::fs::write(&path, &sheet.data).map_err(|e| {
                PlannerError::Export(format!("Failed to write {}: {}", path.display(), e))
            })?;
        }

        Ok(())
    }
}
