//! CSV export functionality
//!
//! Flattens a schedule into the two tabular sheets: paycheck breakdown rows
//! and grocery plan rows.

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::schedule::Schedule;

/// Export the paycheck breakdown sheet
///
/// One row per breakdown line across all periods, in period then line order.
pub fn export_paychecks_csv<W: Write>(schedule: &Schedule, writer: &mut W) -> PlannerResult<()> {
    writeln!(writer, "Paycheck Date,Category,Amount,Remaining After")
        .map_err(|e| PlannerError::Export(e.to_string()))?;

    for period in schedule.periods() {
        for line in &period.breakdown {
            writeln!(
                writer,
                "{},{},{:.2},{:.2}",
                period.date.format("%Y-%m-%d"),
                escape_csv(&line.name),
                line.amount.cents() as f64 / 100.0,
                line.remaining_after.cents() as f64 / 100.0
            )
            .map_err(|e| PlannerError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

/// Export the grocery plan sheet
///
/// One row per included grocery item across all periods, in period then item
/// order.
pub fn export_grocery_csv<W: Write>(schedule: &Schedule, writer: &mut W) -> PlannerResult<()> {
    writeln!(writer, "Paycheck Date,Item,Category,Size,Cost")
        .map_err(|e| PlannerError::Export(e.to_string()))?;

    for period in schedule.periods() {
        for item in &period.grocery {
            writeln!(
                writer,
                "{},{},{},{},{:.2}",
                period.date.format("%Y-%m-%d"),
                escape_csv(&item.name),
                escape_csv(&item.category),
                escape_csv(&item.size),
                item.cost.cents() as f64 / 100.0
            )
            .map_err(|e| PlannerError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
