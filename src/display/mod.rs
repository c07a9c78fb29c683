//! Display formatting for terminal output
//!
//! Pure functions from schedule data to printable strings; the CLI layer
//! decides what to print.

pub mod schedule;
pub mod summary;

pub use schedule::{
    format_grocery_schedule, format_grocery_section, format_paycheck_schedule,
    format_paycheck_section,
};
pub use summary::format_year_summary;
