//! Export module for paycheck-planner
//!
//! Flattens a built schedule into two tabular sheets and serializes them for
//! download:
//! - "Paychecks": one row per breakdown line across all periods
//! - "Grocery Plan": one row per included grocery item across all periods

pub mod csv;
pub mod workbook;

pub use csv::{export_grocery_csv, export_paychecks_csv};
pub use workbook::{Sheet, Workbook};
