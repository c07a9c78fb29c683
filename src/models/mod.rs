//! Core data models for paycheck-planner
//!
//! This module contains the data structures that represent the planning
//! domain: money amounts, expense rules, grocery template items, and pay
//! periods.

pub mod expense;
pub mod grocery;
pub mod money;
pub mod period;

pub use expense::{BreakdownLine, ExpenseRule};
pub use grocery::{read_template_csv, read_template_file, Frequency, GroceryItem};
pub use money::Money;
pub use period::{PayPeriod, PaycheckHalf};
