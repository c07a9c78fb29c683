//! Reports module for paycheck-planner
//!
//! Aggregate views computed over a built schedule.

pub mod summary;

pub use summary::YearSummary;
