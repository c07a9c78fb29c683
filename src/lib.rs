//! paycheck-planner - Biweekly paycheck budgeting and grocery planning
//!
//! This library computes a fixed biweekly household budget schedule and a
//! recurring grocery list from an immutable plan configuration, renders the
//! result as terminal tables, and exports it as a two-sheet tabular artifact.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Plan configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, grocery items, pay periods)
//! - `schedule`: The schedule builder (payday generation + period assembly)
//! - `reports`: Year-aggregate summaries
//! - `display`: Terminal table formatting
//! - `export`: CSV sheets and the bundled workbook artifact
//! - `cli`: clap subcommand handlers
//!
//! # Example
//!
//! ```rust
//! use paycheck_planner::config::PlanConfig;
//! use paycheck_planner::schedule::Schedule;
//!
//! let schedule = Schedule::build(&PlanConfig::default());
//! assert!(!schedule.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod schedule;

pub use error::{PlannerError, PlannerResult};
