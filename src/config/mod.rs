//! Configuration and path management
//!
//! The plan configuration is an explicit immutable structure handed to the
//! schedule builder, so alternate incomes and dates can be tested without
//! editing source.

pub mod paths;
pub mod plan;

pub use paths::PlannerPaths;
pub use plan::PlanConfig;
