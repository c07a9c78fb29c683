//! Schedule builder
//!
//! The one nontrivial computation in the crate: generating biweekly paydays
//! and assembling the pay-period records the display and export layers
//! consume.

pub mod builder;
pub mod paydays;

pub use builder::Schedule;
pub use paydays::{paydays, Paydays};
