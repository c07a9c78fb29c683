//! Year summary report
//!
//! Aggregates a schedule into the year-level totals shown by the summary
//! view: how much is left over after all paychecks and how much the grocery
//! plans add up to.

use chrono::NaiveDate;

use crate::models::Money;
use crate::schedule::Schedule;

/// Year-aggregate totals over a schedule
#[derive(Debug, Clone, PartialEq)]
pub struct YearSummary {
    /// Target year the schedule covers
    pub year: i32,
    /// Number of pay periods generated
    pub period_count: usize,
    /// First payday, if any periods exist
    pub first_payday: Option<NaiveDate>,
    /// Last payday, if any periods exist
    pub last_payday: Option<NaiveDate>,
    /// Sum of all final remaining balances
    pub total_leftover: Money,
    /// Sum of all grocery plan totals
    pub total_grocery: Money,
}

impl YearSummary {
    /// Generate the summary for a schedule
    pub fn generate(schedule: &Schedule, year: i32) -> Self {
        Self {
            year,
            period_count: schedule.len(),
            first_payday: schedule.periods().first().map(|p| p.date),
            last_payday: schedule.periods().last().map(|p| p.date),
            total_leftover: schedule.total_leftover(),
            total_grocery: schedule.total_grocery(),
        }
    }
}
