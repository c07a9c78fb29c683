//! Expense rules and paycheck breakdown lines
//!
//! An expense rule is a named fixed amount deducted from a paycheck. Rules
//! live in ordered sequences inside the plan configuration; the order is
//! significant because each breakdown line records the running balance after
//! its own deduction.

use serde::{Deserialize, Serialize};

use super::Money;

/// A named fixed expense deducted from a paycheck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRule {
    /// Expense category name (e.g., "Rent")
    pub name: String,
    /// Fixed amount deducted per applicable paycheck
    pub amount: Money,
}

impl ExpenseRule {
    /// Create a new expense rule
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// One line of a paycheck breakdown
///
/// Records the deducted amount together with the running balance immediately
/// after the deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// Expense category name
    pub name: String,
    /// Amount deducted
    pub amount: Money,
    /// Running balance after this deduction
    pub remaining_after: Money,
}
