//! Pay period representation
//!
//! A pay period is one biweekly paycheck event: the payday date, the gross
//! pay, the ordered expense breakdown with running balances, and the grocery
//! plan derived from the template for that payday's month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BreakdownLine, GroceryItem, Money};

/// Classification of a payday within the month
///
/// Paydays on or before the 15th carry the first-half expense set (rent and
/// utilities); later paydays carry the second-half set (car, insurance, gym).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaycheckHalf {
    /// Day of month 1-15
    First,
    /// Day of month 16 onward
    Second,
}

impl PaycheckHalf {
    /// Classify a payday by its day of month
    pub fn for_date(date: NaiveDate) -> Self {
        if date.day() <= 15 {
            Self::First
        } else {
            Self::Second
        }
    }
}

impl fmt::Display for PaycheckHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first half"),
            Self::Second => write!(f, "second half"),
        }
    }
}

/// One biweekly paycheck cycle with its expenses and grocery plan
///
/// Immutable after construction by the schedule builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Payday date
    pub date: NaiveDate,
    /// Gross pay for this check
    pub gross_pay: Money,
    /// Which expense set applied
    pub half: PaycheckHalf,
    /// Ordered expense lines with running balances
    pub breakdown: Vec<BreakdownLine>,
    /// Balance left after the last breakdown line
    pub final_remaining: Money,
    /// Grocery items planned for this period
    pub grocery: Vec<GroceryItem>,
    /// Total cost of the grocery plan
    pub grocery_total: Money,
}

impl PayPeriod {
    /// Total of all breakdown amounts
    pub fn expense_total(&self) -> Money {
        self.breakdown.iter().map(|line| line.amount).sum()
    }

    /// Calendar month number (1-12) of the payday
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}
