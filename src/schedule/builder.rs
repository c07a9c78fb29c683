//! Schedule construction
//!
//! Builds the full biweekly schedule: one pay period per generated payday,
//! each with its expense breakdown and grocery plan. A pure transformation of
//! the plan configuration; fully deterministic, no failure modes.

use crate::config::PlanConfig;
use crate::models::{BreakdownLine, Money, PayPeriod, PaycheckHalf};

use super::paydays::paydays;

/// An ordered sequence of pay periods for one target year
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    periods: Vec<PayPeriod>,
}

impl Schedule {
    /// Build the schedule from a plan configuration
    pub fn build(config: &PlanConfig) -> Self {
        let gross_pay = config.pay_per_check();

        let periods = paydays(config.start_payday, config.target_year)
            .map(|date| build_period(config, date, gross_pay))
            .collect();

        Self { periods }
    }

    /// The pay periods, in payday order
    pub fn periods(&self) -> &[PayPeriod] {
        &self.periods
    }

    /// Number of pay periods
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether the schedule has no periods
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Sum of all final remaining balances
    pub fn total_leftover(&self) -> Money {
        self.periods.iter().map(|p| p.final_remaining).sum()
    }

    /// Sum of all grocery plan totals
    pub fn total_grocery(&self) -> Money {
        self.periods.iter().map(|p| p.grocery_total).sum()
    }
}

/// Build a single pay period for one payday
fn build_period(config: &PlanConfig, date: chrono::NaiveDate, gross_pay: Money) -> PayPeriod {
    use chrono::Datelike;

    let half = PaycheckHalf::for_date(date);

    // Deduct the expense set in declared order, recording each snapshot.
    let mut remaining = gross_pay;
    let mut breakdown = Vec::new();
    for rule in config.expense_set(half) {
        remaining -= rule.amount;
        breakdown.push(BreakdownLine {
            name: rule.name.clone(),
            amount: rule.amount,
            remaining_after: remaining,
        });
    }

    let grocery: Vec<_> = config
        .grocery_template
        .iter()
        .filter(|item| item.included_in_month(date.month()))
        .cloned()
        .collect();
    let grocery_total = grocery.iter().map(|item| item.cost).sum();

    PayPeriod {
        date,
        gross_pay,
        half,
        breakdown,
        final_remaining: remaining,
        grocery,
        grocery_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dollars(d: i64) -> Money {
        Money::from_dollars(d)
    }

    #[test]
    fn test_second_half_scenario() {
        // 2025-09-18: day 18, second half; month 9 is odd so Rice is bought.
        let schedule = Schedule::build(&PlanConfig::default());
        let period = &schedule.periods()[0];

        assert_eq!(period.date, date(2025, 9, 18));
        assert_eq!(period.half, PaycheckHalf::Second);
        assert_eq!(period.gross_pay, dollars(2050));

        let names: Vec<_> = period.breakdown.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            ["Car Payment", "Insurance", "Gym Membership", "Food & Snacks (Half)"]
        );

        let balances: Vec<_> = period
            .breakdown
            .iter()
            .map(|l| l.remaining_after)
            .collect();
        assert_eq!(
            balances,
            [dollars(1350), dollars(1190), dollars(1175), dollars(875)]
        );
        assert_eq!(period.final_remaining, dollars(875));

        assert!(period.grocery.iter().any(|g| g.name == "Rice"));
        assert_eq!(period.grocery.len(), 16);
        assert_eq!(period.grocery_total, dollars(120));
    }

    #[test]
    fn test_first_half_scenario_negative_balance() {
        // 2025-10-02: day 2, first half; month 10 is even so Rice is skipped.
        let schedule = Schedule::build(&PlanConfig::default());
        let period = &schedule.periods()[1];

        assert_eq!(period.date, date(2025, 10, 2));
        assert_eq!(period.half, PaycheckHalf::First);

        let names: Vec<_> = period.breakdown.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Rent", "Utilities", "Food & Snacks (Half)"]);

        let balances: Vec<_> = period
            .breakdown
            .iter()
            .map(|l| l.remaining_after)
            .collect();
        assert_eq!(balances, [dollars(150), dollars(120), dollars(-180)]);

        // Negative balances are permitted, not an error.
        assert_eq!(period.final_remaining, dollars(-180));

        assert!(period.grocery.iter().all(|g| g.name != "Rice"));
        assert_eq!(period.grocery.len(), 15);
        assert_eq!(period.grocery_total, dollars(105));
    }

    #[test]
    fn test_final_remaining_matches_gross_minus_expense_total() {
        let schedule = Schedule::build(&PlanConfig::default());

        assert!(!schedule.is_empty());
        for period in schedule.periods() {
            assert_eq!(
                period.final_remaining,
                period.gross_pay - period.expense_total()
            );
            assert_eq!(
                Some(period.final_remaining),
                period.breakdown.last().map(|l| l.remaining_after)
            );
        }
    }

    #[test]
    fn test_grocery_total_matches_item_costs() {
        let schedule = Schedule::build(&PlanConfig::default());

        for period in schedule.periods() {
            let expected: Money = period.grocery.iter().map(|g| g.cost).sum();
            assert_eq!(period.grocery_total, expected);
        }
    }

    #[test]
    fn test_rice_parity_across_all_periods() {
        let schedule = Schedule::build(&PlanConfig::default());

        for period in schedule.periods() {
            let has_rice = period.grocery.iter().any(|g| g.name == "Rice");
            assert_eq!(has_rice, period.month() % 2 == 1, "payday {}", period.date);
        }
    }

    #[test]
    fn test_year_aggregates() {
        let schedule = Schedule::build(&PlanConfig::default());

        let leftover: Money = schedule.periods().iter().map(|p| p.final_remaining).sum();
        let grocery: Money = schedule.periods().iter().map(|p| p.grocery_total).sum();
        assert_eq!(schedule.total_leftover(), leftover);
        assert_eq!(schedule.total_grocery(), grocery);
        assert_eq!(schedule.len(), 8);
    }

    #[test]
    fn test_empty_schedule_when_start_outside_target_year() {
        let mut config = PlanConfig::default();
        config.start_payday = date(2026, 1, 1);

        let schedule = Schedule::build(&config);
        assert!(schedule.is_empty());
        assert_eq!(schedule.total_leftover(), Money::zero());
        assert_eq!(schedule.total_grocery(), Money::zero());
    }

    #[test]
    fn test_empty_expense_sets_degrade_to_gross_pay() {
        let mut config = PlanConfig::default();
        config.first_half_expenses.clear();
        config.second_half_expenses.clear();
        config.grocery_template.clear();

        let schedule = Schedule::build(&config);
        for period in schedule.periods() {
            assert!(period.breakdown.is_empty());
            assert_eq!(period.final_remaining, period.gross_pay);
            assert_eq!(period.grocery_total, Money::zero());
        }
    }
}
