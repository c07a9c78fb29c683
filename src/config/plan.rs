//! Plan configuration
//!
//! The immutable configuration consumed by the schedule builder: monthly
//! income, start payday, target year, the two ordered expense sets, and the
//! grocery template. The default carries the household's fixed constants;
//! alternate plans can be loaded from JSON or adjusted via CLI overrides.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{ExpenseRule, Frequency, GroceryItem, Money, PaycheckHalf};

use super::paths::PlannerPaths;

/// Immutable plan configuration
///
/// Expense sets are ordered sequences, not maps: the running "remaining
/// after" balance depends on the declared deduction order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Gross monthly household income
    pub monthly_income: Money,

    /// Date of the first paycheck
    pub start_payday: NaiveDate,

    /// Paydays are generated only while they fall in this year
    pub target_year: i32,

    /// Expenses deducted from paychecks on day 1-15, in deduction order
    pub first_half_expenses: Vec<ExpenseRule>,

    /// Expenses deducted from paychecks on day 16+, in deduction order
    pub second_half_expenses: Vec<ExpenseRule>,

    /// Recurring grocery items considered for every period
    pub grocery_template: Vec<GroceryItem>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            monthly_income: Money::from_dollars(4100),
            start_payday: NaiveDate::from_ymd_opt(2025, 9, 18).unwrap(),
            target_year: 2025,
            first_half_expenses: vec![
                ExpenseRule::new("Rent", Money::from_dollars(1900)),
                ExpenseRule::new("Utilities", Money::from_dollars(30)),
                ExpenseRule::new("Food & Snacks (Half)", Money::from_dollars(300)),
            ],
            second_half_expenses: vec![
                ExpenseRule::new("Car Payment", Money::from_dollars(700)),
                ExpenseRule::new("Insurance", Money::from_dollars(160)),
                ExpenseRule::new("Gym Membership", Money::from_dollars(15)),
                ExpenseRule::new("Food & Snacks (Half)", Money::from_dollars(300)),
            ],
            grocery_template: default_grocery_template(),
        }
    }
}

/// The household's fixed 16-item grocery catalog
fn default_grocery_template() -> Vec<GroceryItem> {
    vec![
        GroceryItem::new("Chicken Breast", "Meat", "5 lb bulk", Money::from_dollars(12)),
        GroceryItem::new("Steak Cuts", "Meat", "3 lb pack", Money::from_dollars(20)),
        GroceryItem::new("Rice", "Grains", "10 lb bag", Money::from_dollars(15))
            .with_frequency(Frequency::BiMonthly),
        GroceryItem::new("Broccoli", "Produce", "4 crowns", Money::from_dollars(6)),
        GroceryItem::new("Mushrooms", "Produce", "2 packs", Money::from_dollars(4)),
        GroceryItem::new("Granola Bars", "Snacks", "2 boxes", Money::from_dollars(8)),
        GroceryItem::new("Chips", "Snacks", "3 bags", Money::from_dollars(6)),
        GroceryItem::new("Protein Bars", "Snacks/Protein", "1 box", Money::from_dollars(10)),
        GroceryItem::new("Protein Shakes", "Snacks/Protein", "4-pack", Money::from_dollars(8)),
        GroceryItem::new("Coffee", "Beverages", "1 can", Money::from_dollars(12)),
        GroceryItem::new("Soda/Water", "Beverages", "12-pack", Money::from_dollars(10)),
        GroceryItem::new("Assorted Cheese Tray", "Charcuterie", "1 tray", Money::from_dollars(4)),
        GroceryItem::new("Cured Meats", "Charcuterie", "Salami/Prosciutto", Money::from_dollars(10)),
        GroceryItem::new("Olives", "Charcuterie", "1 jar", Money::from_dollars(4)),
        GroceryItem::new("Crackers", "Charcuterie", "2 boxes", Money::from_dollars(6)),
        GroceryItem::new("Grapes/Seasonal Fruit", "Charcuterie", "2 lb", Money::from_dollars(5)),
    ]
}

impl PlanConfig {
    /// Gross pay per check (monthly income split in half)
    pub fn pay_per_check(&self) -> Money {
        self.monthly_income.half()
    }

    /// The expense set for the given half, in deduction order
    pub fn expense_set(&self, half: PaycheckHalf) -> &[ExpenseRule] {
        match half {
            PaycheckHalf::First => &self.first_half_expenses,
            PaycheckHalf::Second => &self.second_half_expenses,
        }
    }

    /// Apply CLI overrides to this configuration
    ///
    /// Malformed values surface as configuration errors here, before any
    /// schedule is built.
    pub fn apply_overrides(
        &mut self,
        start: Option<&str>,
        year: Option<i32>,
        income: Option<&str>,
    ) -> PlannerResult<()> {
        if let Some(s) = start {
            self.start_payday = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|e| PlannerError::Config(format!("Invalid start date '{}': {}", s, e)))?;
        }

        if let Some(y) = year {
            self.target_year = y;
        } else if start.is_some() {
            // A new start date without an explicit year bounds generation to
            // the start date's own year.
            self.target_year = self.start_payday.year();
        }

        if let Some(s) = income {
            self.monthly_income = Money::parse(s)
                .map_err(|e| PlannerError::Config(format!("Invalid income '{}': {}", s, e)))?;
        }

        self.validate()
    }

    /// Validate the configuration
    ///
    /// The single startup failure mode: a year bound chrono cannot represent.
    /// Everything else (empty expense sets, empty template) degrades to
    /// zero-valued aggregates rather than failing.
    pub fn validate(&self) -> PlannerResult<()> {
        if NaiveDate::from_ymd_opt(self.target_year, 1, 1).is_none() {
            return Err(PlannerError::Config(format!(
                "Invalid target year: {}",
                self.target_year
            )));
        }
        Ok(())
    }

    /// Load a plan from an explicit JSON file
    pub fn load_from_path(path: &Path) -> PlannerResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PlannerError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        let config: PlanConfig = serde_json::from_str(&contents)
            .map_err(|e| PlannerError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load the plan from disk, or fall back to the built-in defaults
    pub fn load_or_create(paths: &PlannerPaths) -> PlannerResult<Self> {
        let plan_path = paths.plan_file();

        if plan_path.exists() {
            Self::load_from_path(&plan_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save the plan to disk
    pub fn save(&self, paths: &PlannerPaths) -> PlannerResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PlannerError::Config(format!("Failed to serialize plan: {}", e)))?;

        std::fs::write(paths.plan_file(), contents)
            .map_err(|e| PlannerError::Io(format!("Failed to write plan file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_constants() {
        let config = PlanConfig::default();
        assert_eq!(config.monthly_income, Money::from_dollars(4100));
        assert_eq!(config.pay_per_check(), Money::from_dollars(2050));
        assert_eq!(config.target_year, 2025);
        assert_eq!(config.first_half_expenses.len(), 3);
        assert_eq!(config.second_half_expenses.len(), 4);
        assert_eq!(config.grocery_template.len(), 16);
    }

    #[test]
    fn test_default_template_total() {
        // All 16 items together cost $120; without Rice the total is $105.
        let config = PlanConfig::default();
        let total: Money = config.grocery_template.iter().map(|g| g.cost).sum();
        assert_eq!(total, Money::from_dollars(120));

        let without_rice: Money = config
            .grocery_template
            .iter()
            .filter(|g| g.frequency.is_none())
            .map(|g| g.cost)
            .sum();
        assert_eq!(without_rice, Money::from_dollars(105));
    }

    #[test]
    fn test_expense_set_order() {
        let config = PlanConfig::default();
        let names: Vec<_> = config
            .expense_set(PaycheckHalf::Second)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["Car Payment", "Insurance", "Gym Membership", "Food & Snacks (Half)"]
        );
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = PlanConfig::default();
        config
            .apply_overrides(Some("2026-01-01"), None, Some("5000"))
            .unwrap();

        assert_eq!(
            config.start_payday,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
        // Year follows the new start date when not given explicitly
        assert_eq!(config.target_year, 2026);
        assert_eq!(config.monthly_income, Money::from_dollars(5000));
    }

    #[test]
    fn test_apply_overrides_bad_date() {
        let mut config = PlanConfig::default();
        let err = config
            .apply_overrides(Some("2025-13-40"), None, None)
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_apply_overrides_bad_income() {
        let mut config = PlanConfig::default();
        let err = config
            .apply_overrides(None, None, Some("lots"))
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut config = PlanConfig::default();
        config.target_year = 2026;
        config.save(&paths).unwrap();

        let loaded = PlanConfig::load_or_create(&paths).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_create_defaults_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = PlanConfig::load_or_create(&paths).unwrap();
        assert_eq!(loaded, PlanConfig::default());
    }

    #[test]
    fn test_load_from_path_rejects_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plan.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = PlanConfig::load_from_path(&path).unwrap_err();
        assert!(err.is_config());
    }
}
