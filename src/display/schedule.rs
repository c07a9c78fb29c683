//! Schedule display formatting
//!
//! Formats pay periods for terminal output: the paycheck breakdown table with
//! running balances, and the per-period grocery table.

use crate::models::PayPeriod;

/// Format one paycheck breakdown as a table section
pub fn format_paycheck_section(period: &PayPeriod) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} — Paycheck: {} ({})\n",
        period.date.format("%Y-%m-%d"),
        period.gross_pay,
        period.half
    ));

    output.push_str(&format!(
        "  {:24} {:>12} {:>16}\n",
        "Category", "Amount", "Remaining After"
    ));
    output.push_str("  ");
    output.push_str(&"-".repeat(54));
    output.push('\n');

    for line in &period.breakdown {
        output.push_str(&format!(
            "  {:24} {:>12} {:>16}\n",
            truncate(&line.name, 24),
            line.amount.to_string(),
            line.remaining_after.to_string()
        ));
    }

    output.push_str(&format!("  Final leftover: {}\n", period.final_remaining));

    output
}

/// Format one period's grocery plan as a table section
pub fn format_grocery_section(period: &PayPeriod) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} — Grocery total: {}\n",
        period.date.format("%Y-%m-%d"),
        period.grocery_total
    ));

    if period.grocery.is_empty() {
        output.push_str("  (no items)\n");
        return output;
    }

    output.push_str(&format!(
        "  {:22} {:16} {:18} {:>8}\n",
        "Item", "Category", "Size", "Cost"
    ));
    output.push_str("  ");
    output.push_str(&"-".repeat(66));
    output.push('\n');

    for item in &period.grocery {
        output.push_str(&format!(
            "  {:22} {:16} {:18} {:>8}\n",
            truncate(&item.name, 22),
            truncate(&item.category, 16),
            truncate(&item.size, 18),
            item.cost.to_string()
        ));
    }

    output
}

/// Format every period's paycheck section
pub fn format_paycheck_schedule(periods: &[PayPeriod]) -> String {
    if periods.is_empty() {
        return "No paydays fall in the target year.\n".to_string();
    }

    let mut output = String::new();
    for period in periods {
        output.push_str(&format_paycheck_section(period));
        output.push('\n');
    }
    output
}

/// Format every period's grocery section
pub fn format_grocery_schedule(periods: &[PayPeriod]) -> String {
    if periods.is_empty() {
        return "No paydays fall in the target year.\n".to_string();
    }

    let mut output = String::new();
    for period in periods {
        output.push_str(&format_grocery_section(period));
        output.push('\n');
    }
    output
}

/// Truncate a string to a maximum number of characters
///
/// Counts characters, not bytes, so multibyte names never split
/// mid-character.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlanConfig;
    use crate::schedule::Schedule;

    #[test]
    fn test_format_paycheck_section() {
        let schedule = Schedule::build(&PlanConfig::default());
        let formatted = format_paycheck_section(&schedule.periods()[0]);

        assert!(formatted.contains("2025-09-18"));
        assert!(formatted.contains("$2050.00"));
        assert!(formatted.contains("Car Payment"));
        assert!(formatted.contains("Final leftover: $875.00"));
    }

    #[test]
    fn test_format_grocery_section() {
        let schedule = Schedule::build(&PlanConfig::default());
        let formatted = format_grocery_section(&schedule.periods()[0]);

        assert!(formatted.contains("Grocery total: $120.00"));
        assert!(formatted.contains("Rice"));
        assert!(formatted.contains("10 lb bag"));
    }

    #[test]
    fn test_format_empty_schedule() {
        let formatted = format_paycheck_schedule(&[]);
        assert!(formatted.contains("No paydays"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim(), "Short");
        let result = truncate("A very long item name here", 10);
        assert!(result.len() <= 10);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte_name() {
        // A cut point landing inside a multibyte character must not panic.
        let name = "aaaaaaaaaaaaaaaaaaéxyz";
        let result = truncate(name, 19);
        assert!(result.ends_with("..."));
        assert_eq!(result.chars().count(), 19);

        // Within the width: padded, not cut.
        assert_eq!(truncate(name, 22).trim_end(), name);
    }

    #[test]
    fn test_format_grocery_section_with_accented_item() {
        let mut config = PlanConfig::default();
        config.grocery_template = vec![crate::models::GroceryItem::new(
            "Crème Fraîche Déglacée Spéciale",
            "Dairy",
            "1 tub",
            crate::models::Money::from_dollars(5),
        )];

        let schedule = Schedule::build(&config);
        let formatted = format_grocery_section(&schedule.periods()[0]);
        assert!(formatted.contains("Crème Fraîche Dégla..."));
    }
}
