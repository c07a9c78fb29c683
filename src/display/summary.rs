//! Year summary display formatting

use crate::reports::YearSummary;

/// Format the year summary metrics
pub fn format_year_summary(summary: &YearSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Summary for {}\n", summary.year));
    output.push_str(&"=".repeat(24));
    output.push('\n');

    output.push_str(&format!("Pay periods:        {}\n", summary.period_count));

    if let (Some(first), Some(last)) = (summary.first_payday, summary.last_payday) {
        output.push_str(&format!(
            "Payday range:       {} to {}\n",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        ));
    }

    output.push_str(&format!("Total leftover:     {}\n", summary.total_leftover));
    output.push_str(&format!("Total grocery cost: {}\n", summary.total_grocery));

    output
}
