//! Grocery template items
//!
//! The grocery template is a fixed catalog of recurring items considered for
//! every pay period. Most items repeat every period; items tagged with a
//! frequency are filtered by the payday's calendar month.

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use crate::error::{PlannerError, PlannerResult};

use super::Money;

/// Purchase frequency tag for a grocery item
///
/// Untagged items are bought every pay period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    /// Bought only in odd-numbered calendar months
    BiMonthly,
}

/// A recurring grocery item from the template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Item name (e.g., "Chicken Breast")
    pub name: String,
    /// Store category (e.g., "Meat")
    pub category: String,
    /// Size or unit description (e.g., "5 lb bulk")
    pub size: String,
    /// Cost per purchase
    pub cost: Money,
    /// Optional purchase frequency; `None` means every period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
}

impl GroceryItem {
    /// Create an item bought every pay period
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        size: impl Into<String>,
        cost: Money,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            size: size.into(),
            cost,
            frequency: None,
        }
    }

    /// Attach a frequency tag
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Whether this item is bought in the given calendar month (1-12)
    pub fn included_in_month(&self, month: u32) -> bool {
        match self.frequency {
            Some(Frequency::BiMonthly) => month % 2 == 1,
            None => true,
        }
    }
}

/// Read a grocery template from CSV
///
/// Expected header: `Item,Category,Size,Cost,Freq` where `Freq` is empty or
/// `bi-monthly`. Costs accept the same forms as [`Money::parse`].
pub fn read_template_csv<R: Read>(reader: R) -> PlannerResult<Vec<GroceryItem>> {
    #[derive(Deserialize)]
    struct Record {
        #[serde(rename = "Item")]
        item: String,
        #[serde(rename = "Category")]
        category: String,
        #[serde(rename = "Size")]
        size: String,
        #[serde(rename = "Cost")]
        cost: String,
        #[serde(rename = "Freq", default)]
        freq: Option<String>,
    }

    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut items = Vec::new();

    for result in csv_reader.deserialize() {
        let record: Record = result?;
        let cost = Money::parse(&record.cost)
            .map_err(|e| PlannerError::Template(format!("{}: {}", record.item, e)))?;

        let frequency = match record.freq.as_deref().map(str::trim) {
            None | Some("") => None,
            Some("bi-monthly") => Some(Frequency::BiMonthly),
            Some(other) => {
                return Err(PlannerError::Template(format!(
                    "{}: unknown frequency '{}'",
                    record.item, other
                )))
            }
        };

        items.push(GroceryItem {
            name: record.item,
            category: record.category,
            size: record.size,
            cost,
            frequency,
        });
    }

    Ok(items)
}

/// Read a grocery template from a CSV file
pub fn read_template_file(path: &Path) -> PlannerResult<Vec<GroceryItem>> {
    let file = std::fs::File::open(path).map_err(|e| {
        PlannerError::Template(format!("Failed to open {}: {}", path.display(), e))
    })?;
    read_template_csv(file)
}
