//! Quote result: the engine's sole output.

use serde::{Deserialize, Serialize};

/// One priced line of the material list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialItem {
    pub name: String,
    /// Quantity in `unit`. Meter quantities are rounded to 2 decimals at
    /// output time; counted items are whole numbers.
    pub quantity: f64,
    /// Unit label: "chapa", "un", "par" or "m".
    pub unit: String,
    pub unit_price: f64,
    /// Line total, rounded to the cent.
    pub total_price: f64,
}

/// Priced estimate for a list of modules.
///
/// Constructed once per engine invocation and immutable afterwards; the
/// caller owns it entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Material plus labor cost, rounded to the cent.
    pub total_cost: f64,
    /// Total cost marked up by the profit margin, rounded to the cent.
    pub suggested_price: f64,
    /// Estimated production time in working days, at least 1.
    pub production_time_days: u32,
    pub material_list: Vec<MaterialItem>,
    /// Labor portion of the total, rounded to the cent.
    pub labor_cost: f64,
    pub description: String,
    /// Audit strings summarizing areas, hours and sheet math. Display only,
    /// never parsed.
    pub observations: Vec<String>,
}
