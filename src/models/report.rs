//! Emission report model.
//!
//! A report is the computed output for one calculation call: total
//! emissions, the derived carbon credit requirement, and a per-category
//! breakdown for charting. Reports are derived values — recomputed on
//! every input change, never stored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One category's contribution to a report, for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEmission {
    /// Category label (e.g., "Transport", "Energy", or a source name).
    pub category: String,
    /// CO₂ contribution in kilograms.
    pub emission_kg: f64,
}

impl CategoryEmission {
    /// Creates a category entry.
    pub fn new(category: impl Into<String>, emission_kg: f64) -> Self {
        Self {
            category: category.into(),
            emission_kg,
        }
    }
}

/// Computed emissions and credit requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionReport {
    /// Total CO₂ emissions in kilograms.
    pub total_emissions_kg: f64,
    /// Carbon credits required to offset the total (1 credit = 10 kg CO₂).
    pub credits_required: f64,
    /// Per-category contributions, in input order.
    pub breakdown: Vec<CategoryEmission>,
}

impl EmissionReport {
    /// Returns the breakdown as a category → kg map.
    ///
    /// Duplicate category labels are summed. Sorted by label, so chart
    /// consumers get a stable ordering.
    pub fn breakdown_map(&self) -> BTreeMap<String, f64> {
        let mut map = BTreeMap::new();
        for entry in &self.breakdown {
            *map.entry(entry.category.clone()).or_insert(0.0) += entry.emission_kg;
        }
        map
    }
}
