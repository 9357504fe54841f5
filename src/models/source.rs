//! Emission source and inventory models.
//!
//! An emission source is a single named emitter (a plant, a stack, a
//! process) with a measured CO₂ quantity in kilograms. A sequence of
//! sources forms an inventory; ordering is preserved for display but has
//! no effect on computation.
//!
//! # Reference
//! GHG Protocol (2015), "A Corporate Accounting and Reporting Standard", Ch. 4

use serde::{Deserialize, Serialize};

/// A single named CO₂ emission source.
///
/// The `emission` field carries kilograms of CO₂. Values are expected to be
/// non-negative; range enforcement is the input boundary's job (see
/// [`crate::validation`]), not this type's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionSource {
    /// Human-readable source name (e.g., "Factory A").
    pub source: String,
    /// Measured CO₂ emission in kilograms.
    #[serde(rename = "emission")]
    pub emission_kg: f64,
}

impl EmissionSource {
    /// Creates a new emission source.
    pub fn new(source: impl Into<String>, emission_kg: f64) -> Self {
        Self {
            source: source.into(),
            emission_kg,
        }
    }
}

/// A collection of emission sources for one reporting scope.
///
/// May be empty; an empty inventory reports zero emissions and zero
/// credits. Duplicate source names are permitted — each row counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmissionInventory {
    /// The sources making up this inventory, in input order.
    pub sources: Vec<EmissionSource>,
}

impl EmissionInventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an inventory from existing sources.
    pub fn from_sources(sources: Vec<EmissionSource>) -> Self {
        Self { sources }
    }

    /// Adds a source (builder style).
    pub fn with_source(mut self, source: EmissionSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Appends a source.
    pub fn push(&mut self, source: EmissionSource) {
        self.sources.push(source);
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the inventory has no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Iterates over the sources.
    pub fn iter(&self) -> std::slice::Iter<'_, EmissionSource> {
        self.sources.iter()
    }
}
