//! Carbon accounting domain models.
//!
//! Provides the value types for representing emission inputs and computed
//! results. Two input shapes exist side by side:
//!
//! | u-carbon | Industry mode | Individual mode |
//! |----------|---------------|-----------------|
//! | EmissionSource | Plant / stack / process | — |
//! | EmissionInventory | Facility dataset | — |
//! | ActivityProfile | — | Personal footprint input |
//! | EmissionReport | Facility report | Footprint report |
//!
//! All types are plain value objects: no identity, no lifecycle, recomputed
//! from scratch on every calculation.

mod activity;
mod report;
mod source;

pub use activity::{ActivityProfile, EnergyUse, TransportMode, TransportUse};
pub use report::{CategoryEmission, EmissionReport};
pub use source::{EmissionInventory, EmissionSource};
