//! Emission and credit computation.
//!
//! Converts inventories and activity profiles into [`EmissionReport`]s
//! using fixed published conversion factors. Every function here is pure
//! and stateless: no I/O, no shared state, identical input always yields
//! identical output.
//!
//! # Conversion factors
//!
//! | Factor | Value | Meaning |
//! |--------|-------|---------|
//! | `CAR_KG_PER_MILE` | 0.21 | kg CO₂ per mile driven by car |
//! | `GRID_KG_PER_KWH` | 0.85 | kg CO₂ per kWh of grid electricity |
//! | `KG_PER_CREDIT` | 10.0 | kg CO₂ offset by one carbon credit |
//!
//! Bus and train mileage has no published factor in this set and
//! contributes zero. The calculator performs no range validation; negative
//! inputs are summed as-is and must be rejected at the input boundary
//! (see [`crate::validation`]).

use crate::models::{
    ActivityProfile, CategoryEmission, EmissionInventory, EmissionReport, TransportMode,
};

/// kg CO₂ emitted per mile driven by car.
pub const CAR_KG_PER_MILE: f64 = 0.21;

/// kg CO₂ emitted per kWh of grid electricity consumed.
pub const GRID_KG_PER_KWH: f64 = 0.85;

/// kg CO₂ offset by one carbon credit.
pub const KG_PER_CREDIT: f64 = 10.0;

/// Converts an emission quantity into the credit requirement.
pub fn credits_for(emission_kg: f64) -> f64 {
    emission_kg / KG_PER_CREDIT
}

/// Computes an industry report from a tabular inventory.
///
/// The total is the plain sum of all source emissions; the breakdown has
/// one entry per source, in input order. An empty inventory yields a
/// `(0, 0)` report with an empty breakdown.
pub fn industry_report(inventory: &EmissionInventory) -> EmissionReport {
    let total_emissions_kg: f64 = inventory.iter().map(|s| s.emission_kg).sum();
    let breakdown = inventory
        .iter()
        .map(|s| CategoryEmission::new(s.source.clone(), s.emission_kg))
        .collect();

    EmissionReport {
        total_emissions_kg,
        credits_required: credits_for(total_emissions_kg),
        breakdown,
    }
}

/// Computes total CO₂ emissions (kg) for an activity profile.
///
/// Categories are additive and independent:
/// - Car transport: `miles × 0.21`. Bus and train: zero.
/// - Energy: `usage_kwh × 0.85`.
///
/// An empty profile yields zero.
pub fn activity_emissions(profile: &ActivityProfile) -> f64 {
    transport_emissions(profile) + energy_emissions(profile)
}

/// Computes a full report for an activity profile.
///
/// The breakdown always carries both `Transport` and `Energy` entries
/// (zero-valued when absent), so the chart shape is stable across inputs.
pub fn activity_report(profile: &ActivityProfile) -> EmissionReport {
    let transport_kg = transport_emissions(profile);
    let energy_kg = energy_emissions(profile);
    let total_emissions_kg = transport_kg + energy_kg;

    EmissionReport {
        total_emissions_kg,
        credits_required: credits_for(total_emissions_kg),
        breakdown: vec![
            CategoryEmission::new("Transport", transport_kg),
            CategoryEmission::new("Energy", energy_kg),
        ],
    }
}

fn transport_emissions(profile: &ActivityProfile) -> f64 {
    match profile.transport {
        Some(t) if t.mode == TransportMode::Car => t.miles * CAR_KG_PER_MILE,
        _ => 0.0,
    }
}

fn energy_emissions(profile: &ActivityProfile) -> f64 {
    match profile.energy {
        Some(e) => e.usage_kwh * GRID_KG_PER_KWH,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmissionInventory, EmissionSource};

    #[test]
    fn test_industry_report_sums_sources() {
        let inv = EmissionInventory::new()
            .with_source(EmissionSource::new("Factory A", 1500.0))
            .with_source(EmissionSource::new("Factory B", 2300.0))
            .with_source(EmissionSource::new("Factory C", 1200.0));

        let report = industry_report(&inv);
        assert_eq!(report.total_emissions_kg, 5000.0);
        assert_eq!(report.credits_required, 500.0);
        assert_eq!(report.breakdown.len(), 3);
        assert_eq!(report.breakdown[0].category, "Factory A");
        assert_eq!(report.breakdown[0].emission_kg, 1500.0);
    }

    #[test]
    fn test_industry_report_empty_inventory() {
        let report = industry_report(&EmissionInventory::new());
        assert_eq!(report.total_emissions_kg, 0.0);
        assert_eq!(report.credits_required, 0.0);
        assert!(report.breakdown.is_empty());
    }

    #[test]
    fn test_activity_emissions_car_and_energy() {
        let profile = ActivityProfile::new()
            .with_transport(TransportMode::Car, 100.0)
            .with_energy(50.0);

        // 100 * 0.21 + 50 * 0.85
        assert_eq!(activity_emissions(&profile), 63.5);
    }

    #[test]
    fn test_activity_report_credits() {
        let profile = ActivityProfile::new()
            .with_transport(TransportMode::Car, 100.0)
            .with_energy(50.0);

        let report = activity_report(&profile);
        assert_eq!(report.total_emissions_kg, 63.5);
        assert_eq!(report.credits_required, 6.35);
    }

    #[test]
    fn test_bus_and_train_contribute_zero() {
        let bus = ActivityProfile::new().with_transport(TransportMode::Bus, 100.0);
        let train = ActivityProfile::new().with_transport(TransportMode::Train, 250.0);

        assert_eq!(activity_emissions(&bus), 0.0);
        assert_eq!(activity_emissions(&train), 0.0);
    }

    #[test]
    fn test_empty_profile_is_zero() {
        assert_eq!(activity_emissions(&ActivityProfile::new()), 0.0);
    }

    #[test]
    fn test_energy_only_profile() {
        let profile = ActivityProfile::new().with_energy(200.0);
        assert_eq!(activity_emissions(&profile), 170.0);
    }

    #[test]
    fn test_breakdown_matches_total_for_car_profile() {
        let profile = ActivityProfile::new()
            .with_transport(TransportMode::Car, 37.0)
            .with_energy(12.5);

        let report = activity_report(&profile);
        let sum: f64 = report.breakdown.iter().map(|c| c.emission_kg).sum();
        assert_eq!(sum, report.total_emissions_kg);

        let map = report.breakdown_map();
        assert_eq!(map["Transport"], 37.0 * CAR_KG_PER_MILE);
        assert_eq!(map["Energy"], 12.5 * GRID_KG_PER_KWH);
    }

    #[test]
    fn test_calls_are_idempotent() {
        let profile = ActivityProfile::new()
            .with_transport(TransportMode::Car, 88.0)
            .with_energy(9.0);

        assert_eq!(activity_report(&profile), activity_report(&profile));

        let inv = EmissionInventory::new().with_source(EmissionSource::new("S", 7.0));
        assert_eq!(industry_report(&inv), industry_report(&inv));
    }

    #[test]
    fn test_credits_for() {
        assert_eq!(credits_for(0.0), 0.0);
        assert_eq!(credits_for(63.5), 6.35);
    }
}
