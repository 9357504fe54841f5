//! Individual activity models.
//!
//! An activity profile captures one person's reportable activity for a
//! period: transport mileage and household electricity usage. Both
//! categories are optional; an absent category contributes zero emissions.

use serde::{Deserialize, Serialize};

/// Transport mode for mileage conversion.
///
/// Only `Car` currently has an emission factor. `Bus` and `Train` are
/// accepted as input but contribute zero — shared-transport factors are
/// not yet part of the published conversion set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Car,
    Bus,
    Train,
}

/// Transport usage for a reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportUse {
    /// Mode of transport.
    pub mode: TransportMode,
    /// Miles traveled.
    pub miles: f64,
}

impl TransportUse {
    /// Creates a transport usage record.
    pub fn new(mode: TransportMode, miles: f64) -> Self {
        Self { mode, miles }
    }
}

/// Electricity usage for a reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyUse {
    /// Energy consumed in kilowatt-hours.
    pub usage_kwh: f64,
}

impl EnergyUse {
    /// Creates an energy usage record.
    pub fn new(usage_kwh: f64) -> Self {
        Self { usage_kwh }
    }
}

/// One person's activity input for a reporting period.
///
/// Categories are independent and additive. An empty profile (no
/// transport, no energy) reports zero emissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityProfile {
    /// Transport usage, if reported.
    pub transport: Option<TransportUse>,
    /// Electricity usage, if reported.
    pub energy: Option<EnergyUse>,
}

impl ActivityProfile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transport category (builder style).
    pub fn with_transport(mut self, mode: TransportMode, miles: f64) -> Self {
        self.transport = Some(TransportUse::new(mode, miles));
        self
    }

    /// Sets the energy category (builder style).
    pub fn with_energy(mut self, usage_kwh: f64) -> Self {
        self.energy = Some(EnergyUse::new(usage_kwh));
        self
    }
}
