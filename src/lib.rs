//! Carbon accounting toolkit for the U-Engine ecosystem.
//!
//! Converts activity data into CO₂ emissions and a notional carbon credit
//! requirement. Two input shapes are supported: tabular industry inventories
//! (a list of named emission sources) and individual activity profiles
//! (transport mileage and electricity usage). All conversions are pure,
//! deterministic constant-factor calculations — rendering, persistence, and
//! trading are left to the consumer.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `EmissionSource`, `EmissionInventory`,
//!   `ActivityProfile`, `TransportUse`, `EnergyUse`, `EmissionReport`,
//!   `CategoryEmission`
//! - **`calculator`**: Emission factors and report computation
//! - **`validation`**: Input integrity checks (negative values, blank source
//!   names, non-finite numbers)
//! - **`io`**: CSV inventory import/export and the bundled sample inventory
//!
//! # Architecture
//!
//! This crate sits at Layer 3 (Frameworks) in the U-Engine ecosystem.
//! It contains only carbon accounting domain logic — no UI, no storage,
//! no marketplace semantics. Every operation is a stateless function over
//! value objects, trivially safe to call from concurrent contexts.
//!
//! # References
//!
//! - GHG Protocol (2015), "A Corporate Accounting and Reporting Standard"
//! - EPA (2023), "Greenhouse Gas Equivalencies Calculator"

pub mod calculator;
pub mod io;
pub mod models;
pub mod validation;
