//! Battery + rooftop-solar arbitrage simulator.
//!
//! Replays one year of hourly day-ahead prices and measured solar
//! production through a battery charge/discharge policy and reports
//! revenue, cycle wear, and return-on-investment figures.

pub mod battery;
pub mod config;
/// Series persistence, production ingestion, and telemetry export.
pub mod io;
pub mod market;
pub mod policy;
pub mod production;
pub mod series;
/// Simulation engine, clock, step records, and ROI reporting.
pub mod sim;
pub mod stats;
pub mod synthetic;
