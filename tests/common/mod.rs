//! Shared test fixtures for integration tests.

use bess_sim::battery::Battery;
use bess_sim::config::SyntheticConfig;
use bess_sim::market::PriceBoard;
use bess_sim::policy::DispatchPolicy;
use bess_sim::production::{Forecast, SolarSite};
use bess_sim::sim::engine::Engine;
use bess_sim::sim::types::SimConfig;
use bess_sim::synthetic::{synthetic_prices, synthetic_production};

/// Seed offset separating price noise from production noise.
pub const PRICE_SEED_OFFSET: u64 = 57;

/// Default full-year configuration (365 days, seed 42).
pub fn default_config() -> SimConfig {
    SimConfig::full_year(42)
}

/// Default community-scale battery: 43 modules of 4.56 kWh / 2.4 kW,
/// 6000 cycles, 4.7 ct/kWh relative cost.
pub fn default_battery() -> Battery {
    Battery::new(4.56, 2.4, 6000, 4.7, 43)
}

/// Synthetic price board for the given run.
pub fn default_market(config: &SimConfig) -> PriceBoard {
    let series = synthetic_prices(
        &SyntheticConfig::default(),
        config.days,
        config.seed.wrapping_add(PRICE_SEED_OFFSET),
    );
    PriceBoard::new(series)
}

/// Synthetic production site for the given run, with the reference
/// hour-stub forecast.
pub fn default_site(config: &SimConfig) -> SolarSite {
    let series = synthetic_production(&SyntheticConfig::default(), config.days, config.seed);
    SolarSite::new(series, Forecast::HourStub)
}

/// Builds an engine over the default synthetic scenario.
pub fn build_engine<P: DispatchPolicy>(config: SimConfig, policy: P) -> Engine<P> {
    let market = default_market(&config);
    let site = default_site(&config);
    Engine::new(config, default_battery(), market, site, policy)
}
