//! Seeded synthetic price and production series for demo runs and
//! tests, so the simulator works without real market data on disk.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::SyntheticConfig;
use crate::series::{HOURS_PER_DAY, YearSeries};

/// Gaussian noise via the Box-Muller transform, mean 0.
pub fn gaussian_noise(rng: &mut StdRng, std_dev: f64) -> f64 {
    if std_dev <= 0.0 {
        return 0.0;
    }

    let u1: f64 = rng.random::<f64>().clamp(1e-12, 1.0);
    let u2: f64 = rng.random::<f64>();
    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    z0 * std_dev
}

/// Fraction of peak output at a given hour: a half-sine arc between
/// sunrise (inclusive) and sunset (exclusive), zero at night.
pub fn daylight_frac(hour: usize, sunrise_hour: usize, sunset_hour: usize) -> f64 {
    if hour < sunrise_hour || hour >= sunset_hour {
        return 0.0;
    }
    let span = (sunset_hour - sunrise_hour) as f64;
    let x = (hour - sunrise_hour) as f64 / span;
    (std::f64::consts::PI * x).sin()
}

/// Generates `days` of hourly solar production (kWh): a daylight arc
/// scaled to peak power with multiplicative Gaussian noise, clamped to
/// non-negative output. Deterministic for a given seed.
pub fn synthetic_production(cfg: &SyntheticConfig, days: usize, seed: u64) -> YearSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values = Vec::with_capacity(days * HOURS_PER_DAY);
    for _ in 0..days {
        for hour in 0..HOURS_PER_DAY {
            let frac = daylight_frac(hour, cfg.sunrise_hour, cfg.sunset_hour);
            if frac <= 0.0 {
                values.push(0.0);
            } else {
                let noise = 1.0 + gaussian_noise(&mut rng, cfg.production_noise_std);
                values.push((cfg.peak_kw * frac * noise).max(0.0));
            }
        }
    }
    YearSeries::new(values)
}

/// Generates `days` of hourly day-ahead prices (ct/kWh): a daily
/// sinusoid around a base level with additive Gaussian noise. Negative
/// prices are possible, as on the real day-ahead market. Deterministic
/// for a given seed.
pub fn synthetic_prices(cfg: &SyntheticConfig, days: usize, seed: u64) -> YearSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values = Vec::with_capacity(days * HOURS_PER_DAY);
    for _ in 0..days {
        for hour in 0..HOURS_PER_DAY {
            let angle = 2.0 * std::f64::consts::PI * hour as f64 / HOURS_PER_DAY as f64
                + cfg.price_phase_rad;
            let price =
                cfg.price_base_ct + cfg.price_amp_ct * angle.sin()
                    + gaussian_noise(&mut rng, cfg.price_noise_std);
            values.push(price);
        }
    }
    YearSeries::new(values)
}
