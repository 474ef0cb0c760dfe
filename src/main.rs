//! Simulator entry point — CLI wiring and config-driven run.

use std::path::Path;
use std::process;

use bess_sim::battery::Battery;
use bess_sim::config::ScenarioConfig;
use bess_sim::io::export::export_csv;
use bess_sim::io::store;
use bess_sim::market::PriceBoard;
use bess_sim::policy::{DispatchPolicy, HoldPolicy, SpreadRule};
use bess_sim::production::{Forecast, SolarSite};
use bess_sim::series::YearSeries;
use bess_sim::sim::engine::Engine;
use bess_sim::sim::kpi::RoiReport;
use bess_sim::sim::types::{SimConfig, StepRecord};
use bess_sim::stats::SpreadReport;
use bess_sim::synthetic;

/// Seed offset for the synthetic price series so it does not correlate
/// with the production series.
const PRICE_SEED_OFFSET: u64 = 57;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    seed_override: Option<u64>,
    telemetry_out: Option<String>,
    price_stats: bool,
}

fn print_help() {
    eprintln!("bess-sim — battery + rooftop-solar arbitrage simulator");
    eprintln!();
    eprintln!("Usage: bess-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!("  --preset <name>          Use a built-in preset (synthetic, buchtzig)");
    eprintln!("  --seed <u64>             Override the synthetic-series seed");
    eprintln!("  --telemetry-out <path>   Export per-hour step records to CSV");
    eprintln!("  --price-stats            Print daily price-spread statistics");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the synthetic preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        seed_override: None,
        telemetry_out: None,
        price_stats: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--telemetry-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --telemetry-out requires a path argument");
                    process::exit(1);
                }
                cli.telemetry_out = Some(args[i].clone());
            }
            "--price-stats" => {
                cli.price_stats = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Loads a series file or synthesizes one from the scenario seed.
fn price_series(scenario: &ScenarioConfig, days: usize) -> YearSeries {
    match &scenario.data.prices_path {
        Some(path) => match store::load_series(path) {
            Ok(series) => series,
            Err(e) => {
                eprintln!("error: cannot load prices \"{}\": {e}", path.display());
                process::exit(1);
            }
        },
        None => synthetic::synthetic_prices(
            &scenario.synthetic,
            days,
            scenario.simulation.seed.wrapping_add(PRICE_SEED_OFFSET),
        ),
    }
}

fn production_series(scenario: &ScenarioConfig, days: usize) -> YearSeries {
    match &scenario.data.production_path {
        Some(path) => match store::load_series(path) {
            Ok(series) => series,
            Err(e) => {
                eprintln!("error: cannot load production \"{}\": {e}", path.display());
                process::exit(1);
            }
        },
        None => synthetic::synthetic_production(&scenario.synthetic, days, scenario.simulation.seed),
    }
}

/// Runs the year under the given policy and computes the ROI report.
fn run_policy<P: DispatchPolicy>(
    sim_config: SimConfig,
    battery: Battery,
    market: PriceBoard,
    site: SolarSite,
    policy: P,
    capex_eur: f64,
) -> (Vec<StepRecord>, RoiReport) {
    let mut engine = Engine::new(sim_config, battery, market, site, policy);
    let records = engine.run();
    let report = RoiReport::from_run(&records, engine.battery(), capex_eur);
    (records, report)
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then the
    // synthetic default.
    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::synthetic()
    };

    if let Some(seed) = cli.seed_override {
        scenario.simulation.seed = seed;
    }

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let sim_config = SimConfig::new(scenario.simulation.days, scenario.simulation.seed);

    let prices = price_series(&scenario, sim_config.days);
    let production = production_series(&scenario, sim_config.days);
    for (name, series) in [("price", &prices), ("production", &production)] {
        if !series.covers_days(sim_config.days) {
            eprintln!(
                "error: {name} series covers {} hours, scenario needs {}",
                series.len(),
                sim_config.total_hours()
            );
            process::exit(1);
        }
    }

    let spread_stats = cli
        .price_stats
        .then(|| SpreadReport::from_series(&prices, scenario.battery.relative_cost_ct));

    let b = &scenario.battery;
    let battery = Battery::new(
        b.module_capacity_kwh,
        b.module_power_kw,
        b.cycle_life,
        b.relative_cost_ct,
        b.module_count,
    );
    let market = PriceBoard::new(prices);
    let site = SolarSite::new(production, Forecast::HourStub);
    let capex_eur = scenario.capex_eur();

    let (records, report) = if scenario.simulation.policy == "hold" {
        run_policy(sim_config, battery, market, site, HoldPolicy, capex_eur)
    } else {
        run_policy(sim_config, battery, market, site, SpreadRule, capex_eur)
    };

    println!("{report}");

    if let Some(stats) = spread_stats {
        println!();
        println!("{stats}");
    }

    if let Some(ref path) = cli.telemetry_out {
        if let Err(e) = export_csv(&records, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Telemetry written to {path}");
    }
}
