use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use clap::{Args, ValueEnum};
use comfy_table::{Table, presets::UTF8_FULL};
use indicatif::{ProgressBar, ProgressStyle};
use lastmile_optimizer::{
    costs::{CostRates, calculate_costs},
    json::JsonSolution,
    problem::{fleet::FleetConfig, travel_matrices::TravelMatrices},
    search::{EscalationPolicy, FeasibilitySearch},
    solver::{insertion_engine::InsertionEngine, search_params::SearchParams},
};
use lastmile_scenario::{
    matrix::{DEFAULT_SPEED_KMH, build_matrices},
    scenario::{DemandProfile, Scenario},
};
use tracing::info;

use crate::parsers;

#[derive(Clone, Copy, ValueEnum)]
enum Profile {
    Base,
    Peak,
}

impl From<Profile> for DemandProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Base => DemandProfile::Base,
            Profile::Peak => DemandProfile::Peak,
        }
    }
}

#[derive(Args)]
pub struct SolveArgs {
    /// Scenario file to solve
    #[arg(short, long)]
    scenario: PathBuf,

    /// Demand profile to route
    #[arg(short, long, value_enum, default_value_t = Profile::Base)]
    profile: Profile,

    /// Packages one vehicle can carry
    #[arg(short, long, default_value_t = 50)]
    capacity: u32,

    /// Fleet size (defaults to the smallest fleet that can carry the demand)
    #[arg(short, long)]
    vehicles: Option<usize>,

    /// Time budget per solve attempt (e.g. "30s", "5m")
    #[arg(short, long, value_parser = parsers::parse_time_budget, default_value = "300s")]
    timeout: jiff::SignedDuration,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Hard ceiling on extra vehicles the escalation may add
    #[arg(long)]
    max_extra: Option<usize>,

    /// Where to write the solution JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: SolveArgs) -> Result<(), anyhow::Error> {
    let scenario = Scenario::from_file(&args.scenario)?;
    let profile = DemandProfile::from(args.profile);
    let demands = scenario.demands(profile);

    info!(
        scenario = scenario.name,
        locations = scenario.locations.len(),
        total_demand = scenario.total_demand(profile),
        "loaded scenario"
    );

    let matrices = build_matrices(&scenario, DEFAULT_SPEED_KMH);
    let matrices = TravelMatrices::new(matrices.distances, matrices.times)?;

    let vehicles = args.vehicles.unwrap_or_else(|| {
        FleetConfig::minimum_vehicles_for(scenario.total_demand(profile), args.capacity).max(1)
    });
    let fleet = FleetConfig::new(vehicles, args.capacity);

    let params = SearchParams {
        time_budget: args.timeout,
        seed: args.seed,
        ..SearchParams::default()
    };

    let bar = Arc::new(ProgressBar::new_spinner());
    bar.set_style(ProgressStyle::default_spinner().template("{spinner} solving ({elapsed})")?);
    let stop = Arc::new(AtomicBool::new(false));
    let ticker = {
        let bar = Arc::clone(&bar);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                bar.tick();
                thread::sleep(Duration::from_millis(100));
            }
        })
    };

    let policy = EscalationPolicy {
        max_extra: args.max_extra,
        ..EscalationPolicy::default()
    };
    let search = FeasibilitySearch::with_policy(InsertionEngine, policy);
    let result = search.solve(&matrices, &demands, fleet, &params);

    stop.store(true, Ordering::Relaxed);
    bar.finish_and_clear();
    let _ = ticker.join();

    let solution = result?;
    let costs = calculate_costs(&solution, &CostRates::default());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(["Metric", "Value"]);
    let rows = [
        ("Vehicles used", solution.vehicles_used.to_string()),
        ("Vehicles available", solution.vehicles_available.to_string()),
        ("Stops served", solution.num_stops().to_string()),
        ("Packages", solution.total_load.to_string()),
        (
            "Total distance",
            format!("{:.2} km", solution.total_distance_km),
        ),
        ("Fixed cost", format!("{:.2}", costs.fixed_cost)),
        ("Variable cost", format!("{:.2}", costs.variable_cost)),
        ("Driver cost", format!("{:.2}", costs.driver_cost)),
        ("Total cost", format!("{:.2}", costs.total_cost)),
        ("Cost per package", format!("{:.2}", costs.cost_per_package)),
    ];
    for (metric, value) in rows {
        table.add_row([metric.to_string(), value]);
    }

    println!("{table}");

    if let Some(output) = args.output {
        let json =
            JsonSolution::from_solution(&solution, Some(scenario.name.clone()), Some(costs));

        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&output, serde_json::to_string_pretty(&json)?)?;

        info!(path = %output.display(), "solution written");
    }

    Ok(())
}
