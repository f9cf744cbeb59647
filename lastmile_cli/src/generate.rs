use std::path::PathBuf;

use clap::Args;
use lastmile_scenario::generate::{GeneratorConfig, generate_scenario};
use tracing::info;

#[derive(Args)]
pub struct GenerateArgs {
    /// Where to write the scenario JSON
    #[arg(short, long)]
    output: PathBuf,

    /// Scenario name stored in the file (defaults to the output stem)
    #[arg(short, long)]
    name: Option<String>,

    #[arg(short, long, default_value_t = 500)]
    locations: usize,

    #[arg(short, long, default_value_t = 8)]
    clusters: usize,

    #[arg(short, long, default_value_t = 42)]
    seed: u64,
}

pub fn run(args: GenerateArgs) -> Result<(), anyhow::Error> {
    let name = args
        .name
        .or_else(|| {
            args.output
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| String::from("synthetic"));

    let config = GeneratorConfig {
        name,
        num_locations: args.locations,
        num_clusters: args.clusters,
        ..GeneratorConfig::default()
    };

    let scenario = generate_scenario(&config, args.seed)?;

    if let Some(parent) = args.output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    scenario.write_to(&args.output)?;

    info!(
        path = %args.output.display(),
        locations = scenario.locations.len(),
        "scenario written"
    );

    Ok(())
}
