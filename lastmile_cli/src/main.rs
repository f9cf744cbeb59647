use clap::{Parser, Subcommand};

use crate::{generate::GenerateArgs, solve::SolveArgs};

mod generate;
mod parsers;
mod solve;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic delivery scenario
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
    /// Solve a scenario and report routes and costs
    Solve {
        #[command(flatten)]
        args: SolveArgs,
    },
    /// Print the JSON schema of solution files
    Schema,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Generate { args } => generate::run(args)?,
        Commands::Solve { args } => solve::run(args)?,
        Commands::Schema => {
            println!("{}", lastmile_optimizer::json::generate_json_schema()?);
        }
    }

    Ok(())
}
