use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tribute_core::scenario::{demo_tribute, run_demo};
use tribute_core::{DamageOutcome, Tribute, TributeConfig};

#[derive(Parser)]
#[command(version, about = "Inspect tributes and apply damage to their body locations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the demo tribute and hit it with the opening volley.
    Demo(OutputArgs),
    /// Load a tribute from a TOML file and print it.
    Show(ShowArgs),
    /// Load a tribute and apply damage to the given locations in order.
    Damage(DamageArgs),
}

#[derive(Args)]
struct OutputArgs {
    /// Emit the damage outcome and final state as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ShowArgs {
    #[arg(long)]
    config: PathBuf,
}

#[derive(Args)]
struct DamageArgs {
    #[arg(long)]
    config: PathBuf,
    #[arg(long, allow_negative_numbers = true)]
    amount: i64,
    /// Body locations, e.g. `head larm torso`.
    #[arg(required = true)]
    locations: Vec<String>,
    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Demo(args) => {
            init_tracing(None);
            handle_demo(args)
        }
        Commands::Show(args) => {
            let config = TributeConfig::from_path(&args.config)?;
            init_tracing(config.trace_filter());
            println!("{}", config.into_tribute()?);
            Ok(())
        }
        Commands::Damage(args) => {
            let config = TributeConfig::from_path(&args.config)?;
            init_tracing(config.trace_filter());
            handle_damage(config.into_tribute()?, args)
        }
    }
}

fn init_tracing(fallback: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or("warn")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn handle_demo(args: OutputArgs) -> Result<()> {
    let mut donny = demo_tribute();
    if !args.json {
        println!("\n{donny}");
    }
    let outcome = run_demo(&mut donny)?;
    emit(&donny, &outcome, args.json)
}

fn handle_damage(mut tribute: Tribute, args: DamageArgs) -> Result<()> {
    debug!(
        tribute = %tribute.name(),
        amount = args.amount,
        locations = ?args.locations,
        "applying damage"
    );
    let outcome = tribute.take_damage(args.amount, &args.locations)?;
    emit(&tribute, &outcome, args.output.json)
}

fn emit(tribute: &Tribute, outcome: &DamageOutcome, json: bool) -> Result<()> {
    if json {
        let payload = serde_json::json!({
            "outcome": outcome,
            "tribute": tribute,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        for report in &outcome.reports {
            println!("{report}");
        }
    }
    Ok(())
}
