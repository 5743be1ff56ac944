use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod context;

#[derive(Parser)]
#[command(name = "fithub")]
#[command(about = "FitHub Gym - build and price your membership", long_about = None)]
struct Cli {
    /// Directory holding config.toml and the saved selection
    #[arg(long, global = true, env = "FITHUB_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List plan durations and prices
    Plans,
    /// List fitness goals
    Goals,
    /// List add-ons
    Addons,
    /// Select a plan duration in months
    Plan { months: u32 },
    /// Select a fitness goal by id
    Goal { id: String },
    /// Add or remove an add-on by id
    Addon { id: String },
    /// Register personal details
    Register(commands::select::RegisterArgs),
    /// Show the price breakdown
    Summary,
    /// Pay for the current selection (simulated)
    Pay { method: String },
    /// Print the current selection as JSON
    Show,
    /// Discard every choice
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let mut store = context::open_store(cli.data_dir)?;

    match cli.command {
        Commands::Plans => commands::catalog::plans(&store),
        Commands::Goals => commands::catalog::goals(&store),
        Commands::Addons => commands::catalog::addons(&store),
        Commands::Plan { months } => commands::select::plan(&mut store, months),
        Commands::Goal { id } => commands::select::goal(&mut store, &id)?,
        Commands::Addon { id } => commands::select::addon(&mut store, &id)?,
        Commands::Register(args) => commands::select::register(&mut store, args)?,
        Commands::Summary => commands::summary::summary(&store),
        Commands::Pay { method } => commands::pay::pay(&store, &method)?,
        Commands::Show => commands::summary::show(&store)?,
        Commands::Reset => commands::select::reset(&mut store),
    }

    Ok(())
}
