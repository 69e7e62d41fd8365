use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Disc golf flight path calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Stability and distance readouts for one disc
    Calc(cmd::calc::CalcArgs),
    /// Render the flight chart as SVG
    Chart(cmd::chart::ChartArgs),
    /// Interactive calculator driven from stdin
    Session(cmd::session::SessionArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match cli.command {
        Commands::Calc(args) => cmd::calc::run(args),
        Commands::Chart(args) => cmd::chart::run(args),
        Commands::Session(args) => cmd::session::run(args),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
