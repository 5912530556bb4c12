//! CLI frontend for the Wayfinder text adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use commands::play::PlayOptions;

#[derive(Parser)]
#[command(
    name = "wayfinder",
    about = "Wayfinder: explore a room map as a text adventure",
    version
)]
struct Cli {
    /// JSON map file: rooms keyed by id, each with name, desc, exits, items
    map: PathBuf,

    /// Id of the room to start in
    #[arg(long, default_value = "0")]
    start: String,

    /// RNG seed for the random event roll
    #[arg(long)]
    seed: Option<u64>,

    /// Chance per turn of a random event (0.0-1.0)
    #[arg(long, default_value = "0.2")]
    event_chance: f64,

    /// Minimum similarity for fuzzy command matching (0.0-1.0)
    #[arg(long, default_value = "0.8")]
    match_threshold: f64,

    /// Win when carrying this item
    #[arg(long, default_value = "key")]
    win_item: String,

    /// Lose when entering the room with this name unarmed
    #[arg(long, default_value = "Boss Room")]
    lose_room: String,

    /// Item that keeps the player alive in the lose room
    #[arg(long, default_value = "sword")]
    guard_item: String,

    /// Play without win or lose conditions
    #[arg(long)]
    sandbox: bool,

    /// Log engine diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = PlayOptions {
        start: cli.start,
        seed: cli.seed,
        event_chance: cli.event_chance,
        match_threshold: cli.match_threshold,
        win_item: cli.win_item,
        lose_room: cli.lose_room,
        guard_item: cli.guard_item,
        sandbox: cli.sandbox,
    };

    if let Err(e) = commands::play::run(&cli.map, &options) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
