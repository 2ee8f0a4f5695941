//! Terminal front end for Fairy Fun.

mod commands;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "fairyfun",
    about = "Fairy Fun: help the forest friends, one letter at a time",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the save file
    #[arg(short, long, default_value = ".fairyfun", global = true)]
    save_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal
    Play {
        /// RNG seed for puzzle shuffles
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the intro story
        #[arg(long)]
        skip_intro: bool,
    },

    /// Show the saved game
    Status,

    /// Delete the saved game
    Reset,

    /// List every area and where its paths lead
    Areas,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fairyfun=info,ff_game=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed, skip_intro } => commands::play::run(&cli.save_dir, seed, skip_intro),
        Commands::Status => commands::status::run(&cli.save_dir),
        Commands::Reset => commands::reset::run(&cli.save_dir),
        Commands::Areas => commands::areas::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
