//! hatm - headroom-adaptive tone map metadata tool
//!
//! Decodes, encodes and evaluates SMPTE ST 2094-50 Annex C payloads.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "hatm")]
#[command(author, version, about = "Headroom-adaptive tone map metadata tool")]
#[command(long_about = "
Inspect and evaluate SMPTE ST 2094-50 headroom-adaptive tone map payloads.

Payloads are raw binary metadata as carried in the bitstream.

Examples:
  hatm info meta.bin                      # Summarise a payload
  hatm info meta.bin --json               # Syntax tree and derived metadata
  hatm encode syntax.json -o meta.bin     # Encode a JSON syntax tree
  hatm adapt meta.bin --headroom 1.5      # Images and weights for a display
  hatm sample meta.bin --image 1 -n 32    # Tabulate a gain curve
  hatm apply meta.bin --headroom 1 4 2 1  # Tone map one linear pixel
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode and summarise a payload
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Encode a JSON syntax tree into a payload
    #[command(visible_alias = "e")]
    Encode(EncodeArgs),

    /// Select alternate images for a target headroom
    #[command(visible_alias = "a")]
    Adapt(AdaptArgs),

    /// Tabulate a gain curve
    #[command(visible_alias = "s")]
    Sample(SampleArgs),

    /// Apply the tone map to one linear RGB pixel
    Apply(ApplyArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input payload
    input: PathBuf,

    /// Print syntax tree and derived metadata as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct EncodeArgs {
    /// Syntax tree as JSON
    input: PathBuf,

    /// Output payload
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct AdaptArgs {
    /// Input payload
    input: PathBuf,

    /// Target display headroom in stops
    #[arg(long = "headroom", short = 'H')]
    headroom: f64,

    /// Print renderer parameters as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SampleArgs {
    /// Input payload
    input: PathBuf,

    /// Alternate image index
    #[arg(short, long, default_value = "0")]
    image: usize,

    /// Number of samples
    #[arg(short = 'n', long, default_value = "16")]
    samples: usize,

    /// First sample (defaults to the first control point)
    #[arg(long)]
    min: Option<f64>,

    /// Last sample (defaults to the last control point)
    #[arg(long)]
    max: Option<f64>,
}

#[derive(Args)]
struct ApplyArgs {
    /// Input payload
    input: PathBuf,

    /// Target display headroom in stops
    #[arg(long = "headroom", short = 'H')]
    headroom: f64,

    /// Linear RGB in the gain application space
    #[arg(num_args = 3, value_names = ["R", "G", "B"], allow_negative_numbers = true)]
    rgb: Vec<f64>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Encode(args) => commands::encode::run(args, cli.verbose),
        Commands::Adapt(args) => commands::adapt::run(args, cli.verbose),
        Commands::Sample(args) => commands::sample::run(args, cli.verbose),
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
    }
}
