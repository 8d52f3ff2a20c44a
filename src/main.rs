use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use receipt_points::{breakdown, logging, LogFormat, Receipt};

#[derive(Debug, Parser)]
#[command(name = "receipt-points", version, about = "Score purchase receipts offline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the per-rule breakdown for one or more receipt JSON files
    Score {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(LogFormat::Pretty)?;

    match cli.command {
        Command::Score { files } => run_score(&files),
    }
}

fn run_score(files: &[PathBuf]) -> Result<()> {
    for path in files {
        let receipt = Receipt::from_file(path)?;
        let parts = breakdown(&receipt);

        println!("🧾 {} ({})", receipt.retailer, path.display());
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  retailer name      {:>6}", parts.retailer_name);
        println!("  round total        {:>6}", parts.round_total);
        println!("  item pairs         {:>6}", parts.item_pairs);
        println!("  item descriptions  {:>6}", parts.item_descriptions);
        println!("  odd purchase day   {:>6}", parts.odd_day);
        println!("  14:00-16:00        {:>6}", parts.afternoon);
        println!("  ─────────────────────────");
        println!("  total              {:>6}\n", parts.total());
    }

    Ok(())
}
