use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tugline_core::journal_file::load_journal_from_file;
use tugline_core::{InputJournal, ReplayResult, serialize_save_state};
use tugline_core::replay::replay_state;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Journal to replay: hash-chained `.jsonl`, or a plain JSON journal
    #[arg(short, long)]
    journal: PathBuf,
    /// Write the final state as a save file
    #[arg(short, long)]
    save: Option<PathBuf>,
}

fn load_journal(path: &Path) -> Result<InputJournal> {
    if path.extension().is_some_and(|ext| ext == "jsonl") {
        let loaded = load_journal_from_file(path)
            .with_context(|| format!("Failed to load journal file: {}", path.display()))?;
        return Ok(loaded.journal);
    }
    let journal_data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read journal file: {}", path.display()))?;
    serde_json::from_str(&journal_data).with_context(|| "Failed to deserialize journal JSON")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    tracing::info!(path = %args.journal.display(), "replaying journal");
    let journal = load_journal(&args.journal)?;
    let (state, result): (_, ReplayResult) =
        replay_state(&journal).context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Seed: {}", journal.seed);
    println!("Records Applied: {}", result.records_applied);
    println!("Final Tick: {}", result.final_tick);
    println!("Credits: {}", state.company.credits);
    println!("State Hash: {}", result.final_hash);

    if let Some(save_path) = args.save {
        let raw = serialize_save_state(&state)?;
        fs::write(&save_path, raw)
            .with_context(|| format!("Failed to write save file: {}", save_path.display()))?;
        println!("Saved final state to {}", save_path.display());
    }

    Ok(())
}
