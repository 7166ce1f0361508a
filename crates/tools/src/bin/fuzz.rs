use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing_subscriber::EnvFilter;
use tugline_core::balance::{FIXED_DT, LOG_CAPACITY, MAX_CREW};
use tugline_core::interior::tile_at;
use tugline_core::journal_file::write_journal_to_file;
use tugline_core::{GameState, PlayerAction, Session, SimInput, hash_state, replay_journal};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "deadbeef")]
    seed: String,
    #[arg(short, long, default_value_t = 1000)]
    ticks: u32,
    /// Drives input and action choices
    #[arg(long, default_value_t = 42)]
    choice_seed: u64,
    /// Write the recorded run as a `.jsonl` journal
    #[arg(long)]
    record: Option<PathBuf>,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> Option<T> {
    if slice.is_empty() {
        return None;
    }
    let p = rng.next_u64() as usize % slice.len();
    Some(slice[p].clone())
}

fn random_action(rng: &mut ChaCha8Rng, state: &GameState) -> Option<PlayerAction> {
    let contract_ids: Vec<String> =
        state.contracts.contracts.iter().map(|contract| contract.id.clone()).collect();
    match rng.next_u64() % 9 {
        0 => Some(PlayerAction::Hire {
            candidate_id: state.company.candidates.first()?.member.id.clone(),
        }),
        1 => Some(PlayerAction::ResolveEvent {
            choice_id: choose(rng, &["a".to_string(), "b".to_string()])?,
        }),
        2 => {
            let lanes: Vec<String> = state
                .sector
                .neighbors(&state.sector_ship.current_node)
                .map(str::to_string)
                .collect();
            Some(PlayerAction::StartTravel { destination: choose(rng, &lanes)? })
        }
        3 => Some(PlayerAction::AcceptContract { contract_id: choose(rng, &contract_ids)? }),
        4 => Some(PlayerAction::StartOperation { contract_id: choose(rng, &contract_ids)? }),
        5 => Some(PlayerAction::Refuel),
        6 => Some(PlayerAction::RepairHull),
        7 => Some(PlayerAction::Fire { crew_id: state.company.crew.last()?.id.clone() }),
        _ => Some(PlayerAction::RegenerateCandidates),
    }
}

fn check_invariants(state: &GameState) -> Result<()> {
    ensure!(state.needs.in_bounds(), "avatar needs out of bounds: {:?}", state.needs);
    for member in &state.company.crew {
        ensure!(member.needs.in_bounds(), "crew {} needs out of bounds", member.id);
    }
    ensure!(state.company.crew.len() <= MAX_CREW, "crew over capacity");
    ensure!(state.company.credits >= 0, "negative credits");
    ensure!(state.log.len() <= LOG_CAPACITY, "log over capacity");
    ensure!(tile_at(state.player.tile).is_walkable(), "avatar inside a wall");
    ensure!(
        (0.0..=state.ship_stats.fuel_max).contains(&state.ship_stats.fuel),
        "fuel out of range"
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} ticks...", args.seed, args.ticks);
    let mut session = Session::new(&args.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(args.choice_seed);

    for _ in 0..args.ticks {
        if rng.next_u64() % 10 == 0
            && let Some(action) = random_action(&mut rng, session.state())
        {
            session.act(action);
        }
        let axis = |value: u64| match value % 3 {
            0 => -1.0,
            1 => 0.0,
            _ => 1.0,
        };
        let input = SimInput {
            move_x: axis(rng.next_u64()),
            move_y: axis(rng.next_u64()),
            pan_x: axis(rng.next_u64()),
            zoom_delta: axis(rng.next_u64()) * 0.5,
            interact: rng.next_u64() % 8 == 0,
            exit_command: rng.next_u64() % 25 == 0,
            ..SimInput::idle()
        };
        session.tick(FIXED_DT, input);
        check_invariants(session.state())
            .with_context(|| format!("invariant failed at tick {}", session.state().tick))?;
    }

    tracing::info!(ticks = args.ticks, records = session.journal().records.len(), "fuzz run complete");
    let live_hash = hash_state(session.state());
    let replayed = replay_journal(session.journal()).context("replay of recorded run failed")?;
    ensure!(replayed.final_hash == live_hash, "replay diverged from live run");

    if let Some(path) = &args.record {
        write_journal_to_file(path, session.journal())
            .with_context(|| format!("Failed to write journal: {}", path.display()))?;
        println!("Recorded {} inputs to {}", session.journal().records.len(), path.display());
    }

    let state = session.state();
    println!(
        "Fuzz finished at tick {}: {} crew, {} cr, hash {}",
        state.tick,
        state.company.crew.len(),
        state.company.credits,
        live_hash
    );
    Ok(())
}
