use anyhow::Context;
use chess_ai::{load_settings, save_settings, self_play, SETTINGS_FILENAME};
use chess_engine::{Rules, SearchSession};
use chess_logic_shared::{mirror_fen, ShakmatyRules};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Pick chess moves with alpha-beta search
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Position to search (FEN); the standard start position by default
    #[arg(long)]
    fen: Option<String>,

    /// Search depth in plies (overrides the settings file)
    #[arg(long)]
    depth: Option<u32>,

    /// JSON settings file
    #[arg(long, default_value = SETTINGS_FILENAME)]
    config: PathBuf,

    /// Transposition table slots, 0 disables the table
    #[arg(long)]
    tt_capacity: Option<usize>,

    /// Abort a search after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Number of plies the engine plays against itself
    #[arg(long, default_value_t = 1)]
    play: usize,

    /// Search the colour-flipped mirror of the position instead
    #[arg(long)]
    mirror: bool,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    save_config: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = load_settings(&args.config);
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(capacity) = args.tt_capacity {
        config.tt.capacity = capacity;
    }
    if args.time_limit_ms.is_some() {
        config.time_limit_ms = args.time_limit_ms;
    }
    if args.save_config {
        save_settings(&args.config, &config).context("saving settings")?;
    }

    let mut rules = match &args.fen {
        Some(fen) if args.mirror => ShakmatyRules::from_fen(&mirror_fen(fen)?)?,
        Some(fen) => ShakmatyRules::from_fen(fen)?,
        None if args.mirror => ShakmatyRules::from_fen(&mirror_fen(&ShakmatyRules::new().fen())?)?,
        None => ShakmatyRules::new(),
    };
    info!("[PLAY] Position {}", rules.fen());

    let depth = config.depth;
    let mut session = SearchSession::new(config);
    let played = self_play(&mut session, &mut rules, depth, args.play)
        .with_context(|| format!("searching {}", rules.fen()))?;

    for result in &played {
        let mate = result
            .mate_in
            .map(|plies| format!(" mate in {plies} plies"))
            .unwrap_or_default();
        println!(
            "{} score {}{} | depth {} | {} nodes | {} tt hits | {:?}",
            result.best_move,
            result.score,
            mate,
            result.depth,
            result.stats.nodes,
            result.stats.tt_hits,
            result.elapsed
        );
    }

    if rules.is_checkmate() {
        println!("checkmate, {} wins", rules.turn().opponent());
    } else if rules.is_draw() {
        println!("draw");
    }
    println!("{}", rules.fen());

    Ok(())
}
