use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{info, warn, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use snake_engine::config::parse_speed;
use snake_engine::{ConfigError, Direction, Engine, EngineConfig, RngSource, Snapshot};
use thiserror::Error;

/// Runs the snake engine headlessly from a scripted list of turns.
#[derive(Debug, Parser)]
#[command(name = "snake-sim", version)]
struct Cli {
    /// JSON file with `cols`, `rows`, `wrap` and `speed`; flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in cells.
    #[arg(long)]
    cols: Option<u16>,

    /// Board height in cells.
    #[arg(long)]
    rows: Option<u16>,

    /// Wrap around the board edges instead of ending on a wall hit.
    #[arg(long)]
    wrap: bool,

    /// Steps-per-second hint; non-numeric values fall back to 8.
    #[arg(long)]
    speed: Option<String>,

    /// Seed for food placement. Omit for OS randomness.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of steps to run.
    #[arg(long, default_value_t = 100)]
    steps: u64,

    /// Turn script, one entry per step: U/D/L/R or ^ v < >, `.` to go straight.
    #[arg(long, default_value = "")]
    moves: String,

    /// Print every snapshot as a JSON line.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown move {symbol:?} at position {index} in move script")]
    BadMove { symbol: char, index: usize },

    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("snake-sim: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    if let Err(err) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("snake-sim: logging disabled: {err}");
    }
}

fn run(cli: &Cli) -> Result<(), SimError> {
    let config = resolve_config(cli)?;
    let moves = parse_moves(&cli.moves)?;

    let mut engine = match cli.seed {
        Some(seed) => Engine::with_rng(config, RngSource::seeded(seed)),
        None => Engine::new(config),
    };
    info!("{}", describe_run(&engine));

    let mut last = engine.snapshot();
    if cli.json {
        println!("{}", serde_json::to_string(&last)?);
    }

    for step in 0..cli.steps {
        let index = usize::try_from(step).unwrap_or(usize::MAX);
        if let Some(Some(direction)) = moves.get(index) {
            engine.set_direction_to(*direction);
        }

        last = engine.tick();
        if cli.json {
            println!("{}", serde_json::to_string(&last)?);
        }

        if last.over {
            break;
        }
    }

    if !cli.json {
        print_summary(&engine, &last);
    }

    Ok(())
}

fn describe_run(engine: &Engine) -> String {
    let bounds = engine.bounds();
    format!(
        "starting {}x{} run (wrap: {}, step interval {:?})",
        bounds.width,
        bounds.height,
        engine.wrap(),
        engine.step_interval()
    )
}

fn resolve_config(cli: &Cli) -> Result<EngineConfig, SimError> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_json_path(path)?,
        None => EngineConfig::default(),
    };

    if let Some(cols) = cli.cols {
        config.cols = cols;
    }
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if cli.wrap {
        config.wrap = true;
    }
    if let Some(speed) = &cli.speed {
        config.speed = parse_speed(speed);
    }
    if config.cols == 0 || config.rows == 0 {
        warn!("zero board dimension raised to one cell");
    }

    Ok(config)
}

fn parse_moves(script: &str) -> Result<Vec<Option<Direction>>, SimError> {
    script
        .chars()
        .filter(|symbol| !symbol.is_whitespace())
        .enumerate()
        .map(|(index, symbol)| match symbol {
            '.' => Ok(None),
            other => Direction::from_key(other)
                .map(Some)
                .ok_or(SimError::BadMove { symbol, index }),
        })
        .collect()
}

fn print_summary(engine: &Engine, snapshot: &Snapshot) {
    let outcome = match engine.collision() {
        Some(collision) => format!("game over ({collision:?})"),
        None if snapshot.board_full() => "board full".to_owned(),
        None => "running".to_owned(),
    };

    println!("status:    {outcome}");
    println!("steps:     {}", engine.steps());
    println!("score:     {}", snapshot.score);
    println!("length:    {}", snapshot.len());
    println!("direction: {:?}", snapshot.direction);
    match snapshot.head() {
        Some(head) => println!("head:      ({}, {})", head.x, head.y),
        None => println!("head:      -"),
    }
    match snapshot.food {
        Some(food) => println!("food:      ({}, {})", food.x, food.y),
        None => println!("food:      -"),
    }
}
