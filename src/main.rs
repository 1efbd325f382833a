// Shortest-solution finder for rolling sausage puzzles, plus an interactive terminal mode.
// Controls in play mode: W/S or up/down to step forward/back, A/D or left/right to turn. Q to quit.
// Layout tiles: 'L' floor, 'G' grill, ' ' void.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sausage_solver::console_interface::ConsoleInput::*;
use sausage_solver::console_interface::{
    cleanup_terminal, handle_input, render_game, render_solution_to_string, setup_terminal,
};
use sausage_solver::core::GameState;
use sausage_solver::levels::{builtin_level, Level};
use sausage_solver::models::GameRenderState;
use sausage_solver::search::{
    solution_to_json, SearchConfig, SearchEngine, SearchOutcome, DEFAULT_PROGRESS_INTERVAL,
};
use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Solve,
    Play,
}

#[derive(Parser, Debug)]
#[command(name = "sausage-solver", about = "Find the shortest solution to a rolling sausage puzzle")]
struct Args {
    #[arg(value_enum, default_value_t = Mode::Solve)]
    mode: Mode,

    /// Built-in level to load
    #[arg(long, default_value = "pos1")]
    level: String,

    /// JSON level description; takes precedence over --level
    #[arg(long)]
    level_file: Option<PathBuf>,

    /// Give up after dequeuing this many states
    #[arg(long)]
    max_states: Option<usize>,

    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: usize,

    /// Write the solution as JSON to this path
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let level = match &args.level_file {
        Some(path) => Level::load(path)?,
        None => builtin_level(&args.level)?,
    };
    info!(level = %level.name, mode = ?args.mode, "loaded level");

    let grid = level.build_grid();
    let start = level.initial_state(&grid)?;

    match args.mode {
        Mode::Solve => {
            let config = SearchConfig {
                progress_interval: args.progress_interval,
                max_states: args.max_states,
            };
            run_solve(start, config, args.export.as_ref())?;
        }
        Mode::Play => {
            let mut terminal = setup_terminal()?;
            let result = run_interactive(start, &mut terminal);
            cleanup_terminal()?;
            result?;
        }
    }

    Ok(())
}

fn run_solve(
    start: GameState,
    config: SearchConfig,
    export: Option<&PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = std::time::Instant::now();
    let mut engine = SearchEngine::new(config);
    let outcome = engine.run(start);
    let stats = engine.stats();
    info!(
        elapsed = ?start_time.elapsed(),
        discovered = stats.discovered,
        dequeued = stats.dequeued,
        discarded = stats.discarded,
        max_depth = stats.max_depth,
        "search finished"
    );

    match outcome {
        SearchOutcome::Solved(solution) => {
            println!("Found for {} moves", solution.depth);
            print!("{}", render_solution_to_string(&solution));
            if let Some(path) = export {
                std::fs::write(path, solution_to_json(&solution)?)?;
                info!(path = %path.display(), "solution exported");
            }
        }
        SearchOutcome::NoSolution => {
            println!("No solution");
        }
        SearchOutcome::BudgetExhausted => {
            warn!(max_states = ?config.max_states, "gave up before finding a solution");
            println!("No solution within {} states", stats.dequeued);
        }
    }

    Ok(())
}

fn run_interactive(
    start: GameState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut render_state = GameRenderState {
        won: start.is_winning(),
        lost: start.is_losing(),
        game: start,
        moves: 0,
        last_action: None,
    };
    render_game(terminal, &render_state)?;

    loop {
        match handle_input() {
            Ok(Quit) => break,
            Ok(PlayerAction(action)) => {
                let next = render_state.game.apply(action);
                render_state = GameRenderState {
                    won: next.is_winning() && !next.is_losing(),
                    lost: next.is_losing(),
                    game: next,
                    moves: render_state.moves + 1,
                    last_action: Some(action),
                };
                render_game(terminal, &render_state)?;

                if render_state.won || render_state.lost {
                    // Keep showing the final screen until user inputs
                    loop {
                        match handle_input() {
                            Ok(Timeout) => {}
                            Ok(_) => break,
                            Err(err) => {
                                error!(%err, "error reading input");
                                break;
                            }
                        }
                    }
                    break;
                }
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(err) => {
                error!(%err, "error reading input");
                break;
            }
        }
    }

    Ok(())
}
