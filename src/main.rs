use anyhow::{Context, Result, bail};
use clap::Parser;
use sliding_puzzle_solver::{
    Board, Outcome, SolveResult, Solver, format_moves, solver::DEFAULT_MAX_STATES,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::{
    io::{IsTerminal, Read, stdin},
    path::PathBuf,
    process::ExitCode,
    time::Duration,
};

const INPUT_HELP: &str = "The board is read once, from TILES, --file or stdin. \
Invalid input exits with an error; rerun with a corrected board.";

#[derive(Parser)]
#[command(author, version, about, after_help = INPUT_HELP)]
struct Cli {
    /// Side length of the board (inferred from the tile count by default)
    #[arg(short = 'n', long, value_name = "N")]
    size: Option<usize>,
    /// Goal arrangement, e.g. "1,2,3,4,5,6,7,8,0" (ascending with the blank last by default)
    #[arg(short, long, value_name = "TILES")]
    goal: Option<String>,
    /// Max states to discover before giving up
    #[arg(short = 's', long, default_value_t = DEFAULT_MAX_STATES, value_name = "NUM")]
    max_states: usize,
    /// Preview the initial board without solving
    #[arg(short, long)]
    preview: bool,
    /// Print only the moves
    #[arg(short, long)]
    quiet: bool,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Path to a file holding the board
    #[arg(short, long, conflicts_with = "tiles")]
    file: Option<PathBuf>,
    /// Tiles of the board row by row, 0 for the blank (e.g. 1 2 3 4 5 6 0 7 8)
    tiles: Vec<String>,
}

fn main() -> Result<ExitCode> {
    let Cli {
        size,
        goal,
        max_states,
        preview,
        quiet,
        verbose,
        file,
        tiles,
    } = Cli::parse();
    init_tracing(verbose);

    let content = if let Some(file) = file {
        std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read '{}'", file.display()))?
    } else if !tiles.is_empty() {
        tiles.join(" ")
    } else if !stdin().is_terminal() {
        let mut content = String::new();
        stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        content
    } else {
        bail!("No board `tiles`, `--file` or stdin provided.");
    };

    let board = parse_board(&content, size).context("Failed to parse board")?;
    if preview {
        println!("{}", board.to_pretty_string());
        return Ok(ExitCode::SUCCESS);
    }

    let goal = match goal {
        Some(goal) => parse_board(&goal, Some(board.side())).context("Failed to parse goal")?,
        None => Board::goal(board.side())?,
    };
    let result = Solver::new(goal)
        .with_max_states(max_states)
        .solve(board.clone())?;
    info!(
        states = result.states,
        expanded = result.expanded,
        elapsed = ?result.elapsed,
        "search finished"
    );

    Ok(report(&board, &result, quiet))
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn parse_board(content: &str, size: Option<usize>) -> Result<Board> {
    let board = match size {
        Some(side) => Board::parse_with_side(content, side)?,
        None => Board::parse(content)?,
    };
    Ok(board)
}

fn report(board: &Board, result: &SolveResult, quiet: bool) -> ExitCode {
    let SolveResult {
        outcome,
        states,
        elapsed,
        ..
    } = result;
    let elapsed = format_elapsed(*elapsed);
    match outcome {
        Outcome::Solved(path) => {
            let moves = path.moves();
            if quiet {
                print!("{}", format_moves(&moves));
                return ExitCode::SUCCESS;
            }
            println!("{}\n", board.to_pretty_string());
            println!(
                "✓ Solved in {} Moves — Time: {elapsed}, States: {states}\n",
                moves.len()
            );
            for (i, step) in path.iter().enumerate() {
                match i.checked_sub(1).map(|prev| moves[prev]) {
                    Some(dir) => println!("Step {i}: {dir}"),
                    None => println!("Step {i}:"),
                }
                println!("{}\n", step.to_pretty_string());
            }
            print!("{}", format_moves(&moves));
            ExitCode::SUCCESS
        }
        Outcome::Exhausted(reason) => {
            if !quiet {
                println!("{}\n", board.to_pretty_string());
            }
            eprintln!("✗ No solution — {reason}. Time: {elapsed}, States: {states}");
            ExitCode::FAILURE
        }
    }
}

fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs == 0 {
        format!("{}ms", elapsed.as_millis())
    } else if secs < 90 {
        format!("{secs}.{:03}s", elapsed.subsec_millis())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
