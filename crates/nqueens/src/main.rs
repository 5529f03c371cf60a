//! CLI entry point for the N-Queens enumerator.
//!
//! Usage:
//!   nqueens solve [SIZE] [options]
//!   nqueens verify <result.json>
//!   nqueens verify --stdin
//!
//! Solve options:
//!   --timing           Append elapsed milliseconds to the summary
//!   --print            Dump every solution grid
//!   --json             Emit a JSON summary instead of text
//!   --check            Re-verify each solution independently
//!   --timeout <secs>   Stop the search after this many seconds
//!
//! `verify` reads the document written by `solve --json --print` and checks
//! every board in its `solutions` array.
//!
//! Exit status: 0 on success, 1 when a board fails verification, 2 on
//! unusable input. Set `RUST_LOG=debug` to log each solution as it is found.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use log::error;
use serde::{Deserialize, Serialize};

use nqueens::{find_solutions_with, validate_size, verify_solution, Board, Solutions, SolverConfig};

const EXIT_OK: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_USAGE: i32 = 2;

#[derive(Parser)]
#[command(name = "nqueens")]
#[command(about = "Enumerate every solution to the N-Queens problem")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find all placements of N non-attacking queens on an N×N board
    Solve(SolveArgs),

    /// Check the boards in a JSON result written by `solve --json --print`
    Verify {
        /// Path to result JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read the result from stdin instead of a file
        #[arg(long)]
        stdin: bool,
    },
}

#[derive(Args, Debug, Default)]
struct SolveArgs {
    /// Board size
    #[arg(default_value = "8", allow_negative_numbers = true)]
    size: i64,

    /// Append elapsed time to the summary line
    #[arg(long)]
    timing: bool,

    /// Print every solution grid
    #[arg(long)]
    print: bool,

    /// Output the result as JSON
    #[arg(long)]
    json: bool,

    /// Verify every solution independently of the search
    #[arg(long)]
    check: bool,

    /// Maximum search time in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

/// Output format for the JSON summary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput<'a> {
    size: usize,
    visited: usize,
    solution_count: usize,
    search_exhausted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_elapsed_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    solutions: Option<&'a [Board]>,
}

/// The part of a JSON summary that `verify` reads back
#[derive(Debug, Deserialize)]
struct VerifyInput {
    solutions: Vec<Board>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    process::exit(run(cli.command));
}

/// Execute one subcommand and return the process exit status
fn run(command: Commands) -> i32 {
    match command {
        Commands::Solve(args) => run_solve(&args),
        Commands::Verify { file, stdin } => {
            let json_content = if stdin {
                let mut buffer = String::new();
                if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                    eprintln!("Error: failed to read from stdin: {}", e);
                    return EXIT_USAGE;
                }
                buffer
            } else if let Some(path) = file {
                match fs::read_to_string(&path) {
                    Ok(text) => text,
                    Err(e) => {
                        eprintln!("Error: failed to read file {:?}: {}", path, e);
                        return EXIT_USAGE;
                    }
                }
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                return EXIT_USAGE;
            };

            run_verify(&json_content)
        }
    }
}

fn run_solve(args: &SolveArgs) -> i32 {
    let size = match validate_size(args.size) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_USAGE;
        }
    };

    let config = SolverConfig {
        timeout: args.timeout.map(Duration::from_secs),
    };

    let result = match find_solutions_with(size, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_USAGE;
        }
    };

    if args.json {
        let output = format_json(size, &result, args.timing, args.print);
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error serializing result: {}", e);
                return EXIT_INVALID;
            }
        }
    } else {
        println!("{}", format_summary(&result, args.timing));
        if args.print {
            for board in &result.solutions {
                println!();
                print!("{}", board);
            }
        }
    }

    if args.check && !check_solutions(&result.solutions) {
        return EXIT_INVALID;
    }
    EXIT_OK
}

fn run_verify(json_content: &str) -> i32 {
    let input: VerifyInput = match serde_json::from_str(json_content) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Error parsing result JSON: {}", e);
            return EXIT_USAGE;
        }
    };

    let valid = check_solutions(&input.solutions);
    println!("{} boards checked", input.solutions.len());
    if valid {
        EXIT_OK
    } else {
        EXIT_INVALID
    }
}

fn format_summary(result: &Solutions, timing: bool) -> String {
    let mut line = format!("{} - {}", result.visited, result.count());
    if timing {
        line.push_str(&format!(" ({}ms)", result.time_elapsed_ms));
    }
    line
}

fn format_json(size: usize, result: &Solutions, timing: bool, print: bool) -> SolveOutput<'_> {
    SolveOutput {
        size,
        visited: result.visited,
        solution_count: result.count(),
        search_exhausted: result.search_exhausted,
        time_elapsed_ms: timing.then_some(result.time_elapsed_ms),
        solutions: print.then_some(result.solutions.as_slice()),
    }
}

fn check_solutions(boards: &[Board]) -> bool {
    let mut ok = true;
    for (i, board) in boards.iter().enumerate() {
        if let Err(conflict) = verify_solution(board) {
            error!("Solution #{} is invalid: {}", i + 1, conflict);
            ok = false;
        }
    }
    ok
}
