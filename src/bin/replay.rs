use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::warn;
use peg_solitaire::config::parse_mask;
use peg_solitaire::{BoardState, Solution};

#[derive(Parser, Debug)]
#[command(name = "replay")]
#[command(about = "Replay solver output and show the board after every jump")]
struct Cli {
    /// Start board as a hole bitmask (decimal, 0b or 0x); 0 fills every hole but the apex
    #[arg(long, default_value = "0", value_parser = parse_mask)]
    start: u32,

    /// Only print one verdict per line, no boards
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Lines such as "(9->E)(0->9)..."; read from stdin when none are given
    lines: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let start = BoardState::from_raw(cli.start);

    let lines: Vec<String> = if cli.lines.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<_>>()
            .context("failed to read stdin")?
    } else {
        cli.lines
    };

    let mut failures = 0usize;
    for (n, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let solution: Solution = line
            .parse()
            .with_context(|| format!("line {}: cannot parse '{line}'", n + 1))?;

        let states = match solution.replay(start) {
            Ok(states) => states,
            Err(e) => {
                warn!("line {}: {e}", n + 1);
                println!("{line}: illegal ({e})");
                failures += 1;
                continue;
            }
        };

        if !cli.quiet {
            print!("{}", states[0]);
            for (mv, state) in solution.moves().iter().zip(&states[1..]) {
                println!("{mv}");
                print!("{state}");
            }
        }

        let solved = states.last().is_some_and(|s| s.is_winner());
        println!("{line}: {}", if solved { "solved" } else { "not solved" });
        if !solved {
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{failures} line(s) did not solve the board");
    }
    Ok(())
}
