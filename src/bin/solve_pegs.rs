use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use peg_solitaire::config::{parse_mask, SolverConfig};
use peg_solitaire::Tree;

#[derive(Parser, Debug)]
#[command(name = "solve_pegs")]
#[command(version, about = "List every winning line of the 15-hole triangle peg solitaire")]
struct Cli {
    /// Start board as a hole bitmask (decimal, 0b or 0x); 0 fills every hole but the apex
    #[arg(long, default_value = "0", value_parser = parse_mask)]
    start: u32,

    /// Print node, leaf and winner counts and the tree height to stderr
    #[arg(long, default_value_t = false)]
    stats: bool,

    /// Extra arguments, flags included, are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

/// Every winning line, then one empty line, matching a `println` of the list.
fn write_solutions<W: Write>(out: &mut W, tree: &Tree) -> io::Result<()> {
    writeln!(out, "{}", tree.find_winners())?;
    out.flush()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    if !cli.rest.is_empty() {
        info!("ignoring arguments: {:?}", cli.rest);
    }
    let config = SolverConfig::new(cli.start, cli.stats);

    info!("start board:\n{}", config.start);
    let tree = Tree::new(config.start);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_solutions(&mut out, &tree).context("failed to write solutions")?;

    if config.print_stats {
        let stats = tree.stats();
        eprintln!("Nodes: {}", stats.nodes);
        eprintln!("Leaves: {}", stats.leaves);
        eprintln!("Winners: {}", stats.winners);
        eprintln!("Height: {}", stats.height);
    }
    Ok(())
}
