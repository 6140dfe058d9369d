use crate::error::{Error, Result};
use crate::position::HOLES;
use crate::state::BoardState;

/// Solver run configuration (command line only, no config files).
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    pub start: BoardState,

    /// Report tree statistics after the solution list.
    pub print_stats: bool,
}

impl SolverConfig {
    pub fn new(start_mask: u32, print_stats: bool) -> Self {
        Self {
            start: BoardState::from_raw(start_mask),
            print_stats,
        }
    }
}

/// Parses a start mask written in decimal, `0b` binary or `0x` hex.
///
/// Underscores are allowed as digit separators. `0` selects the common start.
pub fn parse_mask(input: &str) -> Result<u32> {
    let cleaned: String = input.trim().chars().filter(|&c| c != '_').collect();
    let parsed = if let Some(bin) = cleaned
        .strip_prefix("0b")
        .or_else(|| cleaned.strip_prefix("0B"))
    {
        u32::from_str_radix(bin, 2)
    } else if let Some(hex) = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)
    } else {
        cleaned.parse::<u32>()
    };

    let mask = parsed.map_err(|e| Error::InvalidStartMask {
        input: input.to_string(),
        reason: e.to_string(),
    })?;

    if mask >> HOLES != 0 {
        return Err(Error::InvalidStartMask {
            input: input.to_string(),
            reason: format!("only bits 0-{} name holes", HOLES - 1),
        });
    }
    Ok(mask)
}
