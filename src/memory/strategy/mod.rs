/*!
 * Placement Strategies
 *
 * Four classic fixed-partition placement policies behind one closed enum.
 * Every strategy scans only free blocks whose size covers the request and
 * never splits, merges or resizes a block.
 *
 * | Strategy  | Picks                                   | Ties          |
 * |-----------|-----------------------------------------|---------------|
 * | First Fit | lowest index                            | n/a           |
 * | Best Fit  | smallest adequate block                 | lowest index  |
 * | Worst Fit | largest adequate block                  | lowest index  |
 * | Next Fit  | first match after the cursor, wrapping  | scan order    |
 */

mod best_fit;
mod first_fit;
mod next_fit;
mod worst_fit;

use super::traits::PlacementPolicy;
use super::types::MemoryBlock;
use crate::core::types::{BlockIndex, Size};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Block placement strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    FirstFit,
    BestFit,
    WorstFit,
    NextFit,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::FirstFit,
        Strategy::BestFit,
        Strategy::WorstFit,
        Strategy::NextFit,
    ];

    /// Canonical command tag
    pub fn tag(&self) -> &'static str {
        match self {
            Strategy::FirstFit => "first-fit",
            Strategy::BestFit => "best-fit",
            Strategy::WorstFit => "worst-fit",
            Strategy::NextFit => "next-fit",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Strategy::FirstFit => "First Fit",
            Strategy::BestFit => "Best Fit",
            Strategy::WorstFit => "Worst Fit",
            Strategy::NextFit => "Next Fit",
        }
    }

    /// How the algorithm works, for the `explain` command
    pub fn describe(&self) -> StrategyDescription {
        match self {
            Strategy::FirstFit => StrategyDescription {
                summary: "Places the process in the first block large enough to hold it.",
                points: &[
                    "Scans from the start of memory",
                    "Stops at the first block that is large enough",
                    "Fast allocation",
                    "Tends to leave small fragments near the start of memory",
                ],
            },
            Strategy::BestFit => StrategyDescription {
                summary: "Places the process in the smallest block large enough to hold it.",
                points: &[
                    "Scans every block",
                    "Chooses the block that wastes the least space",
                    "Minimizes fragmentation per allocation",
                    "Leaves tiny leftover fragments scattered through memory",
                ],
            },
            Strategy::WorstFit => StrategyDescription {
                summary: "Places the process in the largest available block.",
                points: &[
                    "Scans every block",
                    "Chooses the largest free block",
                    "Leftover space is more likely to fit later processes",
                    "Can use memory poorly over time",
                ],
            },
            Strategy::NextFit => StrategyDescription {
                summary: "Like First Fit, but resumes scanning after the last allocation.",
                points: &[
                    "Continues from where the previous search succeeded",
                    "Spreads allocations more evenly across memory",
                    "Can beat First Fit when the start of memory is crowded",
                    "Still subject to fragmentation",
                ],
            },
        }
    }
}

impl PlacementPolicy for Strategy {
    fn select_block(
        &self,
        blocks: &[MemoryBlock],
        size: Size,
        cursor: Option<BlockIndex>,
    ) -> Option<BlockIndex> {
        match self {
            Strategy::FirstFit => first_fit::select(blocks, size),
            Strategy::BestFit => best_fit::select(blocks, size),
            Strategy::WorstFit => worst_fit::select(blocks, size),
            Strategy::NextFit => next_fit::select(blocks, size, cursor),
        }
    }

    fn advances_cursor(&self) -> bool {
        matches!(self, Strategy::NextFit)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Unrecognized strategy tag
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy {0:?}")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "first-fit" | "firstfit" | "first" | "ff" => Ok(Strategy::FirstFit),
            "best-fit" | "bestfit" | "best" | "bf" => Ok(Strategy::BestFit),
            "worst-fit" | "worstfit" | "worst" | "wf" => Ok(Strategy::WorstFit),
            "next-fit" | "nextfit" | "next" | "nf" => Ok(Strategy::NextFit),
            _ => Err(UnknownStrategy(s.trim().to_string())),
        }
    }
}

/// Human-readable explanation of a strategy
#[derive(Debug, Clone, Copy)]
pub struct StrategyDescription {
    pub summary: &'static str,
    pub points: &'static [&'static str],
}

impl StrategyDescription {
    /// All strategies scan the block list once
    pub const COMPLEXITY: &'static str = "O(n) where n is the number of memory blocks";
}
