/*!
 * Configuration
 * Command-line flags with environment variable fallbacks
 */

use crate::core::limits::{DEFAULT_BAR_WIDTH, MAX_BAR_WIDTH, MIN_BAR_WIDTH};
use crate::core::types::RawSize;
use clap::builder::{BoolishValueParser, TypedValueParser};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Fixed-partition memory allocation simulator
#[derive(Parser, Debug, Clone)]
#[command(name = "placement-sim", version, about)]
pub struct SimulatorConfig {
    /// Command script to execute (reads stdin when omitted)
    #[arg(long, short = 's', env = "PLACEMENT_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Initialize memory with this many KB before running the script
    #[arg(long, short = 'c', env = "PLACEMENT_MEMORY_KB")]
    pub capacity: Option<RawSize>,

    /// Width of the text memory bar
    #[arg(
        long,
        env = "PLACEMENT_BAR_WIDTH",
        default_value_t = DEFAULT_BAR_WIDTH,
        value_parser = clap::value_parser!(u16)
            .range(MIN_BAR_WIDTH as i64..=MAX_BAR_WIDTH as i64)
            .map(usize::from)
    )]
    pub bar_width: usize,

    /// Stop at the first failing command
    #[arg(
        long,
        env = "PLACEMENT_FAIL_FAST",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub fail_fast: bool,

    /// Emit logs as JSON
    #[arg(
        long,
        env = "PLACEMENT_TRACE_JSON",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub trace_json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl SimulatorConfig {
    /// Parse from the process arguments and environment
    pub fn load() -> Self {
        Self::parse()
    }
}
