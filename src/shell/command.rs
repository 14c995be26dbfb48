/*!
 * Command Parsing
 * Turns script lines into validated commands for the allocation core
 */

use crate::core::limits::{BLOCK_SIZE_SEPARATOR, COMMENT_MARKER};
use crate::core::types::{ProcessId, RawSize};
use crate::memory::Strategy;
use miette::Diagnostic;
use std::str::FromStr;
use thiserror::Error;

/// Command parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum CommandError {
    #[error("Empty command")]
    #[diagnostic(code(shell::empty))]
    Empty,

    #[error("Unknown command: {0}")]
    #[diagnostic(
        code(shell::unknown_command),
        help("Run `help` for the list of commands.")
    )]
    UnknownCommand(String),

    #[error("Missing {argument} for `{command}` (usage: {usage})")]
    #[diagnostic(code(shell::missing_argument))]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
        usage: &'static str,
    },

    #[error("Invalid {field}: {value:?} is not a number")]
    #[diagnostic(
        code(shell::invalid_number),
        help("Enter a whole number of kilobytes.")
    )]
    InvalidNumber { field: &'static str, value: String },

    #[error("Unknown strategy: {0}")]
    #[diagnostic(
        code(shell::unknown_strategy),
        help("Use one of first-fit, best-fit, worst-fit, next-fit.")
    )]
    UnknownStrategy(String),

    #[error("Unexpected argument {argument:?} for `{command}`")]
    #[diagnostic(code(shell::unexpected_argument))]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },
}

/// Output format for `show`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    Text,
    Json,
}

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Initialize { capacity: RawSize },
    Partition { sizes: Vec<RawSize> },
    Allocate {
        process_id: ProcessId,
        size: RawSize,
        strategy: Strategy,
    },
    Deallocate { process_id: ProcessId },
    Clear,
    Show { format: ShowFormat },
    Stats,
    Explain { strategy: Option<Strategy> },
    Help,
}

impl Command {
    /// Canonical command name, used for tracing
    pub fn name(&self) -> &'static str {
        match self {
            Command::Initialize { .. } => "memory",
            Command::Partition { .. } => "blocks",
            Command::Allocate { .. } => "alloc",
            Command::Deallocate { .. } => "free",
            Command::Clear => "clear",
            Command::Show { .. } => "show",
            Command::Stats => "stats",
            Command::Explain { .. } => "explain",
            Command::Help => "help",
        }
    }
}

const MEMORY_USAGE: &str = "memory <size-kb>";
const BLOCKS_USAGE: &str = "blocks <size>,<size>,...";
const ALLOC_USAGE: &str = "alloc <process-id> <size-kb> <first-fit|best-fit|worst-fit|next-fit>";
const FREE_USAGE: &str = "free <process-id>";

/// Command reference shown by `help`
pub const HELP_TEXT: &str = "\
Commands:
  memory <size-kb>                      initialize memory (resets everything)
  blocks <size>,<size>,...              partition memory into fixed blocks
  alloc <id> <size-kb> <strategy>       allocate a process (first-fit, best-fit, worst-fit, next-fit)
  free <id>                             deallocate a process
  clear                                 remove all blocks and processes
  show [json]                           display memory, blocks and processes
  stats                                 display memory statistics
  explain [strategy]                    describe placement strategies
  help                                  show this text
Lines starting with # are ignored.";

/// Whether a script line carries no command
pub fn is_blank(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}

/// Parse block sizes from comma-separated text.
///
/// Entries are trimmed; non-numeric and non-positive entries are dropped.
/// Order is preserved.
pub fn parse_block_sizes(text: &str) -> Vec<RawSize> {
    text.split(BLOCK_SIZE_SEPARATOR)
        .filter_map(|entry| entry.trim().parse::<RawSize>().ok())
        .filter(|&size| size > 0)
        .collect()
}

fn parse_number(field: &'static str, value: &str) -> Result<RawSize, CommandError> {
    value
        .trim()
        .parse::<RawSize>()
        .map_err(|_| CommandError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

fn parse_strategy(value: &str) -> Result<Strategy, CommandError> {
    value
        .parse::<Strategy>()
        .map_err(|e| CommandError::UnknownStrategy(e.0))
}

fn no_more_args<'a>(
    command: &'static str,
    mut args: impl Iterator<Item = &'a str>,
) -> Result<(), CommandError> {
    match args.next() {
        Some(extra) => Err(CommandError::UnexpectedArgument {
            command,
            argument: extra.to_string(),
        }),
        None => Ok(()),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(CommandError::Empty)?;

        match keyword.to_ascii_lowercase().as_str() {
            "memory" | "init" => {
                let value = words.next().ok_or(CommandError::MissingArgument {
                    command: "memory",
                    argument: "size",
                    usage: MEMORY_USAGE,
                })?;
                let capacity = parse_number("memory size", value)?;
                no_more_args("memory", words)?;
                Ok(Command::Initialize { capacity })
            }
            "blocks" | "partition" => {
                // Sizes may be written with spaces after the commas
                let rest: Vec<&str> = words.collect();
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "blocks",
                        argument: "block sizes",
                        usage: BLOCKS_USAGE,
                    });
                }
                Ok(Command::Partition {
                    sizes: parse_block_sizes(&rest.join(" ")),
                })
            }
            "alloc" | "allocate" => {
                let missing = |argument| CommandError::MissingArgument {
                    command: "alloc",
                    argument,
                    usage: ALLOC_USAGE,
                };
                let process_id = words.next().ok_or_else(|| missing("process id"))?;
                let size = words.next().ok_or_else(|| missing("size"))?;
                let strategy = words.next().ok_or_else(|| missing("strategy"))?;
                let size = parse_number("process size", size)?;
                let strategy = parse_strategy(strategy)?;
                no_more_args("alloc", words)?;
                Ok(Command::Allocate {
                    process_id: process_id.to_string(),
                    size,
                    strategy,
                })
            }
            "free" | "dealloc" | "remove" => {
                let process_id = words.next().ok_or(CommandError::MissingArgument {
                    command: "free",
                    argument: "process id",
                    usage: FREE_USAGE,
                })?;
                no_more_args("free", words)?;
                Ok(Command::Deallocate {
                    process_id: process_id.to_string(),
                })
            }
            "clear" | "reset" => {
                no_more_args("clear", words)?;
                Ok(Command::Clear)
            }
            "show" => {
                let format = match words.next() {
                    None | Some("text") => ShowFormat::Text,
                    Some("json") => ShowFormat::Json,
                    Some(other) => {
                        return Err(CommandError::UnexpectedArgument {
                            command: "show",
                            argument: other.to_string(),
                        })
                    }
                };
                no_more_args("show", words)?;
                Ok(Command::Show { format })
            }
            "stats" => {
                no_more_args("stats", words)?;
                Ok(Command::Stats)
            }
            "explain" => {
                let strategy = words.next().map(parse_strategy).transpose()?;
                no_more_args("explain", words)?;
                Ok(Command::Explain { strategy })
            }
            "help" | "?" => Ok(Command::Help),
            _ => Err(CommandError::UnknownCommand(keyword.to_string())),
        }
    }
}
