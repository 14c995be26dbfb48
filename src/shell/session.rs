/*!
 * Shell Session
 * Executes commands one at a time against a single memory manager
 */

use super::command::{is_blank, Command, ShowFormat, HELP_TEXT};
use super::render;
use crate::core::errors::{SimResult, SimulatorError};
use crate::core::limits::{DEFAULT_BAR_WIDTH, MAX_BAR_WIDTH, MIN_BAR_WIDTH};
use crate::memory::{MemoryManager, Strategy};
use crate::monitoring::span_command;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

/// Result of running a script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Commands executed, successful or not
    pub executed: usize,
    pub failed: usize,
    /// Set when fail-fast stopped the script early
    pub aborted: bool,
}

impl ScriptSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Interactive or scripted simulator session
#[derive(Debug)]
pub struct Session {
    manager: MemoryManager,
    bar_width: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::with_manager(MemoryManager::new(), DEFAULT_BAR_WIDTH)
    }

    pub fn with_manager(manager: MemoryManager, bar_width: usize) -> Self {
        Self {
            manager,
            bar_width: bar_width.clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH),
        }
    }

    pub fn manager(&self) -> &MemoryManager {
        &self.manager
    }

    pub fn bar_width(&self) -> usize {
        self.bar_width
    }

    /// Execute one command and return the text to display
    pub fn execute(&mut self, command: Command) -> SimResult<String> {
        match command {
            Command::Initialize { capacity } => {
                self.manager.initialize(capacity)?;
                Ok(format!(
                    "Memory initialized with size {} KB",
                    self.manager.capacity()
                ))
            }
            Command::Partition { sizes } => {
                let blocks = self.manager.define_partition(&sizes)?;
                let total: u64 = blocks.iter().map(|b| b.size).sum();
                let count = blocks.len();
                Ok(format!(
                    "Created {} memory blocks ({} KB of {} KB)\n{}",
                    count,
                    total,
                    self.manager.capacity(),
                    render::memory_bar(
                        self.manager.capacity(),
                        self.manager.blocks(),
                        self.bar_width
                    )
                ))
            }
            Command::Allocate {
                process_id,
                size,
                strategy,
            } => {
                let process_id = process_id.trim();
                let allocation = self.manager.allocate(process_id, size, strategy)?;
                Ok(render::allocation_line(
                    process_id,
                    size as u64,
                    strategy,
                    &allocation,
                ))
            }
            Command::Deallocate { process_id } => {
                let process_id = process_id.trim();
                Ok(match self.manager.deallocate(process_id) {
                    Some(process) => format!(
                        "Deallocated process {} from block {}",
                        process.id, process.block_index
                    ),
                    None => format!("No process {}; nothing to free", process_id),
                })
            }
            Command::Clear => {
                self.manager.reset();
                Ok(String::from("Cleared all memory blocks and processes"))
            }
            Command::Show {
                format: ShowFormat::Text,
            } => Ok(render::memory_view(&self.manager, self.bar_width)),
            Command::Show {
                format: ShowFormat::Json,
            } => Ok(serde_json::to_string_pretty(&self.manager.snapshot())?),
            Command::Stats => Ok(render::stats_view(&self.manager.stats())),
            Command::Explain { strategy } => Ok(match strategy {
                Some(strategy) => render::explanation(strategy),
                None => Strategy::ALL
                    .iter()
                    .map(|&s| render::explanation(s))
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            }),
            Command::Help => Ok(HELP_TEXT.to_string()),
        }
    }

    /// Parse and execute a single line; blank and comment lines yield `None`
    pub fn execute_line(&mut self, line: &str) -> SimResult<Option<String>> {
        if is_blank(line) {
            return Ok(None);
        }
        let command: Command = line.parse()?;
        self.execute(command).map(Some)
    }

    /// Run every command from `reader`, writing output to `out`.
    ///
    /// Command failures are handed to `on_error` with their 1-based line
    /// number; only I/O failures abort with an error.
    pub fn run_script<R, W, F>(
        &mut self,
        reader: R,
        out: &mut W,
        fail_fast: bool,
        mut on_error: F,
    ) -> SimResult<ScriptSummary>
    where
        R: BufRead,
        W: Write,
        F: FnMut(usize, &SimulatorError),
    {
        let mut summary = ScriptSummary::default();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = number + 1;
            if is_blank(&line) {
                continue;
            }

            let keyword = line.split_whitespace().next().unwrap_or_default();
            let span = span_command(keyword, line_no);
            let _entered = span.enter();
            summary.executed += 1;

            match self.execute_line(&line) {
                Ok(Some(output)) => {
                    span.record_result(true);
                    writeln!(out, "{}", output)?;
                }
                Ok(None) => {}
                Err(e) => {
                    span.record_error(&e.to_string());
                    summary.failed += 1;
                    on_error(line_no, &e);
                    if fail_fast {
                        debug!(line = line_no, "Stopping script after failure");
                        summary.aborted = true;
                        break;
                    }
                }
            }
        }

        out.flush()?;
        info!(
            executed = summary.executed,
            failed = summary.failed,
            aborted = summary.aborted,
            "Script finished"
        );
        Ok(summary)
    }

    /// Run a script file
    pub fn run_path<W, F>(
        &mut self,
        path: &Path,
        out: &mut W,
        fail_fast: bool,
        on_error: F,
    ) -> SimResult<ScriptSummary>
    where
        W: Write,
        F: FnMut(usize, &SimulatorError),
    {
        let file = File::open(path)?;
        self.run_script(BufReader::new(file), out, fail_fast, on_error)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
