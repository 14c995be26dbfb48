/*!
 * Placement Simulator - Main Entry Point
 *
 * Reads allocation commands from a script file or stdin and prints the
 * resulting memory layout. Failed commands are reported on stderr and the
 * exit status is non-zero if any command failed.
 */

use miette::Report;
use placement_sim::{init_tracing, MemoryManager, Session, SimulatorConfig, SimulatorError};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::info;

fn report(line: usize, error: &SimulatorError) {
    eprintln!("line {}: {:?}", line, Report::new(error.clone()));
}

fn main() -> miette::Result<ExitCode> {
    let config = SimulatorConfig::load();
    init_tracing(config.trace_json, &config.log_level);

    info!(?config, "Placement simulator starting");

    let manager = match config.capacity {
        Some(capacity) => MemoryManager::with_capacity(capacity)?,
        None => MemoryManager::new(),
    };
    let mut session = Session::with_manager(manager, config.bar_width);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = match &config.script {
        Some(path) => session.run_path(path, &mut out, config.fail_fast, report)?,
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("Reading commands from stdin (type `help`, Ctrl-D to finish)");
            }
            session.run_script(stdin.lock(), &mut out, config.fail_fast, report)?
        }
    };

    info!(
        executed = summary.executed,
        failed = summary.failed,
        "Placement simulator finished"
    );

    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
