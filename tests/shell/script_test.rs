/*!
 * Script Tests
 * End-to-end runs of command scripts through a session
 */

use placement_sim::{Session, SimulatorError, Strategy};
use pretty_assertions::assert_eq;
use std::io::Write;

const DEMO_SCRIPT: &str = "\
# Classic textbook partition
memory 1700
blocks 100, 500, 200, 300, 600

alloc P1 212 first-fit
alloc P2 417 best-fit
alloc P3 112 worst-fit
alloc P4 150 next-fit
show
stats
";

fn run(script: &str) -> (Session, String, Vec<(usize, String)>) {
    let mut session = Session::new();
    let mut out = Vec::new();
    let mut errors = Vec::new();
    session
        .run_script(script.as_bytes(), &mut out, false, |line, e| {
            errors.push((line, e.to_string()))
        })
        .unwrap();
    (session, String::from_utf8(out).unwrap(), errors)
}

#[test]
fn test_demo_script_runs_clean() {
    let (session, output, errors) = run(DEMO_SCRIPT);
    assert_eq!(errors, vec![]);

    let placed: Vec<(String, usize)> = session
        .manager()
        .processes()
        .iter()
        .map(|p| (p.id.clone(), p.block_index))
        .collect();
    assert_eq!(
        placed,
        vec![
            ("P1".to_string(), 1),
            ("P2".to_string(), 4),
            ("P3".to_string(), 3),
            ("P4".to_string(), 2),
        ]
    );
    assert_eq!(session.manager().cursor(), Some(2));

    assert!(output.contains("Allocated process P1 (212 KB) to block 1 using First Fit"));
    assert!(output.contains("Memory: 1700 KB"));
    assert!(output.contains("Internal fragmentation:"));
}

#[test]
fn test_failures_are_reported_with_line_numbers() {
    let script = "memory 100\nblocks 20,30,50\nalloc P1 10 ff\nalloc P1 10 ff\nfree P9\nfly away\n";
    let (session, output, errors) = run(script);

    let lines: Vec<usize> = errors.iter().map(|(line, _)| *line).collect();
    assert_eq!(lines, vec![4, 6]);
    assert!(errors[0].1.contains("P1"));
    assert!(output.contains("No process P9; nothing to free"));
    assert_eq!(session.manager().processes().len(), 1);
}

#[test]
fn test_error_kinds_are_preserved() {
    let mut session = Session::new();
    let mut kinds = Vec::new();
    session
        .run_script(
            "alloc P1 10 ff\nexplain buddy\n".as_bytes(),
            &mut Vec::new(),
            false,
            |_, e| kinds.push(e.is_memory_error()),
        )
        .unwrap();
    assert_eq!(kinds, vec![true, false]);
}

#[test]
fn test_run_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "memory 100\nblocks 40,60\nalloc A 50 worst-fit\n").unwrap();

    let mut session = Session::new();
    let mut out = Vec::new();
    let summary = session
        .run_path(file.path(), &mut out, true, |_, _| {})
        .unwrap();

    assert!(summary.is_success());
    assert_eq!(summary.executed, 3);
    assert_eq!(session.manager().process("A").map(|p| p.block_index), Some(1));
}

#[test]
fn test_run_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = Session::new();
    let err = session
        .run_path(&dir.path().join("absent.txt"), &mut Vec::new(), false, |_, _| {})
        .unwrap_err();
    assert!(matches!(err, SimulatorError::Io(_)));
}

#[test]
fn test_show_json_exports_snapshot() {
    let mut session = Session::new();
    session.execute_line("memory 100").unwrap();
    session.execute_line("blocks 20,30,50").unwrap();
    session.execute_line("alloc P1 25 next-fit").unwrap();

    let json = session.execute_line("show json").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["capacity"], 100);
    assert_eq!(value["cursor"], 1);
    assert_eq!(value["blocks"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["blocks"][1]["fragmentation"], 5);
    assert_eq!(value["processes"][0]["id"], "P1");
    assert_eq!(value["processes"][0]["strategy"], "next-fit");
}

#[test]
fn test_explain_and_help() {
    let mut session = Session::new();

    let all = session.execute_line("explain").unwrap().unwrap();
    for strategy in Strategy::ALL {
        assert!(all.contains(&format!("{} Algorithm", strategy)));
    }

    let one = session.execute_line("explain best_fit").unwrap().unwrap();
    assert!(one.starts_with("Best Fit Algorithm"));
    assert!(!one.contains("Worst Fit"));

    let help = session.execute_line("help").unwrap().unwrap();
    assert!(help.contains("alloc <id> <size-kb> <strategy>"));
}

#[test]
fn test_clear_then_reuse() {
    let (mut session, _, errors) = run("memory 100\nblocks 50,50\nalloc P1 10 ff\nclear\n");
    assert!(errors.is_empty());
    assert!(session.manager().blocks().is_empty());
    assert!(session.manager().is_initialized());

    let err = session.execute_line("alloc P2 10 ff").unwrap_err();
    assert!(err.to_string().contains("No memory blocks"));
}
