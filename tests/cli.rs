//! Integration tests for top-level CLI behavior.

use std::process::Command;

fn run_timetabler(args: &[&str], store_file: &str) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_timetabler");
    let store_path = std::env::temp_dir().join(store_file);
    let _ = std::fs::remove_file(&store_path);
    Command::new(bin)
        .args(args)
        .env_remove("TIMETABLER_CATALOG_URL")
        .env("TIMETABLER_STORE", &store_path)
        .output()
        .expect("failed to run timetabler binary")
}

fn run_with_dummy_catalog(args: &[&str], store_file: &str) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_timetabler");
    let store_path = std::env::temp_dir().join(store_file);
    let _ = std::fs::remove_file(&store_path);
    Command::new(bin)
        .args(args)
        .env("TIMETABLER_CATALOG_URL", "http://127.0.0.1:9")
        .env("TIMETABLER_STORE", &store_path)
        .output()
        .expect("failed to run timetabler binary")
}

#[test]
fn help_lists_subcommands() {
    let output = run_timetabler(&["--help"], "timetabler-cli-help.json");
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(text.contains("degrees"));
    assert!(text.contains("restore"));
    assert!(text.contains("share"));
    assert!(text.contains("classes"));
}

#[test]
fn degrees_without_catalog_url_shows_error() {
    let output =
        run_timetabler(&["degrees", "--term", "2º Semestre 2019/2020"], "timetabler-cli-deg.json");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("TIMETABLER_CATALOG_URL"));
}

#[test]
fn courses_requires_a_term() {
    let output = run_with_dummy_catalog(&["courses", "some-degree"], "timetabler-cli-courses.json");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("--term") || stderr.contains("term"));
}

#[test]
fn restore_rejects_garbage_state() {
    let output = run_with_dummy_catalog(&["restore", "garbage"], "timetabler-cli-restore.json");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("not a valid encoded timetable"));
}

#[test]
fn share_without_saved_timetable_shows_error() {
    let output = run_with_dummy_catalog(&["share"], "timetabler-cli-share.json");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("no saved timetable"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_timetabler(&["nonsense"], "timetabler-cli-nonsense.json");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
