use std::fs;
use std::process::Command;

fn findx() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_findx"));
    // The binary honours RUST_LOG over its own flags; keep the environment
    // from leaking into verbosity assertions.
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_matches_and_elapsed_time() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("foo.txt"), "").unwrap();
    fs::write(dir.path().join("bar.log"), "").unwrap();

    let output = findx()
        .arg("*.txt")
        .arg("--in")
        .arg(dir.path())
        .output()
        .expect("failed to run findx");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Searching for: *.txt"));
    assert!(stdout.contains("Matches:"));
    assert!(stdout.contains("foo.txt"));
    assert!(!stdout.contains("bar.log"));
    assert!(stdout.contains("Elapsed time:"));
}

#[test]
fn zero_matches_reports_not_found_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("foo.txt"), "").unwrap();

    let output = findx()
        .arg("*.log")
        .arg("-i")
        .arg(dir.path())
        .output()
        .expect("failed to run findx");

    assert!(output.status.success(), "zero matches is not an error");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("File or directory not found"));
}

#[test]
fn missing_pattern_is_fatal() {
    let output = findx().output().expect("failed to run findx");
    assert!(!output.status.success());
}

#[test]
fn missing_root_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("no_such_subdir");

    let output = findx()
        .arg("*.txt")
        .arg("--in")
        .arg(&gone)
        .output()
        .expect("failed to run findx");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("Matches:"), "no match output on fatal error");
    assert!(stderr.contains("path not found"));
}

#[test]
fn empty_root_is_fatal() {
    let output = findx()
        .arg("*.txt")
        .arg("--in")
        .arg("")
        .output()
        .expect("failed to run findx");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("empty search root"));
}

#[test]
fn verbose_traces_visited_paths_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("quux_probe.md"), "").unwrap();

    let output = findx()
        .arg("*.txt")
        .arg("--in")
        .arg(dir.path())
        .arg("--verbose")
        .output()
        .expect("failed to run findx");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("quux_probe.md"),
        "verbose mode traces every visited entry, matched or not"
    );
}

#[test]
fn version_flag_exits_zero() {
    let output = findx().arg("--version").output().expect("failed to run findx");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
