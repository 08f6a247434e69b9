// Integration tests for `pinmap map` / `find` / `search`.
// Run with: cargo test -p pinmap-cli --test map_tests -- --nocapture

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

fn pinmap() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pinmap"))
}

const MM_FILE: &str = "\
Pick and Place report for panel
Units used: mm

\"Designator\",\"Layer\",\"Center-X(mm)\",\"Center-Y(mm)\"
\"C102\",\"Top\",\"12.5mm\",\"12.5mm\"
\"R16\",\"Bottom\",\"80\",\"60\"
\"c102\",\"Top\",\"90\",\"90\"
";

fn fixture(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("placements.csv");
    fs::write(&path, content).unwrap();
    (dir, path)
}

// ---------------------------------------------------------------------------
// map: configuration banner + duplicate warning
// ---------------------------------------------------------------------------

#[test]
fn map_prints_configuration() {
    let (_dir, path) = fixture(MM_FILE);
    let output = pinmap().args(["map", path.to_str().unwrap()]).output().expect("pinmap map");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("header:  line 4"), "stdout: {stdout}");
    assert!(stdout.contains("units:   mm"), "stdout: {stdout}");
    assert!(stdout.contains("Center-X(mm)"), "stdout: {stdout}");
    assert!(stdout.contains("mapped:  2 unique components"), "stdout: {stdout}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning:"), "duplicate should warn, stderr: {stderr}");
    assert!(stderr.contains("c102"), "stderr: {stderr}");
}

#[test]
fn map_quiet_suppresses_warnings() {
    let (_dir, path) = fixture(MM_FILE);
    let output = pinmap().args(["map", path.to_str().unwrap(), "-q"]).output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).is_empty());
}

#[test]
fn map_json_summary() {
    let (_dir, path) = fixture(MM_FILE);
    let output = pinmap().args(["map", path.to_str().unwrap(), "--json", "-q"]).output().unwrap();

    assert!(output.status.success());
    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON summary");
    assert_eq!(summary["mapped"], 2);
    assert_eq!(summary["units"], "mm");
    assert_eq!(summary["conversion_factor"], 1.0);
    assert_eq!(summary["header_line"], 4);
    assert_eq!(summary["board"]["rows"], 4);
}

#[test]
fn map_missing_file_exits_4() {
    let output = pinmap().args(["map", "/no/such/file.csv"]).output().unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error:"));
}

#[test]
fn map_headerless_file_exits_4_with_hint() {
    let (_dir, path) = fixture("not a centroid file\nat all\n");
    let output = pinmap().args(["map", path.to_str().unwrap()]).output().unwrap();

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("hint:"), "stderr: {stderr}");
}

#[test]
fn map_rejects_bad_board_spec() {
    let (_dir, path) = fixture(MM_FILE);
    let output =
        pinmap().args(["map", path.to_str().unwrap(), "--rows", "0"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ---------------------------------------------------------------------------
// find: grid + details, case-insensitive, miss handling
// ---------------------------------------------------------------------------

#[test]
fn find_renders_grid_and_details() {
    let (_dir, path) = fixture(MM_FILE);
    let output =
        pinmap().args(["find", path.to_str().unwrap(), "c102", "-q"]).output().unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[A1]"), "target zone bracketed, stdout: {stdout}");
    assert!(stdout.contains("⦿"), "target marker present");
    assert!(stdout.contains("C4 •"), "R16 occupies C4, stdout: {stdout}");
    assert!(stdout.contains("found: C102"));
    assert!(stdout.contains("zone:  A1-22"));
    assert!(stdout.contains("side:  Top"));
    assert!(stdout.contains("x/y:   12.50mm, 12.50mm"));
}

#[test]
fn find_miss_exits_3() {
    let (_dir, path) = fixture(MM_FILE);
    let output = pinmap().args(["find", path.to_str().unwrap(), "U99", "-q"]).output().unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("'U99' not found"));
}

#[test]
fn find_mixed_hit_and_miss_exits_3() {
    let (_dir, path) = fixture(MM_FILE);
    let output =
        pinmap().args(["find", path.to_str().unwrap(), "R16", "U99", "-q"]).output().unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stdout).contains("found: R16"));
}

#[test]
fn find_json_objects() {
    let (_dir, path) = fixture(MM_FILE);
    let output = pinmap()
        .args(["find", path.to_str().unwrap(), "C102", "U99", "--json", "-q"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let objects: Vec<serde_json::Value> =
        stdout.lines().map(|l| serde_json::from_str(l).expect("JSON line")).collect();
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0]["found"], true);
    assert_eq!(objects[0]["zone"], "A1-22");
    assert_eq!(objects[0]["primary"], "A1");
    assert_eq!(objects[0]["x_mm"], 12.5);
    assert_eq!(objects[1]["found"], false);
    assert_eq!(objects[1]["designator"], "U99");
}

// ---------------------------------------------------------------------------
// find: mil dialect end to end
// ---------------------------------------------------------------------------

#[test]
fn find_mil_file_converts_units() {
    let content = "\
Units used: mil
\"Designator\",\"Layer\",\"Center-X(mil)\",\"Center-Y(mil)\"
\"U1\",\"Top\",\"1000\",\"1000\"
";
    let (_dir, path) = fixture(content);
    let output = pinmap().args(["find", path.to_str().unwrap(), "u1", "-q"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // 1000 mil = 25.4 mm on both axes: col floor(25.4/25)=1 -> column 2,
    // row floor(25.4/25)=1 -> letter B; relative 0.4 -> secondary 1,1.
    assert!(stdout.contains("zone:  B2-11"), "stdout: {stdout}");
    assert!(stdout.contains("x/y:   25.40mm, 25.40mm"));
}

// ---------------------------------------------------------------------------
// search: interactive loop over stdin
// ---------------------------------------------------------------------------

#[test]
fn search_reads_stdin_until_quit() {
    let (_dir, path) = fixture(MM_FILE);
    let mut child = pinmap()
        .args(["search", path.to_str().unwrap(), "-q"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"r16\n\nnothere\nq\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("found: R16"), "stdout: {stdout}");
    assert!(stdout.contains("not found: 'nothere'"), "stdout: {stdout}");
}

#[test]
fn search_stops_at_eof() {
    let (_dir, path) = fixture(MM_FILE);
    let mut child = pinmap()
        .args(["search", path.to_str().unwrap(), "-q"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    child.stdin.take().unwrap(); // close stdin immediately
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
}
