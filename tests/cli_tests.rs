use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn discforge(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_discforge"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn calc_prints_readouts() {
    let output = discforge(&["calc"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Stable"));
    assert!(stdout.contains("285 ft"));
    assert!(stdout.contains("200 ft"));
    assert!(stdout.contains("371 ft"));
}

#[test]
fn calc_json_uses_fail_soft_parsing() {
    let output = discforge(&[
        "calc", "--speed", "12", "--turn", "oops", "--fade", "3", "--style", "rhfh", "--format",
        "json",
    ]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["disc"]["turn"], 0.0);
    assert_eq!(json["stability"], "Overstable");
    assert_eq!(json["distances"]["normal"], "435");
    assert_eq!(json["throwStyle"], "RHFH");
}

#[test]
fn calc_csv_has_three_rows() {
    let output = discforge(&["calc", "--format", "csv"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.contains("over,1.3,Stable,371,"));
}

#[test]
fn chart_writes_svg_file_from_disc_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let disc_path = dir.path().join("disc.json");
    let svg_path = dir.path().join("flight.svg");
    fs::write(
        &disc_path,
        r#"{"speed": 7, "glide": 5, "turn": -2, "fade": 2}"#,
    )
    .unwrap();

    let output = discforge(&[
        "chart",
        "--disc",
        disc_path.to_str().unwrap(),
        "--out",
        svg_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    let svg = fs::read_to_string(&svg_path).unwrap();
    assert!(svg.contains("M 200 500 C 340 300, 340 100, 240 100"));
}

#[test]
fn missing_disc_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let output = discforge(&["calc", "--disc", missing.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn session_reads_commands_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_discforge"))
        .args(["session", "--no-prompt"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn session");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"show\nset fade 1\ncommit\nstyle rhfh\nquit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Enter disc specifications to see flight characteristics"));
    assert!(stdout.contains("Understable"));
    assert!(stdout.contains("RHFH"));
}
