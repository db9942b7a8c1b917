//! Integration tests for the jigo engine binary.
//!
//! Tests the full GSI protocol session flow by spawning the engine process,
//! sending commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_jigo");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start jigo");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// Two one-eyed groups facing each other across the middle.
const SEKI: &str = ".XO./.XO.";

/// A black wall splitting the board, each side with two eyes.
const SPLIT: &str = ".X.X.O.O./XXXX.OOOO/.........";

#[test]
fn gsi_handshake() {
    let lines = run_engine(&["gsi", "quit"]);

    assert!(lines.iter().any(|l| l == "id name jigo"));
    assert!(lines.iter().any(|l| l == "protocol_version 1"));
    assert_eq!(lines.last().map(String::as_str), Some("gsiok"));

    let option_lines: Vec<&String> = lines.iter().filter(|l| l.starts_with("option ")).collect();
    assert_eq!(option_lines.len(), 4);
    for opt in &option_lines {
        assert!(opt.contains("type "), "option line missing type: {}", opt);
    }
}

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn unknown_commands_are_ignored() {
    let lines = run_engine(&["foobar", "genmove b", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn classify_before_position_prints_nothing() {
    let lines = run_engine(&["classify", "score", "isready"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn classify_seki_position() {
    let lines = run_engine(&[&format!("position {}", SEKI), "classify", "quit"]);
    assert_eq!(lines, vec!["BXOW", "BXOW", "classifyok"]);
}

#[test]
fn score_under_territory_and_area_rules() {
    let lines = run_engine(&[
        "setoption name Komi value 0.5",
        &format!("position {}", SEKI),
        "score",
        "setoption name Rules value chinese",
        "score",
        "quit",
    ]);
    assert_eq!(
        lines,
        vec![
            "score black 0 white 0.5 result W+0.5",
            "score black 4 white 4.5 result W+0.5",
        ]
    );
}

#[test]
fn captures_and_dead_stones_change_the_score() {
    let lines = run_engine(&[
        "setoption name Komi value 0",
        "position .O.X/XXXX",
        "dead 1 0",
        "captures 2 0",
        "score",
        "dead 1 0",
        "dead 0 0",
        "isready",
        "quit",
    ]);
    // Three territory points, one prisoner and two captures. The second
    // toggle revives the stone; the third targets an empty point and fails.
    assert_eq!(lines, vec!["score black 6 white 0 result B+6", "readyok"]);
}

#[test]
fn json_position_and_output() {
    let lines = run_engine(&[
        "setoption name Output value json",
        r#"positionjson {"stones": [[0, 0, 0]]}"#,
        "score",
        "quit",
    ]);
    assert_eq!(lines, vec![r#"{"black":0.0,"white":6.5}"#]);
}

#[test]
fn newgame_clears_position() {
    let lines = run_engine(&[&format!("position {}", SPLIT), "newgame", "classify", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn full_session() {
    let lines = run_engine(&[
        "gsi",
        "setoption name Komi value 6.5",
        "isready",
        &format!("position {}", SPLIT),
        "classify",
        "score",
        "quit",
    ]);

    let readyok = lines.iter().position(|l| l == "readyok").unwrap();
    let gsiok = lines.iter().position(|l| l == "gsiok").unwrap();
    assert!(gsiok < readyok);

    let classifyok = lines.iter().position(|l| l == "classifyok").unwrap();
    assert_eq!(classifyok - readyok, 4, "three grid rows expected");
    assert!(lines[classifyok + 1].starts_with("score black "));
}
