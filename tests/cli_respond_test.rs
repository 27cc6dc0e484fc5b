//! Runs the `respond` subcommand of the built binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const CORNER_BOARD: &str = r#"{"board":["X","1","2","3","4","5","6","7","8"]}"#;

fn respond_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_strictly_tictactoe"));
    cmd.arg("respond")
        .env_remove("TICTACTOE_HOST")
        .env_remove("TICTACTOE_PORT")
        .env_remove("TICTACTOE_OPPONENT")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn missing_board_and_bad_move_exit_with_failure() {
    let output = respond_command().arg(r#"{"move":"test"}"#).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "{\"board\":[],\"errors\":[\"Board required\",\"Invalid Move\"]}\n"
    );
    assert!(stderr(&output).contains("422 Unprocessable Entity"));
}

#[test]
fn computer_move_exits_with_success() {
    let output = respond_command().arg(CORNER_BOARD).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "{\"board\":[\"X\",\"1\",\"2\",\"3\",\"O\",\"5\",\"6\",\"7\",\"8\"],\"errors\":[]}\n"
    );
    assert!(stderr(&output).contains("200 OK"));
}

#[test]
fn body_is_read_from_stdin_when_omitted() {
    let mut child = respond_command()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"board":["X","O","2","3","4","5","6","7","8"],"move":1}"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "{\"board\":[\"X\",\"O\",\"2\",\"3\",\"4\",\"5\",\"6\",\"7\",\"8\"],\"errors\":[\"Space already occupied\"]}\n"
    );
}

#[test]
fn opponent_env_var_selects_strategy() {
    let output = respond_command()
        .env("TICTACTOE_OPPONENT", "first-empty")
        .arg(CORNER_BOARD)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with(r#"{"board":["X","O","2","3","4""#));
}

#[test]
fn opponent_flag_overrides_env_var() {
    let output = respond_command()
        .env("TICTACTOE_OPPONENT", "first-empty")
        .args(["--opponent", "minimax"])
        .arg(CORNER_BOARD)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with(r#"{"board":["X","1","2","3","O""#));
}

#[test]
fn opponent_read_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "opponent = \"first-empty\"").unwrap();

    let output = respond_command()
        .arg("--config")
        .arg(file.path())
        .arg(CORNER_BOARD)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with(r#"{"board":["X","O","2","3","4""#));
}
