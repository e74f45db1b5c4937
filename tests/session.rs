mod common;

use std::io::Write;
use std::process::Stdio;

use common::command;

#[test]
fn prompt_resets_error_state_between_lines() {
    let mut child = command()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Command execution error.");
    child
        .stdin
        .as_mut()
        .expect("Child stdin not captured.")
        .write_all(b"@\n(\n")
        .expect("Could not write to child stdin.");
    let output = child.wait_with_output().expect("Command execution error.");

    assert!(
        output.status.success(),
        "End of input should leave the prompt cleanly"
    );
    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("Invalid UTF-8");
    assert_eq!(stdout, "> EOF  nil\n> LEFT_PAREN ( nil\nEOF  nil\n> ");
    assert_eq!(stderr, "[line 1] Error : Unexpected character.\n");
}

#[test]
fn too_many_arguments_is_a_usage_error() {
    let output = command()
        .arg("one.lox")
        .arg("two.lox")
        .output()
        .expect("Command execution error.");
    assert_eq!(
        output
            .status
            .code()
            .expect("Process terminated by a signal."),
        64
    );
    assert!(output.stdout.is_empty(), "Nothing should be scanned");
    let stderr = String::from_utf8(output.stderr).expect("Invalid UTF-8");
    assert_eq!(stderr, "Usage: rlox [script]\n");
}

#[test]
fn unreadable_file_aborts_without_tokens() {
    let output = command()
        .arg("no/such/script.lox")
        .output()
        .expect("Command execution error.");
    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(65), "Not a lexical error");
    assert!(output.stdout.is_empty(), "Nothing should be scanned");
}
