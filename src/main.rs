use std::env;
use std::io;
use std::io::Write;
use std::process::ExitCode;

use error::ErrorReporter;
use error::SessionError;
use scanner::Scanner;

mod error;
mod scanner;

fn main() -> Result<ExitCode, SessionError> {
    let args = env::args().collect::<Vec<String>>();
    match args.len() {
        1 => repl(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: rlox [script]");
            Ok(ExitCode::from(64))
        }
    }
}

fn repl() -> Result<ExitCode, SessionError> {
    let mut reporter = ErrorReporter::new();
    let mut buf = String::new();
    loop {
        buf.clear();
        print!("> ");
        io::stdout().flush()?;
        if io::stdin().read_line(&mut buf)? == 0 {
            break;
        }
        for token in Scanner::new(&buf).scan_tokens(&mut reporter) {
            println!("{token}");
        }
        // one bad line must not poison the next
        reporter.reset();
    }
    Ok(ExitCode::SUCCESS)
}

fn run_file(path: &str) -> Result<ExitCode, SessionError> {
    let source = std::fs::read_to_string(path)?;
    let mut reporter = ErrorReporter::new();
    for token in Scanner::new(&source).scan_tokens(&mut reporter) {
        println!("{token}");
    }
    match reporter.had_error() {
        true => Ok(ExitCode::from(65)),
        false => Ok(ExitCode::SUCCESS),
    }
}
