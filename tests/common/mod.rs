use std::env;
use std::env::consts::EXE_EXTENSION;
use std::process::Command;

/// Locates the rlox binary sitting two levels above the test executable.
pub fn command() -> Command {
    let mut path = env::current_exe().expect("Could not get path to current executable.");
    path.pop();
    path.pop();
    path.push(env!("CARGO_PKG_NAME"));
    path.set_extension(EXE_EXTENSION);
    Command::new(path.into_os_string())
}
