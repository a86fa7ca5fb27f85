//! Shared pieces for the CLI integration tests.
//!
//! `clean_env()` unsets every `CONNECT4_*` variable for the lifetime of the
//! returned guards, so results do not depend on the caller's shell. Tests
//! that touch the environment must also be `#[serial]`.

#![allow(dead_code)]

use connect4_cli::run_with_input;
use std::io::Cursor;

pub const VARS: [&str; 5] = [
    "CONNECT4_CONFIG",
    "CONNECT4_FIRST_PLAYER",
    "CONNECT4_SHOW_BOARD",
    "CONNECT4_FORMAT",
    "CONNECT4_LOG",
];

pub struct TempEnvVar {
    key: &'static str,
    previous: Option<String>,
}

impl TempEnvVar {
    pub fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe {
            std::env::set_var(key, value);
        }
        Self { key, previous }
    }

    pub fn unset(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, previous }
    }
}

impl Drop for TempEnvVar {
    fn drop(&mut self) {
        unsafe {
            match &self.previous {
                Some(prev) => std::env::set_var(self.key, prev),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

pub fn clean_env() -> Vec<TempEnvVar> {
    VARS.iter().map(|&k| TempEnvVar::unset(k)).collect()
}

pub struct Output {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the CLI in-process with `input` as stdin.
pub fn run_cli(args: &[&str], input: &str) -> Output {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run_with_input(
        args.to_vec(),
        &mut Cursor::new(input.as_bytes()),
        &mut out,
        &mut err,
    );
    Output {
        code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}
