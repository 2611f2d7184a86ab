//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;

use std::process::Command;

/// Returns a Command configured to run the envsift binary.
pub fn envsift_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("envsift"))
}

/// Returns an envsift Command with a fully controlled environment:
/// everything cleared, then only `vars` set.
pub fn envsift_with(vars: &[(&str, &str)]) -> Command {
    let mut cmd = envsift_cmd();
    cmd.env_clear();
    for (name, value) in vars {
        cmd.env(name, value);
    }
    cmd
}

/// True when the host `printf` is GNU coreutils, which understands `%q`.
pub fn printf_supports_quote() -> bool {
    Command::new("printf")
        .arg("--version")
        .output()
        .is_ok_and(|out| {
            out.status.success() && String::from_utf8_lossy(&out.stdout).contains("printf")
        })
}

/// Collect stdout lines of a successful run, unordered.
pub fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "envsift exited with {}", output.status);
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}
