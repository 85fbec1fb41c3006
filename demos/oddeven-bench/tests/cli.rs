//! Exit status and console output of the `oddeven-bench` binary.

use std::process::{Command, Output};

const ENV_VARS: [&str; 5] = [
    "ODDEVEN_SIZE",
    "ODDEVEN_THREADS",
    "ODDEVEN_SEED",
    "ODDEVEN_GENERATOR",
    "ODDEVEN_ORDER",
];

fn bench(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_oddeven-bench"));
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to launch oddeven-bench")
}

/// Returns the millisecond value if `line` reads `<label>: <n> ms`.
fn timing_value(line: &str, label: &str) -> Option<u128> {
    line.strip_prefix(label)?
        .strip_prefix(": ")?
        .strip_suffix(" ms")?
        .parse()
        .ok()
}

#[test]
fn test_success_prints_two_timing_lines() {
    let out = bench(&["--size", "500"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout: {stdout:?}");
    assert!(timing_value(lines[0], "Sequential sort").is_some(), "{}", lines[0]);
    assert!(timing_value(lines[1], "Parallel sort").is_some(), "{}", lines[1]);
}

#[test]
fn test_ascending_lcg_succeeds() {
    let out = bench(&["--size", "200", "-t", "3", "--order", "asc", "--generator", "lcg"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8(out.stdout).unwrap().lines().count(), 2);
}

#[test]
fn test_zero_threads_exits_with_error() {
    let out = bench(&["--size", "500", "-t", "0"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.starts_with("Error: "), "stderr: {stderr:?}");
    assert!(stderr.contains("at least one worker thread"), "stderr: {stderr:?}");
}

#[test]
fn test_zero_threads_from_environment() {
    let out = Command::new(env!("CARGO_BIN_EXE_oddeven-bench"))
        .env("ODDEVEN_THREADS", "0")
        .env("ODDEVEN_SIZE", "10")
        .output()
        .expect("failed to launch oddeven-bench");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Error: "));
}

#[test]
fn test_timing_value_format() {
    assert_eq!(timing_value("Parallel sort: 21 ms", "Parallel sort"), Some(21));
    assert_eq!(timing_value("Parallel sort: 21ms", "Parallel sort"), None);
    assert_eq!(timing_value("Sequential sort: 3 ms", "Parallel sort"), None);
}
