//! End-to-end runs of the `ethcal` binary.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// An empty config file so that no user configuration leaks into the runs.
fn empty_config() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ethcal-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("empty.toml");
    std::fs::write(&path, "").unwrap();
    path
}

fn ethcal(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ethcal"))
        .arg("--config")
        .arg(empty_config())
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn convert_text() {
    let out = ethcal(&["convert", "2016-01-01"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).trim(), "1 Meskerem 2016 = Tuesday, September 12, 2023");
}

#[test]
fn reverse_json() {
    let out = ethcal(&["--json", "reverse", "2024-01-07"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["ok"], true);
    assert_eq!(v["data"]["ethiopian"], "28 Tahsas 2016");
}

#[test]
fn month_text_lists_holidays() {
    let out = ethcal(&["month", "2016", "0"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("Meskerem 2016 (John)"));
    assert!(text.contains("Finding of the True Cross (Meskel)"));
}

#[test]
fn year_listing_stars_public_holidays() {
    let out = ethcal(&["holidays", "2016"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("2024-04-10 * Eid al-Fitr (movable)"));
    assert!(text.contains("2024-01-08 * Ethiopian Christmas (Genna)\n"));
    assert!(text.contains("  Fast of Nineveh (movable)"));
}

#[test]
fn errors_exit_non_zero() {
    let out = ethcal(&["month", "0", "0"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("out of range"));

    let out = ethcal(&["--json", "holiday", "nonexistent-key"]);
    assert!(!out.status.success());
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["error"]["kind"], "NotFound");
}

#[test]
fn serve_answers_each_line() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ethcal"))
        .arg("--config")
        .arg(empty_config())
        .arg("serve")
        .env("RUST_LOG", "error")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    {
        let stdin = child.stdin.as_mut().unwrap();
        writeln!(stdin, r#"{{"op": "convert", "year": 2016, "month": 1, "day": 1}}"#).unwrap();
        writeln!(stdin).unwrap();
        writeln!(stdin, r#"{{"op": "holiday", "key": "GENA"}}"#).unwrap();
        writeln!(stdin, "garbage").unwrap();
    }
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    let lines: Vec<serde_json::Value> = stdout(&out)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["data"]["formatted"], "September 12, 2023");
    assert_eq!(lines[1]["data"]["key"], "gena");
    assert_eq!(lines[2]["error"]["kind"], "InvalidRequest");
}
