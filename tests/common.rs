#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ctt() -> Command {
    cargo_bin_cmd!("caretally")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_caretally_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a minimal ICS calendar with the given (summary, dtstart, dtend)
/// triples (floating `YYYYMMDDTHHMMSS` format) and return its path.
pub fn write_ics(name: &str, events: &[(&str, &str, &str)]) -> String {
    let mut body = String::from("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//caretally tests//EN\r\n");
    for (i, (summary, start, end)) in events.iter().enumerate() {
        body.push_str(&format!(
            "BEGIN:VEVENT\r\nUID:test-{i}@caretally\r\nSUMMARY:{summary}\r\nDTSTART:{start}\r\nDTEND:{end}\r\nEND:VEVENT\r\n"
        ));
    }
    body.push_str("END:VCALENDAR\r\n");

    let path = temp_out(name, "ics");
    fs::write(&path, body).expect("write test ics");
    path
}

/// The default classification patterns, spelled out so CLI tests do not
/// depend on any config file being present.
pub const PATTERN_A: &str = r"\bp\.?\s+ma\s+deti";
pub const PATTERN_B: &str = r"\bv\.?\s+ma\s+deti";
