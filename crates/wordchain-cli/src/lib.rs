// wordchain-cli: shared utilities for CLI tools.

use std::io::{BufRead, BufReader};
use std::process;

/// Read a word list file: one word per line, line terminators stripped.
///
/// Blank lines are passed through; the engine's filtering skips them (and
/// counts them in its statistics).
pub fn load_words(path: &str) -> Result<Vec<String>, String> {
    let file = std::fs::File::open(path)
        .map_err(|e| format!("could not open dictionary file '{path}': {e}"))?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| format!("could not read dictionary file '{path}': {e}"))?;
        // BufRead::lines strips '\n'; strip a remaining '\r' from CRLF input.
        words.push(line.strip_suffix('\r').unwrap_or(&line).to_string());
    }
    Ok(words)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_value_flag(args, "--dict-path", Some("-d"))
}

/// Parse one `--name=VALUE` / `--name VALUE` (optionally `-x VALUE`) flag.
///
/// Returns `(value, remaining_args)`. A flag given more than once keeps the
/// last value.
pub fn parse_value_flag(
    args: &[String],
    long: &str,
    short: Option<&str>,
) -> (Option<String>, Vec<String>) {
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || short.is_some_and(|s| arg == s) {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Parse a numeric flag, exiting with a diagnostic on a malformed value.
pub fn parse_usize_flag(args: &[String], long: &str) -> (Option<usize>, Vec<String>) {
    let (value, remaining) = parse_value_flag(args, long, None);
    match value {
        None => (None, remaining),
        Some(v) => match v.parse() {
            Ok(n) => (Some(n), remaining),
            Err(_) => {
                eprintln!("error: {long} expects a number, got '{v}'");
                process::exit(1);
            }
        },
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
