//! `geyser-merge`: merge two Geyser item-mapping JSON files.
//!
//! Usage:
//!   geyser-merge <base.json> <incoming.json> [out-dir]
//!
//! Reads both files, merges the second into the first, sorts the result,
//! and writes it to `out-dir` (default: the current directory) under a
//! timestamped file name. A summary of the merged document is printed to
//! stdout.

use std::path::PathBuf;
use std::process;

use chrono::Utc;
use geyser_merge::cli::merge_mapping_files;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (base_path, incoming_path) = match (args.get(1), args.get(2)) {
        (Some(base), Some(incoming)) => (base.clone(), incoming.clone()),
        _ => {
            eprintln!("Usage: geyser-merge <base.json> <incoming.json> [out-dir]");
            process::exit(1);
        }
    };
    let out_dir = args
        .get(3)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let base_text = read_or_exit(&base_path);
    let incoming_text = read_or_exit(&incoming_path);

    let outcome = match merge_mapping_files(&base_text, &incoming_text, Utc::now()) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if !outcome.sorted {
        eprintln!("warning: no `items` map found; alphabetic sort skipped");
    }

    let out_path = out_dir.join(&outcome.file_name);
    if let Err(e) = std::fs::write(&out_path, outcome.json.as_bytes()) {
        eprintln!("{}: {e}", out_path.display());
        process::exit(1);
    }

    println!("{}", outcome.stats);
    println!("wrote {}", out_path.display());
}

fn read_or_exit(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{path}: {e}");
            process::exit(1);
        }
    }
}
