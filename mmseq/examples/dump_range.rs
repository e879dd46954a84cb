//! Dump a byte range of a file through a windowed view.
//!
//! Usage: dump_range <file> [start] [count]

use std::env;
use std::process::ExitCode;

use mmseq::{ListView, Result};

fn run(path: &str, start: usize, count: usize) -> Result<()> {
    let view: ListView<u8> = ListView::open(path)?;
    println!("{path}: {} bytes", view.len());

    let start = start.min(view.len());
    let end = start.saturating_add(count).min(view.len());
    let mut bytes = Vec::with_capacity(end - start);
    for item in view.iter_at(start)?.take(end - start) {
        bytes.push(item?);
    }
    print!("{}", String::from_utf8_lossy(&bytes));
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: dump_range <file> [start] [count]");
        return ExitCode::FAILURE;
    };
    let start = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);
    let count = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(256);

    match run(path, start, count) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dump_range: {err}");
            ExitCode::FAILURE
        }
    }
}
