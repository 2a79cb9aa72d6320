//! Minimal runnable demo of the four solvers, in the spirit of
//! `original_source/main.py`'s `--check-correctness`/`--quiet` flags, without that script's
//! DNA/slice random-instance generators or its `multiprocessing.Pool` fan-out (both out of scope).
//!
//! Usage: `ssp-demo <greedy|tgreedy|gha|ca> [--check-correctness] [--quiet] [--input FILE | STRING...]`
//! With no `--input` file, trailing positional arguments are taken as the input strings directly.

use std::env;
use std::fs;
use std::process::ExitCode;

use ssp_solve::{ca, ensure_substring_free, greedy, gha, tgreedy};

fn usage() -> &'static str {
    "usage: ssp-demo <greedy|tgreedy|gha|ca> [--check-correctness] [--quiet] [--input FILE | STRING...]"
}

fn print_data(description: &str, data: &str, quiet: bool) {
    if quiet {
        println!("{description} len: {}", data.len());
    } else {
        println!("{description} {data} len: {}", data.len());
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let algorithm = args.next().ok_or_else(|| usage().to_string())?;

    let mut check_correctness = false;
    let mut quiet = false;
    let mut input_file: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--check-correctness" => check_correctness = true,
            "--quiet" => quiet = true,
            "--input" => {
                input_file = Some(args.next().ok_or("--input requires a path argument")?);
            }
            other => positional.push(other.to_string()),
        }
    }

    let raw_strings: Vec<String> = if let Some(path) = input_file {
        let contents = fs::read_to_string(&path).map_err(|e| format!("reading {path}: {e}"))?;
        contents.lines().map(str::to_string).filter(|l| !l.is_empty()).collect()
    } else {
        positional
    };

    if raw_strings.is_empty() {
        return Err("no input strings given; pass --input FILE or positional arguments".to_string());
    }

    let strings = ensure_substring_free(&raw_strings);
    print_data("input", &strings.join(","), quiet);

    let solution = match algorithm.as_str() {
        "greedy" => greedy(&strings),
        "tgreedy" => tgreedy(&strings),
        "gha" => gha(&strings),
        "ca" => ca(&strings),
        other => return Err(format!("unknown algorithm '{other}'; {}", usage())),
    }
    .map_err(|e| e.to_string())?;

    print_data("solution", &solution, quiet);

    if check_correctness {
        for s in &strings {
            if !solution.contains(s.as_str()) {
                return Err(format!("correctness check failed: solution is missing input '{s}'"));
            }
        }
        println!("correctness check passed");
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
