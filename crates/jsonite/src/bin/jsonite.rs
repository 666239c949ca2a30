//! Command-line JSON filter: reads on stdin, writes the canonical compact
//! form on stdout.

use std::io::Read;
use std::process::ExitCode;

use jsonite::{parse, parse_multi, ParseMode};

const USAGE: &str = "usage: jsonite [--comments] [--multi]

Reads JSON on stdin and writes the canonical compact form on stdout.

  --comments  allow // and /* */ comments in the input
  --multi     parse a whitespace-separated stream of documents and
              print one line per document";

fn main() -> ExitCode {
    let mut mode = ParseMode::Strict;
    let mut multi = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--comments" => mode = ParseMode::Comments,
            "--multi" => multi = true,
            "--help" | "-h" => {
                println!("{USAGE}");
                return ExitCode::SUCCESS;
            }
            other => {
                eprintln!("jsonite: unknown argument '{other}'\n{USAGE}");
                return ExitCode::from(2);
            }
        }
    }

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("jsonite: failed to read stdin: {err}");
        return ExitCode::FAILURE;
    }

    if multi {
        match parse_multi(&input, mode) {
            Ok(values) => {
                for value in &values {
                    println!("{value}");
                }
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("jsonite: {err}");
                ExitCode::FAILURE
            }
        }
    } else {
        match parse(&input, mode) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("jsonite: {err}");
                ExitCode::FAILURE
            }
        }
    }
}
