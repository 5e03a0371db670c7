//! locsheet-export: flatten a localization JSON document into the
//! collaborative sheet format.
//!
//! Usage:
//!   # Read from file, write to stdout
//!   locsheet-export strings.json
//!
//!   # Read from stdin, write to a file
//!   cat strings.json | locsheet-export -o strings.tsv

use anyhow::Result;
use clap::Parser;
use locsheet::json_to_sheet;
use std::fs::File;
use std::io::{stdin, stdout, BufReader, BufWriter, Read, Write};

#[derive(Parser, Debug)]
#[command(name = "locsheet-export")]
#[command(about = "Flatten a localization JSON document into a sheet", long_about = None)]
struct Args {
    /// Input JSON file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Output sheet file (use stdout if omitted)
    #[arg(long, short = 'o')]
    output: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let reader: Box<dyn Read> = if let Some(path) = &args.input {
        Box::new(BufReader::new(File::open(path)?))
    } else {
        Box::new(stdin())
    };

    let writer: Box<dyn Write> = if let Some(path) = &args.output {
        Box::new(BufWriter::new(File::create(path)?))
    } else {
        Box::new(stdout())
    };

    json_to_sheet(reader, writer)
}
