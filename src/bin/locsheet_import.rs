//! locsheet-import: rebuild the localization JSON document from a sheet.
//!
//! Usage:
//!   # Read from file, write to stdout
//!   locsheet-import strings.tsv
//!
//!   # Take the second translator's column, skipping a header row
//!   locsheet-import strings.tsv -c 2 -s 1 -o strings.json

use anyhow::Result;
use clap::Parser;
use locsheet::{sheet_to_json, SheetConfig};
use std::fs::File;
use std::io::{stdin, stdout, BufReader, BufWriter, Read, Write};

#[derive(Parser, Debug)]
#[command(name = "locsheet-import")]
#[command(about = "Rebuild the localization JSON document from a sheet", long_about = None)]
struct Args {
    /// Input sheet file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Output JSON file (use stdout if omitted)
    #[arg(long, short = 'o')]
    output: Option<String>,

    /// Value column to convert when collaborators filled in several
    #[arg(long, short = 'c', default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    select_column: u64,

    /// Rows to discard before record parsing begins
    #[arg(long, short = 's', default_value_t = 0)]
    skip_rows: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = SheetConfig {
        values_column: args.select_column as usize,
        skip_rows: args.skip_rows as usize,
    };

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

    sheet_to_json(reader, writer, &config)
}
