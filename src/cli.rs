//! Command-line interface

use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use crate::matrix::Matrix;
use crate::oplog::OperationLog;

/// What to compute from the input matrix
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Row-echelon form
    Ref,
    /// Reduced row-echelon form
    Rref,
    /// Inverse of a square matrix
    Inverse,
    /// Rank
    Rank,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Operation to perform
    #[arg(short, long, value_enum)]
    pub mode: Mode,

    /// Matrix file: one row per line, entries separated by spaces or commas
    #[arg(short, long)]
    pub file: String,

    /// Print every elementary row operation applied
    #[arg(short, long, default_value = "false")]
    pub log: bool,

    /// Decimal places for printed entries
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Enable verbose output
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,
}

/// Read the matrix named on the command line and render the requested result
pub fn run(cli: &Cli) -> Result<String> {
    let text = fs::read_to_string(&cli.file).with_context(|| format!("Failed to read {}", cli.file))?;
    let matrix: Matrix<f64> = text.parse().with_context(|| format!("Failed to parse {}", cli.file))?;
    info!("Loaded {}x{} matrix from {}", matrix.rows(), matrix.cols(), cli.file);

    let mut log = OperationLog::new();
    let sink = if cli.log { Some(&mut log) } else { None };

    let result = match cli.mode {
        Mode::Ref => matrix.row_echelon(sink)?,
        Mode::Rref => matrix.reduced_row_echelon(sink)?,
        Mode::Inverse => matrix.inverse_logged(sink)?,
        Mode::Rank => return Ok(matrix.rank()?.to_string()),
    };

    let mut output = match cli.precision {
        Some(precision) => format!("{result:.precision$}"),
        None => result.to_string(),
    };
    if cli.log {
        write!(output, "\n\n{} row operations\n{log}", log.len())?;
    }
    Ok(output)
}
