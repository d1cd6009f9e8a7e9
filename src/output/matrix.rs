// matrix.rs - Distance matrix writers

use std::io::Write;
use std::str::FromStr;

use super::{create_output, finish, write_error, write_run_header};
use crate::core::distance::DistanceMatrix;

/// Header of the name column in the tabular layouts
const NAME_HEADER: &str = "HT-ID";
/// Minimum width of a padded tsv cell
const MIN_CELL_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFormat {
    Tsv,
    Csv,
    Phylip,
    Nexus,
}

impl FromStr for MatrixFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(MatrixFormat::Tsv),
            "csv" => Ok(MatrixFormat::Csv),
            "phylip" => Ok(MatrixFormat::Phylip),
            "nexus" => Ok(MatrixFormat::Nexus),
            _ => Err(format!("Unsupported output format: {}. Use: tsv, csv, phylip, nexus", s)),
        }
    }
}

impl MatrixFormat {
    pub fn description(&self) -> &'static str {
        match self {
            MatrixFormat::Tsv => "TSV",
            MatrixFormat::Csv => "CSV",
            MatrixFormat::Phylip => "PHYLIP",
            MatrixFormat::Nexus => "NEXUS",
        }
    }
}

fn names(matrix: &DistanceMatrix<'_>) -> Vec<String> {
    matrix.haplotypes().iter().map(|h| h.label().to_string()).collect()
}

fn pad(value: &str, width: usize) -> String {
    format!("{:<width$}", value, width = width)
}

/// Tab-separated with space padded cells and `-` on the diagonal
fn write_tsv<W: Write>(writer: &mut W, matrix: &DistanceMatrix<'_>) -> Result<(), String> {
    let names = names(matrix);
    let name_width = names
        .iter()
        .map(|n| n.chars().count())
        .fold(NAME_HEADER.len(), usize::max);
    let widths: Vec<usize> = names
        .iter()
        .map(|n| n.chars().count().max(MIN_CELL_WIDTH))
        .collect();

    write!(writer, "{}", pad(NAME_HEADER, name_width)).map_err(write_error)?;
    for (name, width) in names.iter().zip(&widths) {
        write!(writer, "\t{}", pad(name, *width)).map_err(write_error)?;
    }
    writeln!(writer).map_err(write_error)?;

    for (i, name) in names.iter().enumerate() {
        write!(writer, "{}", pad(name, name_width)).map_err(write_error)?;
        for (j, width) in widths.iter().enumerate() {
            let cell = match matrix.distance_at(i, j) {
                Some(d) => d.to_string(),
                None => "-".to_string(),
            };
            write!(writer, "\t{}", pad(&cell, *width)).map_err(write_error)?;
        }
        writeln!(writer).map_err(write_error)?;
    }
    Ok(())
}

fn write_csv<W: Write>(writer: &mut W, matrix: &DistanceMatrix<'_>) -> Result<(), String> {
    let names = names(matrix);

    write!(writer, "{}", NAME_HEADER).map_err(write_error)?;
    for name in &names {
        write!(writer, ",{}", name).map_err(write_error)?;
    }
    writeln!(writer).map_err(write_error)?;

    for (i, name) in names.iter().enumerate() {
        write!(writer, "{}", name).map_err(write_error)?;
        for j in 0..names.len() {
            let distance_str = match matrix.distance_at(i, j) {
                Some(d) => d.to_string(),
                None => "0".to_string(),
            };
            write!(writer, ",{}", distance_str).map_err(write_error)?;
        }
        writeln!(writer).map_err(write_error)?;
    }
    Ok(())
}

/// Lower triangle including a zero diagonal
fn write_phylip<W: Write>(writer: &mut W, matrix: &DistanceMatrix<'_>) -> Result<(), String> {
    let names = names(matrix);
    writeln!(writer, "    {}", names.len()).map_err(write_error)?;

    for (i, name) in names.iter().enumerate() {
        write!(writer, "{:<10}", name).map_err(write_error)?;
        for j in 0..=i {
            write!(writer, "  {}", matrix.distance_at(i, j).unwrap_or(0)).map_err(write_error)?;
        }
        writeln!(writer).map_err(write_error)?;
    }
    Ok(())
}

fn write_nexus<W: Write>(writer: &mut W, matrix: &DistanceMatrix<'_>) -> Result<(), String> {
    let names = names(matrix);
    writeln!(writer, "BEGIN DISTANCES;").map_err(write_error)?;
    writeln!(writer, "    DIMENSIONS NTAX={};", names.len()).map_err(write_error)?;
    writeln!(writer, "    FORMAT LABELS LOWER DIAGONAL;").map_err(write_error)?;
    writeln!(writer, "    MATRIX").map_err(write_error)?;

    for (i, name) in names.iter().enumerate() {
        write!(writer, "        {}", name).map_err(write_error)?;
        for j in 0..i {
            let distance_str = match matrix.distance_at(i, j) {
                Some(d) => d.to_string(),
                None => "?".to_string(),
            };
            write!(writer, " {}", distance_str).map_err(write_error)?;
        }
        writeln!(writer).map_err(write_error)?;
    }

    writeln!(writer, "    ;").map_err(write_error)?;
    writeln!(writer, "END;").map_err(write_error)?;
    Ok(())
}

/// Write the distance matrix in the given layout. The optional command line
/// is recorded as comments: leading `#` lines for tsv and csv, trailing for
/// phylip, bracketed after `#NEXUS` for nexus.
pub fn write_matrix<W: Write>(
    writer: &mut W,
    matrix: &DistanceMatrix<'_>,
    format: MatrixFormat,
    command_line: Option<&str>,
) -> Result<(), String> {
    match format {
        MatrixFormat::Tsv | MatrixFormat::Csv => {
            if let Some(command_line) = command_line {
                write_run_header(writer, command_line, "# ", "")?;
            }
            if format == MatrixFormat::Tsv {
                write_tsv(writer, matrix)?;
            } else {
                write_csv(writer, matrix)?;
            }
        }
        MatrixFormat::Phylip => {
            write_phylip(writer, matrix)?;
            if let Some(command_line) = command_line {
                writeln!(writer).map_err(write_error)?;
                write_run_header(writer, command_line, "# ", "")?;
            }
        }
        MatrixFormat::Nexus => {
            writeln!(writer, "#NEXUS").map_err(write_error)?;
            if let Some(command_line) = command_line {
                write_run_header(writer, command_line, "[", "]")?;
            }
            write_nexus(writer, matrix)?;
        }
    }

    log::info!("{} matrix entries written ({})", matrix.len(), format.description());
    Ok(())
}

pub fn write_matrix_to_file(
    file_path: &str,
    matrix: &DistanceMatrix<'_>,
    format: MatrixFormat,
    command_line: Option<&str>,
) -> Result<(), String> {
    let mut writer = create_output(file_path)?;
    write_matrix(&mut writer, matrix, format, command_line)?;
    finish(&mut writer)?;
    println!("✅ Distance matrix written to: {} ({} format)", file_path, format.description());
    Ok(())
}
