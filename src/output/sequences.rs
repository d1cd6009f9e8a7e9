// sequences.rs - Sequence writers for FASTA, Phylip, Phylip-TCS and CSV

use std::io::Write;

use super::{create_output, finish, write_error};
use crate::data::loaders::phylip::TCS_MAX_NAME_LENGTH;
use crate::data::{Sequence, SequenceFormat};

/// Line width of Phylip sequence blocks
pub const PHYLIP_LINE_WIDTH: usize = 60;

#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// FASTA only: wrap values after this many characters, 0 disables wrapping
    pub line_width: usize,
    /// CSV only: field delimiter
    pub delimiter: char,
    /// CSV only: write an Excel `sep=` first line
    pub excel_header: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            line_width: 0,
            delimiter: ',',
            excel_header: false,
        }
    }
}

/// Write sequences in the given format
pub fn write_sequences<W: Write>(
    writer: &mut W,
    sequences: &[Sequence],
    format: SequenceFormat,
    options: &WriteOptions,
) -> Result<(), String> {
    match format {
        SequenceFormat::Fasta => write_fasta(writer, sequences, options.line_width),
        SequenceFormat::Phylip => write_phylip(writer, sequences, PHYLIP_LINE_WIDTH, None),
        SequenceFormat::PhylipTcs => write_phylip(writer, sequences, 0, Some(TCS_MAX_NAME_LENGTH)),
        SequenceFormat::Csv => write_csv(writer, sequences, options.delimiter, options.excel_header),
    }?;
    log::info!("{} sequences written as {}", sequences.len(), format.description());
    Ok(())
}

pub fn write_sequences_to_file(
    file_path: &str,
    sequences: &[Sequence],
    format: SequenceFormat,
    options: &WriteOptions,
) -> Result<(), String> {
    let mut writer = create_output(file_path)?;
    write_sequences(&mut writer, sequences, format, options)?;
    finish(&mut writer)?;
    println!("✅ {} sequences written to: {} ({})", sequences.len(), file_path, format.description());
    Ok(())
}

fn write_value<W: Write>(writer: &mut W, value: &str, line_width: usize) -> Result<(), String> {
    if line_width == 0 {
        return writeln!(writer, "{}", value).map_err(write_error);
    }
    let chars: Vec<char> = value.chars().collect();
    for chunk in chars.chunks(line_width) {
        writeln!(writer, "{}", chunk.iter().collect::<String>()).map_err(write_error)?;
    }
    Ok(())
}

fn write_fasta<W: Write>(writer: &mut W, sequences: &[Sequence], line_width: usize) -> Result<(), String> {
    for sequence in sequences {
        writeln!(writer, ">{}", sequence.name().unwrap_or_default()).map_err(write_error)?;
        write_value(writer, sequence.value(), line_width)?;
    }
    Ok(())
}

fn write_phylip<W: Write>(
    writer: &mut W,
    sequences: &[Sequence],
    line_width: usize,
    max_name_length: Option<usize>,
) -> Result<(), String> {
    let length = sequences.first().map_or(0, |s| s.len());
    writeln!(writer, "{}    {}", sequences.len(), length).map_err(write_error)?;

    for sequence in sequences {
        if sequence.len() != length {
            return Err(format!(
                "Sequence with name \"{}\" has not the correct length. Expected/Actual: {}/{}",
                sequence.label(),
                length,
                sequence.len()
            ));
        }
        let name = sequence.name().unwrap_or_default();
        let name: String = match max_name_length {
            Some(max) => name.chars().take(max).collect(),
            None => name.to_string(),
        };
        writeln!(writer, "{}", name).map_err(write_error)?;
        write_value(writer, sequence.value(), line_width)?;
    }
    Ok(())
}

fn write_csv<W: Write>(
    writer: &mut W,
    sequences: &[Sequence],
    delimiter: char,
    excel_header: bool,
) -> Result<(), String> {
    if !delimiter.is_ascii() {
        return Err(format!("CSV delimiter must be an ASCII character, found '{}'", delimiter));
    }
    if excel_header {
        writeln!(writer, "sep={}", delimiter).map_err(write_error)?;
    }

    let mut csv_writer = ::csv::WriterBuilder::new()
        .delimiter(delimiter as u8)
        .flexible(true)
        .from_writer(writer);

    for sequence in sequences {
        let mut record = vec![sequence.name().unwrap_or_default().to_string()];
        record.extend(sequence.value().chars().map(String::from));
        csv_writer
            .write_record(&record)
            .map_err(|e| format!("Failed to write CSV row for '{}': {}", sequence.label(), e))?;
    }

    csv_writer.flush().map_err(write_error)
}
