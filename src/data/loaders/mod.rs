// mod.rs - Sequence file loaders

pub mod csv;
pub mod fasta;
pub mod phylip;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data::{Sequence, SequenceFormat};

pub use self::csv::read_csv;
pub use fasta::read_fasta;
pub use phylip::{read_phylip, read_phylip_tcs};

/// Options shared by all sequence loaders
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Reject a sequence whose length differs from the previous one
    pub enforce_same_length: bool,
    /// CSV only: the first field of each row is the sequence name
    pub names_included: bool,
    /// CSV only: delimiter used unless the file declares one with `sep=`
    pub delimiter: char,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            enforce_same_length: false,
            names_included: true,
            delimiter: self::csv::DEFAULT_DELIMITER,
        }
    }
}

/// Read all sequences of the given format
pub fn read_sequences<R: BufRead>(
    reader: R,
    format: SequenceFormat,
    options: &ReadOptions,
) -> Result<Vec<Sequence>, String> {
    let sequences = match format {
        SequenceFormat::Fasta => read_fasta(reader)?,
        SequenceFormat::Phylip => read_phylip(reader)?,
        SequenceFormat::PhylipTcs => read_phylip_tcs(reader)?,
        SequenceFormat::Csv => read_csv(reader, options.names_included, options.delimiter)?,
    };

    if options.enforce_same_length {
        check_same_length(&sequences)?;
    }

    log::info!("Read {} {} sequences", sequences.len(), format.description());
    Ok(sequences)
}

/// Read a sequence file, guessing the format from its extension when none is given
pub fn read_sequences_from_file<P: AsRef<Path>>(
    path: P,
    format: Option<SequenceFormat>,
    options: &ReadOptions,
) -> Result<Vec<Sequence>, String> {
    let path = path.as_ref();
    let format = match format {
        Some(format) => format,
        None => SequenceFormat::from_path(path).ok_or_else(|| {
            format!(
                "Cannot guess sequence format of '{}'. Use --input-format",
                path.display()
            )
        })?,
    };

    let file = File::open(path)
        .map_err(|e| format!("Failed to open sequence file '{}': {}", path.display(), e))?;
    read_sequences(BufReader::new(file), format, options)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))
}

/// Every sequence must have the length of its predecessor
pub fn check_same_length(sequences: &[Sequence]) -> Result<(), String> {
    for pair in sequences.windows(2) {
        if pair[0].len() != pair[1].len() {
            return Err(format!(
                "Sequence doesn't match in length with previous sequence. Name of sequence: {}",
                pair[1].label()
            ));
        }
    }
    Ok(())
}

/// Build a sequence from reader output, naming the record in errors
pub(crate) fn make_sequence(value: String, name: Option<String>) -> Result<Sequence, String> {
    let sequence = match name {
        Some(name) => Sequence::with_name(value, name.clone())
            .map_err(|_| format!("Sequence '{}' has no value", name))?,
        None => Sequence::new(value).map_err(|e| e.to_string())?,
    };
    Ok(sequence)
}
