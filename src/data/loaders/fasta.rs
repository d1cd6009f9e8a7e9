// fasta.rs - FASTA sequence loader

use bio::io::fasta;
use std::io::Read;

use super::make_sequence;
use crate::data::Sequence;

/// Read FASTA records. The sequence name is the full header line without `>`.
pub fn read_fasta<R: Read>(reader: R) -> Result<Vec<Sequence>, String> {
    let reader = fasta::Reader::new(reader);
    let mut sequences = Vec::new();

    for (index, record_result) in reader.records().enumerate() {
        let record = record_result
            .map_err(|e| format!("Invalid FASTA record {}: {}", index + 1, e))?;

        let name = match record.desc() {
            Some(desc) => format!("{} {}", record.id(), desc),
            None => record.id().to_string(),
        };
        let value = String::from_utf8(record.seq().to_vec())
            .map_err(|e| format!("FASTA record '{}' is not valid UTF-8: {}", name, e))?;

        sequences.push(make_sequence(value, Some(name))?);
    }

    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_multiline_records() {
        let input = ">seq1 first sample\nACGT\nACGT\n\n>seq2\nTTTT\n";
        let sequences = read_fasta(Cursor::new(input)).unwrap();

        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].name(), Some("seq1 first sample"));
        assert_eq!(sequences[0].value(), "ACGTACGT");
        assert_eq!(sequences[1].name(), Some("seq2"));
        assert_eq!(sequences[1].value(), "TTTT");
    }

    #[test]
    fn test_empty_record_is_rejected() {
        let error = read_fasta(Cursor::new(">seq1\n>seq2\nACGT\n")).unwrap_err();
        assert!(error.contains("seq1"));
    }

    #[test]
    fn test_missing_header() {
        assert!(read_fasta(Cursor::new("ACGT\n")).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(read_fasta(Cursor::new("")).unwrap().is_empty());
    }
}
