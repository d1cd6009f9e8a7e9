// format.rs - Supported sequence file formats

use std::path::Path;
use std::str::FromStr;

/// Sequence file formats understood by the loaders and writers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceFormat {
    Fasta,
    Phylip,
    PhylipTcs,
    Csv,
}

impl FromStr for SequenceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fasta" | "fas" | "fa" => Ok(SequenceFormat::Fasta),
            "phylip" | "phy" => Ok(SequenceFormat::Phylip),
            "phylip-tcs" | "tcs" => Ok(SequenceFormat::PhylipTcs),
            "csv" => Ok(SequenceFormat::Csv),
            _ => Err(format!("Invalid sequence format: {}. Use: fasta, phylip, phylip-tcs, csv", s)),
        }
    }
}

impl SequenceFormat {
    pub fn description(&self) -> &str {
        match self {
            SequenceFormat::Fasta => "FASTA",
            SequenceFormat::Phylip => "Phylip",
            SequenceFormat::PhylipTcs => "Phylip (TCS)",
            SequenceFormat::Csv => "CSV",
        }
    }

    /// Guess the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "fas" | "fasta" | "fa" | "txt" => Some(SequenceFormat::Fasta),
            "phy" | "phylip" => Some(SequenceFormat::Phylip),
            "tcs" => Some(SequenceFormat::PhylipTcs),
            "csv" => Some(SequenceFormat::Csv),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(SequenceFormat::from_path("data/input.fasta"), Some(SequenceFormat::Fasta));
        assert_eq!(SequenceFormat::from_path("input.TXT"), Some(SequenceFormat::Fasta));
        assert_eq!(SequenceFormat::from_path("input.phy"), Some(SequenceFormat::Phylip));
        assert_eq!(SequenceFormat::from_path("input.tcs"), Some(SequenceFormat::PhylipTcs));
        assert_eq!(SequenceFormat::from_path("input.csv"), Some(SequenceFormat::Csv));
        assert_eq!(SequenceFormat::from_path("input.bam"), None);
        assert_eq!(SequenceFormat::from_path("input"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("FASTA".parse::<SequenceFormat>(), Ok(SequenceFormat::Fasta));
        assert_eq!("phylip-tcs".parse::<SequenceFormat>(), Ok(SequenceFormat::PhylipTcs));
        assert!("nexus".parse::<SequenceFormat>().is_err());
    }
}
