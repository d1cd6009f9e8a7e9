// lib.rs - hcat library root

//! # hcat - Haplotype classification and analysis of aligned sequences
//!
//! This library groups aligned DNA sequences into haplotypes, compares every
//! haplotype against a master sequence position by position and computes
//! pairwise distances between haplotypes. It also translates nucleotide
//! sequences into amino acids with NCBI codon tables, detecting the reading
//! frame when none is given.
//!
//! ## Features
//!
//! - **Haplotype classification**: identical sequences grouped in first-seen order
//! - **Master comparison**: per-position difference strings and distances
//! - **Distance matrix**: parallel pairwise distances over haplotypes
//! - **Codon translation**: reading-frame detection with alternative start/stop codons
//! - **Multiple formats**: FASTA, Phylip, Phylip-TCS and CSV input and output
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use hcat::prelude::*;
//!
//! let sequences = read_sequences_from_file("sequences.fas", None, &ReadOptions::default())?;
//! let haplotypes = classify(sequences);
//!
//! let comparison = compare_to_master_by_name(&haplotypes, "reference")
//!     .ok_or("reference sequence not found")?;
//! for (haplotype, difference) in comparison.iter() {
//!     println!("{}\t{}\t{}", haplotype.label(), difference, difference.distance());
//! }
//!
//! let matrix = DistanceMatrix::build(&haplotypes);
//! println!("max distance: {:?}", matrix.max_distance());
//!
//! let tables = default_tables()?;
//! let standard = find_table(&tables, 1).ok_or("no standard table")?;
//! let protein = CodonTransformer::new(standard).transform_auto(&Sequence::new("ATGGCCTAA")?);
//! println!("{}", protein);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{classify, compare_to_master, compare_to_master_by_name};
    pub use crate::core::{CodonTransformer, Difference, DistanceMatrix, Haplotype, HcatError};
    pub use crate::data::{default_tables, find_table, read_sequences_from_file};
    pub use crate::data::{CodonTransformationData, ReadOptions, Sequence, SequenceFormat};
    pub use crate::output::{write_haplotype_table, write_matrix, write_sequences, MatrixFormat};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, ValidationResult};
pub use core::{CodonTransformer, Difference, DistanceMatrix, Haplotype, HcatError};
pub use data::{CodonTransformationData, Sequence, SequenceFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "hcat v{} - Haplotype classification and analysis of aligned sequences",
        VERSION
    )
}
