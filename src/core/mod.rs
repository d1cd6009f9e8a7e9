// mod.rs - Core logic module

pub mod codon;
pub mod comparison;
pub mod difference;
pub mod distance;
pub mod error;
pub mod haplotype;

// Re-export main types for convenience
pub use codon::{CodonTransformer, INVALID_CODON};
pub use comparison::{compare_to_master, compare_to_master_by_name, MasterComparison};
pub use difference::{Difference, DEFAULT_NO_DIFFERENCE};
pub use distance::DistanceMatrix;
pub use error::{HcatError, Result};
pub use haplotype::{classify, find_haplotype, largest_haplotype, unwrap_haplotypes, Haplotype};
