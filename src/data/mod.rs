// mod.rs - Data structures module

pub mod codon_table;
pub mod format;
pub mod loaders;
pub mod sequence;

// Re-export main types for convenience
pub use codon_table::{default_tables, find_table, read_codon_tables, CodonTransformationData};
pub use format::SequenceFormat;
pub use loaders::{read_sequences, read_sequences_from_file, ReadOptions};
pub use sequence::Sequence;
