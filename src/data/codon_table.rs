// codon_table.rs - Genetic code tables in NCBI "wprintgc" text format

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::BufRead;

/// Bundled NCBI translation tables
const DEFAULT_TABLE: &str = include_str!("../../resources/codon_table.txt");

const CODONS: usize = 64;

/// Lookup tables of one genetic code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodonTransformationData {
    pub name: String,
    pub number: u32,
    /// Triplet to amino acid
    pub codon: BTreeMap<String, char>,
    /// Start triplets, mapped to `M`
    pub start: BTreeMap<String, char>,
    /// Stop triplets, mapped to `*`
    pub end: BTreeMap<String, char>,
}

impl CodonTransformationData {
    pub fn new(name: impl Into<String>, number: u32) -> Self {
        Self {
            name: name.into(),
            number,
            ..Self::default()
        }
    }

    /// Whether the character is produced by one of the stop triplets
    pub fn is_end_marker(&self, c: char) -> bool {
        self.end.values().any(|&marker| marker == c)
    }
}

#[derive(Default)]
struct PartialTable {
    name: Option<String>,
    number: u32,
    amino_acids: Option<Vec<char>>,
    starts: Option<Vec<char>>,
    base1: Option<Vec<char>>,
    base2: Option<Vec<char>>,
    base3: Option<Vec<char>>,
}

impl PartialTable {
    /// Turn a fully read table into lookup data. `None` while parts are missing.
    fn complete(&self) -> Option<CodonTransformationData> {
        let name = self.name.as_ref()?;
        let amino_acids = self.amino_acids.as_ref()?;
        let starts = self.starts.as_ref()?;
        let (base1, base2, base3) = (self.base1.as_ref()?, self.base2.as_ref()?, self.base3.as_ref()?);

        let mut data = CodonTransformationData::new(name.clone(), self.number);
        for i in 0..CODONS {
            let triplet: String = [base1[i], base2[i], base3[i]].iter().collect();
            data.codon.insert(triplet.clone(), amino_acids[i]);
            match starts[i] {
                'M' => {
                    data.start.insert(triplet, 'M');
                }
                '*' => {
                    data.end.insert(triplet, '*');
                }
                _ => {}
            }
        }
        Some(data)
    }
}

fn line_pattern(key: &str, alphabet: &str) -> Result<Regex, String> {
    Regex::new(&format!(r"^\s*({})\s*=\s*([{}]{{64}})\s*$", key, alphabet))
        .map_err(|e| format!("Invalid codon table pattern: {}", e))
}

/// Read all genetic codes from an NCBI formatted table.
///
/// A table is complete once its numbered name line, `AAs`, `Starts`, `Base1`,
/// `Base2` and `Base3` lines were seen. Unrecognized lines are ignored.
pub fn read_codon_tables<R: BufRead>(reader: R) -> Result<Vec<CodonTransformationData>, String> {
    let name_pattern = Regex::new(r"^\s*(\d+)\.?\s*(.+)$")
        .map_err(|e| format!("Invalid codon table pattern: {}", e))?;
    let aa_pattern = line_pattern("AAs", r"A-Z\*")?;
    let starts_pattern = line_pattern("Starts", r"M\-\*")?;
    let base_pattern = line_pattern("Base1|Base2|Base3", "ACGT")?;

    let mut tables = Vec::new();
    let mut partial = PartialTable::default();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| format!("Failed to read codon table line {}: {}", line_num + 1, e))?;

        if let Some(caps) = name_pattern.captures(&line) {
            partial.number = caps[1]
                .parse()
                .map_err(|e| format!("Invalid table number at line {}: {}", line_num + 1, e))?;
            partial.name = Some(caps[2].trim().to_string());
        } else if let Some(caps) = aa_pattern.captures(&line) {
            partial.amino_acids = Some(caps[2].chars().collect());
        } else if let Some(caps) = starts_pattern.captures(&line) {
            partial.starts = Some(caps[2].chars().collect());
        } else if let Some(caps) = base_pattern.captures(&line) {
            let bases = Some(caps[2].chars().collect());
            match &caps[1] {
                "Base1" => partial.base1 = bases,
                "Base2" => partial.base2 = bases,
                _ => partial.base3 = bases,
            }
        }

        if let Some(data) = partial.complete() {
            log::debug!("Read codon table {}: {}", data.number, data.name);
            tables.push(data);
            partial = PartialTable::default();
        }
    }

    Ok(tables)
}

/// Genetic codes shipped with the crate
pub fn default_tables() -> Result<Vec<CodonTransformationData>, String> {
    read_codon_tables(DEFAULT_TABLE.as_bytes())
}

/// Look up a table by its NCBI number
pub fn find_table(tables: &[CodonTransformationData], number: u32) -> Option<&CodonTransformationData> {
    tables.iter().find(|t| t.number == number)
}
