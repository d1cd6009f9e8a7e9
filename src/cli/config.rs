// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input: Option<String>,
    pub input_format: Option<String>,
    pub output: Option<String>,

    // Analysis
    pub mode: Option<String>,
    pub master: Option<String>,
    pub format: Option<String>,
    pub output_format: Option<String>,
    pub collapse: Option<bool>,

    // Reading and writing
    pub enforce_same_length: Option<bool>,
    pub no_names: Option<bool>,
    pub delimiter: Option<String>,
    pub excel_header: Option<bool>,
    pub line_width: Option<usize>,

    // Performance
    pub threads: Option<usize>,
    pub no_progress: Option<bool>,

    // Flags
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# hcat.toml - Configuration file for hcat
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Input sequence file (FASTA, Phylip, Phylip-TCS or CSV)
input = "/path/to/sequences.fas"

# Input format: fasta, phylip, phylip-tcs, csv
# Omit to guess from the file extension
# input_format = "fasta"

# Output file
output = "haplotypes.tsv"

# =============================================================================
# ANALYSIS
# =============================================================================

# Analysis mode: table, matrix, convert, json
mode = "table"

# Name of the master sequence
# Omit to use the representative of the largest haplotype
# master = "reference"

# Distance matrix format: tsv, csv, phylip, nexus
format = "tsv"

# Sequence format written by convert mode: fasta, phylip, phylip-tcs, csv
output_format = "fasta"

# Convert mode: write one sequence per haplotype, named after the haplotype
collapse = false

# =============================================================================
# READING AND WRITING
# =============================================================================

# Reject sequences whose length differs from the previous one
enforce_same_length = false

# CSV input rows carry no sequence name
no_names = false

# CSV delimiter character
delimiter = ","

# Write an Excel sep= line in CSV output
excel_header = false

# FASTA output line width, 0 writes each sequence on one line
line_width = 0

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
threads = 8

# Hide the distance matrix progress bar
no_progress = false

# =============================================================================
# FLAGS
# =============================================================================

# Validate inputs without computation (dry run)
dry_run = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.mode.as_deref(), Some("table"));
        assert_eq!(config.format.as_deref(), Some("tsv"));
        assert_eq!(config.master, None);
        assert_eq!(config.threads, Some(8));
        assert_eq!(config.enforce_same_length, Some(false));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("hcat-config-{}.toml", std::process::id()));
        let config = Config {
            input: Some("sequences.phy".to_string()),
            master: Some("ref".to_string()),
            line_width: Some(60),
            ..Config::new()
        };
        config.to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_toml() {
        let path = std::env::temp_dir().join(format!("hcat-invalid-{}.toml", std::process::id()));
        std::fs::write(&path, "mode = [").unwrap();
        let error = Config::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(error.contains("Failed to parse config file"));
    }
}
