// validation.rs - Input validation utilities

use std::path::Path;
use std::str::FromStr;

use crate::cli::args::Args;
use crate::data::{ReadOptions, SequenceFormat};
use crate::output::{MatrixFormat, WriteOptions};

/// What `hcat` produces from the classified input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Haplotype table against the master sequence
    Table,
    /// Pairwise haplotype distance matrix
    Matrix,
    /// Rewrite the input sequences in another format
    Convert,
    /// Table, distances and skipped haplotypes as one JSON document
    Json,
}

impl FromStr for AnalysisMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(AnalysisMode::Table),
            "matrix" => Ok(AnalysisMode::Matrix),
            "convert" => Ok(AnalysisMode::Convert),
            "json" => Ok(AnalysisMode::Json),
            _ => Err(format!("Invalid mode '{}'. Use: table, matrix, convert, json", s)),
        }
    }
}

impl AnalysisMode {
    pub fn description(&self) -> &'static str {
        match self {
            AnalysisMode::Table => "Haplotype table",
            AnalysisMode::Matrix => "Distance matrix",
            AnalysisMode::Convert => "Sequence conversion",
            AnalysisMode::Json => "JSON report",
        }
    }

    /// Whether the mode needs the pairwise distance matrix
    pub fn needs_matrix(&self) -> bool {
        matches!(self, AnalysisMode::Matrix | AnalysisMode::Json)
    }
}

#[derive(Debug)]
pub struct ValidationResult {
    pub input: String,
    pub output: String,
    pub mode: AnalysisMode,
    pub input_format: SequenceFormat,
    pub matrix_format: MatrixFormat,
    pub output_format: SequenceFormat,
    pub read_options: ReadOptions,
    pub write_options: WriteOptions,
}

fn parse_char(value: &str, option: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("--{} must be a single character, found '{}'", option, value)),
    }
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    let input = args.input.clone().ok_or("--input is required")?;
    let output = args.output.clone().ok_or("--output is required")?;

    if !Path::new(&input).exists() {
        return Err(format!("Input file '{}' does not exist", input));
    }

    let mode = AnalysisMode::from_str(&args.mode)?;

    let input_format = match &args.input_format {
        Some(format) => SequenceFormat::from_str(format)?,
        None => SequenceFormat::from_path(&input).ok_or_else(|| {
            format!("Cannot guess sequence format of '{}'. Use --input-format", input)
        })?,
    };

    let matrix_format = MatrixFormat::from_str(&args.format)?;
    let output_format = SequenceFormat::from_str(&args.output_format)?;

    let delimiter = parse_char(&args.delimiter, "delimiter")?;
    if !delimiter.is_ascii() {
        return Err(format!("--delimiter must be an ASCII character, found '{}'", delimiter));
    }

    if args.threads == Some(0) {
        return Err("--threads must be at least 1".to_string());
    }

    if args.master.is_some() && mode == AnalysisMode::Convert {
        println!("⚠️  --master is ignored in convert mode");
    }

    Ok(ValidationResult {
        input,
        output,
        mode,
        input_format,
        matrix_format,
        output_format,
        read_options: ReadOptions {
            enforce_same_length: args.enforce_same_length,
            names_included: !args.no_names,
            delimiter,
        },
        write_options: WriteOptions {
            line_width: args.line_width,
            delimiter,
            excel_header: args.excel_header,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn temp_input(name: &str) -> String {
        let path = std::env::temp_dir().join(format!("hcat-{}-{}", std::process::id(), name));
        std::fs::write(&path, ">a\nACGT\n").unwrap();
        path.to_string_lossy().into_owned()
    }

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["hcat"], args).unwrap()
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Matrix".parse::<AnalysisMode>(), Ok(AnalysisMode::Matrix));
        assert!("tree".parse::<AnalysisMode>().is_err());
        assert!(AnalysisMode::Json.needs_matrix());
        assert!(!AnalysisMode::Table.needs_matrix());
    }

    #[test]
    fn test_valid_arguments() {
        let input = temp_input("valid.fas");
        let args = parse(&["--input", &input, "--output", "out.tsv", "--mode", "matrix", "--format", "nexus"]);
        let result = validate_args(&args).unwrap();
        std::fs::remove_file(&input).ok();

        assert_eq!(result.mode, AnalysisMode::Matrix);
        assert_eq!(result.input_format, SequenceFormat::Fasta);
        assert_eq!(result.matrix_format, MatrixFormat::Nexus);
        assert_eq!(result.output_format, SequenceFormat::Fasta);
        assert!(result.read_options.names_included);
    }

    #[test]
    fn test_missing_and_invalid_arguments() {
        assert!(validate_args(&parse(&["--output", "out.tsv"])).unwrap_err().contains("--input"));
        assert!(validate_args(&parse(&["--input", "missing.fas", "--output", "o"]))
            .unwrap_err()
            .contains("does not exist"));

        let input = temp_input("invalid.fas");
        let bad_mode = validate_args(&parse(&["--input", &input, "--output", "o", "--mode", "tree"]));
        let bad_delimiter = validate_args(&parse(&["--input", &input, "--output", "o", "--delimiter", ";;"]));
        let bad_threads = validate_args(&parse(&["--input", &input, "--output", "o", "--threads", "0"]));
        std::fs::remove_file(&input).ok();

        assert!(bad_mode.unwrap_err().contains("Invalid mode"));
        assert!(bad_delimiter.unwrap_err().contains("single character"));
        assert!(bad_threads.is_err());
    }
}
