// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.input.is_none() {
            self.input = config.input;
        }
        if self.input_format.is_none() {
            self.input_format = config.input_format;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Analysis (only override defaults, not explicit CLI values)
        if self.mode == "table" {
            if let Some(mode) = config.mode {
                self.mode = mode;
            }
        }
        if self.master.is_none() {
            self.master = config.master;
        }
        if self.format == "tsv" {
            if let Some(format) = config.format {
                self.format = format;
            }
        }
        if self.output_format == "fasta" {
            if let Some(output_format) = config.output_format {
                self.output_format = output_format;
            }
        }

        // Reading and writing
        if self.delimiter == "," {
            if let Some(delimiter) = config.delimiter {
                self.delimiter = delimiter;
            }
        }
        if self.line_width == 0 {
            if let Some(line_width) = config.line_width {
                self.line_width = line_width;
            }
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.collapse && config.collapse.unwrap_or(false) {
            self.collapse = true;
        }
        if !self.enforce_same_length && config.enforce_same_length.unwrap_or(false) {
            self.enforce_same_length = true;
        }
        if !self.no_names && config.no_names.unwrap_or(false) {
            self.no_names = true;
        }
        if !self.excel_header && config.excel_header.unwrap_or(false) {
            self.excel_header = true;
        }
        if !self.no_progress && config.no_progress.unwrap_or(false) {
            self.no_progress = true;
        }
        if !self.dry_run && config.dry_run.unwrap_or(false) {
            self.dry_run = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["hcat"], args).unwrap()
    }

    #[test]
    fn test_config_fills_defaults() {
        let config = Config {
            input: Some("from_config.fas".to_string()),
            mode: Some("matrix".to_string()),
            format: Some("nexus".to_string()),
            enforce_same_length: Some(true),
            ..Config::new()
        };
        let args = parse(&[]).merge_with_config(config);
        assert_eq!(args.input.as_deref(), Some("from_config.fas"));
        assert_eq!(args.mode, "matrix");
        assert_eq!(args.format, "nexus");
        assert!(args.enforce_same_length);
    }

    #[test]
    fn test_cli_wins() {
        let config = Config {
            input: Some("from_config.fas".to_string()),
            mode: Some("matrix".to_string()),
            master: Some("config_master".to_string()),
            ..Config::new()
        };
        let args = parse(&["--input", "cli.fas", "--mode", "json", "--master", "ref"]).merge_with_config(config);
        assert_eq!(args.input.as_deref(), Some("cli.fas"));
        assert_eq!(args.mode, "json");
        assert_eq!(args.master.as_deref(), Some("ref"));
    }
}
