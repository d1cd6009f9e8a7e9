// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// hcat - Haplotype classification and distance analysis of aligned sequences
pub struct Args {
    /// input sequence file (FASTA, Phylip, Phylip-TCS or CSV)
    #[argh(option)]
    pub input: Option<String>,

    /// input format: fasta, phylip, phylip-tcs, csv (default: guessed from extension)
    #[argh(option)]
    pub input_format: Option<String>,

    /// output file
    #[argh(option)]
    pub output: Option<String>,

    /// analysis mode: table, matrix, convert, json (default: table)
    #[argh(option, default = "String::from(\"table\")")]
    pub mode: String,

    /// name of the master sequence (default: representative of the largest haplotype)
    #[argh(option)]
    pub master: Option<String>,

    /// distance matrix format: tsv, csv, phylip, nexus (default: tsv)
    #[argh(option, default = "String::from(\"tsv\")")]
    pub format: String,

    /// sequence format written by convert mode (default: fasta)
    #[argh(option, default = "String::from(\"fasta\")")]
    pub output_format: String,

    /// convert mode: write one sequence per haplotype, named after the haplotype
    #[argh(switch)]
    pub collapse: bool,

    /// reject sequences whose length differs from the previous one
    #[argh(switch)]
    pub enforce_same_length: bool,

    /// CSV input rows carry no sequence name
    #[argh(switch)]
    pub no_names: bool,

    /// CSV delimiter character (default: ,)
    #[argh(option, default = "String::from(\",\")")]
    pub delimiter: String,

    /// write an Excel sep= line in CSV output
    #[argh(switch)]
    pub excel_header: bool,

    /// FASTA output line width, 0 writes each sequence on one line (default: 0)
    #[argh(option, default = "0")]
    pub line_width: usize,

    /// number of threads (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// hide the distance matrix progress bar
    #[argh(switch)]
    pub no_progress: bool,

    /// list the bundled codon tables and exit
    #[argh(switch)]
    pub list_codes: bool,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
