// translate.rs - Translate nucleotide sequences into amino acids

use clap::{value_parser, Arg, ArgAction, Command};
use std::fs::File;
use std::io::BufReader;

use hcat::data::read_codon_tables;
use hcat::output::{write_sequences_to_file, WriteOptions};
use hcat::prelude::*;

fn load_tables(path: Option<&String>) -> Result<Vec<CodonTransformationData>, String> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("Failed to open codon table file '{}': {}", path, e))?;
            read_codon_tables(BufReader::new(file))
        }
        None => default_tables(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("hcat-translate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translates nucleotide sequences into amino acid sequences")
        .arg(Arg::new("input")
            .long("input")
            .value_name("FILE")
            .help("Input sequence file (FASTA, Phylip, Phylip-TCS or CSV)")
            .required(true))
        .arg(Arg::new("input-format")
            .long("input-format")
            .value_name("FORMAT")
            .help("Input format: fasta, phylip, phylip-tcs, csv (default: guessed from extension)"))
        .arg(Arg::new("output")
            .long("output")
            .value_name("FILE")
            .help("Output FASTA file")
            .required(true))
        .arg(Arg::new("table")
            .long("table")
            .value_name("NUMBER")
            .help("NCBI translation table number (default: 1)")
            .value_parser(value_parser!(u32))
            .default_value("1"))
        .arg(Arg::new("codon-table-file")
            .long("codon-table-file")
            .value_name("FILE")
            .help("Read codon tables from this file instead of the bundled ones"))
        .arg(Arg::new("offset")
            .long("offset")
            .value_name("N")
            .help("Reading frame offset (default: detected per sequence)")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("alternative-start")
            .long("alternative-start")
            .value_name("INDEX")
            .help("Triplet index translated with the start table (repeatable)")
            .value_parser(value_parser!(usize))
            .action(ArgAction::Append))
        .arg(Arg::new("alternative-end")
            .long("alternative-end")
            .value_name("INDEX")
            .help("Triplet index translated with the end table (repeatable)")
            .value_parser(value_parser!(usize))
            .action(ArgAction::Append))
        .get_matches();

    let input = matches.get_one::<String>("input").ok_or("--input is required")?;
    let output = matches.get_one::<String>("output").ok_or("--output is required")?;
    let table_number = *matches.get_one::<u32>("table").ok_or("--table is required")?;
    let offset = matches.get_one::<usize>("offset").copied();
    let format = matches
        .get_one::<String>("input-format")
        .map(|f| f.parse::<SequenceFormat>())
        .transpose()?;

    let tables = load_tables(matches.get_one::<String>("codon-table-file"))?;
    let table = find_table(&tables, table_number)
        .ok_or_else(|| format!("Codon table {} not found. Use hcat --list-codes", table_number))?;

    let transformer = CodonTransformer::new(table)
        .with_alternative_start(matches.get_many::<usize>("alternative-start").into_iter().flatten().copied())
        .with_alternative_end(matches.get_many::<usize>("alternative-end").into_iter().flatten().copied());

    println!("🧬 hcat-translate v{}", env!("CARGO_PKG_VERSION"));
    println!("📋 Codon table: {}. {}", table.number, table.name);

    let sequences = read_sequences_from_file(input, format, &ReadOptions::default())?;
    println!("📊 Loaded {} sequences from {}", sequences.len(), input);

    let mut translated = Vec::with_capacity(sequences.len());
    for sequence in &sequences {
        let protein = match offset {
            Some(offset) => transformer.transform(sequence, offset)?,
            None => {
                log::info!(
                    "Sequence {} read from offset {}",
                    sequence.label(),
                    transformer.detect_offset(sequence)
                );
                transformer.transform_auto(sequence)
            }
        };
        translated.push(protein);
    }

    write_sequences_to_file(output, &translated, SequenceFormat::Fasta, &WriteOptions::default())?;
    Ok(())
}
