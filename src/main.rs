// main.rs - CLI entry point

use std::time::Instant;

use hcat::cli::{AnalysisMode, Config};
use hcat::core::{compare_to_master, largest_haplotype, MasterComparison};
use hcat::output::{
    build_report, write_haplotype_table_to_file, write_matrix_to_file, write_report_to_file,
    write_sequences_to_file,
};
use hcat::prelude::*;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    if args.list_codes {
        return list_codes();
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let validation = validate_args(&args)?;

    println!("🚀 hcat v{}", env!("CARGO_PKG_VERSION"));
    println!("📋 Mode: {}", validation.mode.description());

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    let total_start = Instant::now();

    let sequences = read_sequences_from_file(
        &validation.input,
        Some(validation.input_format),
        &validation.read_options,
    )?;
    if sequences.is_empty() {
        return Err(format!("No sequences found in '{}'", validation.input));
    }
    println!(
        "📊 Loaded {} sequences from {} ({})",
        sequences.len(),
        validation.input,
        validation.input_format.description()
    );

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    if validation.mode == AnalysisMode::Convert {
        let sequences = if args.collapse {
            let haplotypes = classify(sequences);
            println!("🧬 Collapsed into {} haplotypes", haplotypes.len());
            haplotypes.iter().filter_map(|h| h.as_sequence()).collect()
        } else {
            sequences
        };
        write_sequences_to_file(
            &validation.output,
            &sequences,
            validation.output_format,
            &validation.write_options,
        )?;
        println!("⏱️  Total time: {:.2}s", total_start.elapsed().as_secs_f64());
        return Ok(());
    }

    let haplotypes = classify(sequences);
    println!("🧬 Found {} haplotypes", haplotypes.len());

    let matrix = if validation.mode.needs_matrix() {
        let matrix = if args.no_progress {
            DistanceMatrix::build(&haplotypes)
        } else {
            DistanceMatrix::build_with_progress(&haplotypes)
        };
        if let (Some(min), Some(max)) = (matrix.min_distance(), matrix.max_distance()) {
            println!("📏 Distance range: {} - {}", min, max);
        }
        Some(matrix)
    } else {
        None
    };

    match validation.mode {
        AnalysisMode::Table => {
            let comparison = master_comparison(&haplotypes, args.master.as_deref())?;
            report_skipped(&comparison);
            write_haplotype_table_to_file(&validation.output, &comparison, Some(&command_line))?;
        }
        AnalysisMode::Matrix => {
            if let Some(matrix) = &matrix {
                write_matrix_to_file(&validation.output, matrix, validation.matrix_format, Some(&command_line))?;
            }
        }
        AnalysisMode::Json => {
            let comparison = master_comparison(&haplotypes, args.master.as_deref())?;
            report_skipped(&comparison);
            let report = build_report(&comparison, matrix.as_ref());
            write_report_to_file(&validation.output, &report)?;
        }
        AnalysisMode::Convert => {}
    }

    println!("⏱️  Total time: {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}

/// Compare against the named master, or the representative of the largest
/// haplotype when no name is given
fn master_comparison<'a>(
    haplotypes: &'a [Haplotype],
    master_name: Option<&str>,
) -> Result<MasterComparison<'a>, String> {
    match master_name {
        Some(name) => {
            let comparison = compare_to_master_by_name(haplotypes, name)
                .ok_or_else(|| format!("Master sequence '{}' not found in input", name))?;
            println!("🎯 Master: {}", name);
            Ok(comparison)
        }
        None => {
            let master = largest_haplotype(haplotypes)
                .and_then(|h| h.first())
                .ok_or("No haplotype available to select a master sequence")?;
            println!("🎯 Master: {} (largest haplotype)", master.label());
            Ok(compare_to_master(haplotypes, master))
        }
    }
}

fn report_skipped(comparison: &MasterComparison<'_>) {
    if comparison.skipped().is_empty() {
        return;
    }
    println!(
        "⚠️  {} haplotypes skipped (length differs from master):",
        comparison.skipped().len()
    );
    for error in comparison.skipped() {
        println!("   - {}", error);
    }
}

fn list_codes() -> Result<(), String> {
    let tables = default_tables()?;
    println!("🧬 Available codon tables:");
    for table in &tables {
        println!("  {:>2}. {}", table.number, table.name);
    }
    Ok(())
}
