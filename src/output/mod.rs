// mod.rs - Output writers module

pub mod matrix;
pub mod report;
pub mod sequences;
pub mod table;

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub use matrix::{write_matrix, write_matrix_to_file, MatrixFormat};
pub use report::{build_report, write_report_to_file, AnalysisReport};
pub use sequences::{write_sequences, write_sequences_to_file, WriteOptions};
pub use table::{write_haplotype_table, write_haplotype_table_to_file};

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

/// Create a buffered output file, creating missing parent directories
pub(crate) fn create_output(file_path: &str) -> Result<BufWriter<File>, String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    Ok(BufWriter::new(file))
}

pub(crate) fn write_error(e: std::io::Error) -> String {
    format!("Write error: {}", e)
}

/// Write the command, timestamp and version as comment lines
pub(crate) fn write_run_header<W: Write>(
    writer: &mut W,
    command_line: &str,
    open: &str,
    close: &str,
) -> Result<(), String> {
    writeln!(writer, "{}Command: {}{}", open, command_line, close).map_err(write_error)?;
    writeln!(
        writer,
        "{}Generated: {}{}",
        open,
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        close
    )
    .map_err(write_error)?;
    writeln!(writer, "{}hcat v{}{}", open, env!("CARGO_PKG_VERSION"), close).map_err(write_error)?;
    Ok(())
}

pub(crate) fn finish<W: Write>(mut writer: W) -> Result<(), String> {
    writer.flush().map_err(|e| format!("Flush error: {}", e))
}
