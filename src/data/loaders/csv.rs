// csv.rs - CSV sequence loader

use std::io::Read;

use super::make_sequence;
use crate::data::Sequence;

pub const DEFAULT_DELIMITER: char = ',';

/// Excel style delimiter declaration on the first line, e.g. `sep=;`
const DELIMITER_HEADER: &str = "sep=";

/// Read one sequence per row. When names are included the first field is the
/// name, all remaining fields are concatenated into the value.
pub fn read_csv<R: Read>(mut reader: R, names_included: bool, delimiter: char) -> Result<Vec<Sequence>, String> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| format!("Failed to read CSV input: {}", e))?;

    let (delimiter, body) = split_delimiter_header(&content, delimiter);
    if !delimiter.is_ascii() {
        return Err(format!("CSV delimiter must be an ASCII character, found '{}'", delimiter));
    }

    let mut csv_reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter as u8)
        .from_reader(body.as_bytes());

    let mut sequences = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| format!("Invalid CSV row {}: {}", row + 1, e))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let sequence = if names_included {
            let name = record.get(0).unwrap_or_default().trim().to_string();
            let value: String = record.iter().skip(1).map(str::trim).collect();
            make_sequence(value, Some(name))?
        } else {
            let value: String = record.iter().map(str::trim).collect();
            make_sequence(value, None).map_err(|e| format!("CSV row {}: {}", row + 1, e))?
        };
        sequences.push(sequence);
    }

    Ok(sequences)
}

/// Strip a `sep=` first line, returning the delimiter to use and the rest
fn split_delimiter_header(content: &str, default: char) -> (char, &str) {
    if let Some(rest) = content.strip_prefix(DELIMITER_HEADER) {
        let mut chars = rest.chars();
        if let Some(delimiter) = chars.next().filter(|c| *c != '\n' && *c != '\r') {
            log::info!("Found delimiter character in CSV file: '{}'", delimiter);
            let body = chars.as_str();
            let body = body.split_once('\n').map_or("", |(_, tail)| tail);
            return (delimiter, body);
        }
    }
    (default, content)
}
