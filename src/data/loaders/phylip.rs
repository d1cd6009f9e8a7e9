// phylip.rs - Sequential Phylip and Phylip-TCS loaders

use regex::Regex;
use std::io::BufRead;

use super::make_sequence;
use crate::data::Sequence;

/// Longest sequence name allowed by TCS
pub const TCS_MAX_NAME_LENGTH: usize = 9;

struct PhylipLines<R> {
    lines: std::iter::Enumerate<std::io::Lines<R>>,
}

impl<R: BufRead> PhylipLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines().enumerate(),
        }
    }

    /// Next non-blank line with its 1-based number
    fn next_data(&mut self) -> Result<Option<(usize, String)>, String> {
        for (line_num, line) in self.lines.by_ref() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some((line_num + 1, trimmed.to_string())));
            }
        }
        Ok(None)
    }

    /// Parse the `<count> <length>` header
    fn header(&mut self) -> Result<(usize, usize), String> {
        let pattern = Regex::new(r"^(\d+)\s+(\d+)$").map_err(|e| format!("Invalid header pattern: {}", e))?;
        let (_, line) = self.next_data()?.ok_or("No Phylip header found. Empty input")?;
        let caps = pattern.captures(&line).ok_or_else(|| {
            format!(
                "First line doesn't comply to Phylip format. Expected sequence count and sequence length, found: \"{}\"",
                line
            )
        })?;
        let count = caps[1].parse().map_err(|e| format!("Invalid sequence count: {}", e))?;
        let length = caps[2].parse().map_err(|e| format!("Invalid sequence length: {}", e))?;
        Ok((count, length))
    }
}

fn check_count(sequences: &[Sequence], expected: usize) -> Result<(), String> {
    if sequences.len() != expected {
        return Err(format!(
            "Wrong number of sequences read. Expected/Actual: {}/{}",
            expected,
            sequences.len()
        ));
    }
    Ok(())
}

/// Read sequential Phylip. A name line is followed by as many sequence lines
/// as needed to reach the length declared in the header.
pub fn read_phylip<R: BufRead>(reader: R) -> Result<Vec<Sequence>, String> {
    let mut lines = PhylipLines::new(reader);
    let (count, length) = lines.header()?;
    let mut sequences = Vec::with_capacity(count);

    while let Some((_, name)) = lines.next_data()? {
        let mut value = String::with_capacity(length);
        while value.chars().count() < length {
            match lines.next_data()? {
                Some((_, part)) => value.push_str(&part),
                None => break,
            }
        }

        let actual = value.chars().count();
        if actual == 0 {
            return Err(format!("Unexpected end reached. Sequence data of '{}' is missing", name));
        }
        if actual != length {
            return Err(format!(
                "Sequence with name {} has wrong length. Expected/Actual: {}/{}",
                name, length, actual
            ));
        }
        sequences.push(make_sequence(value, Some(name))?);
    }

    check_count(&sequences, count)?;
    Ok(sequences)
}

/// Read Phylip as written for TCS: names of at most nine characters and each
/// sequence on a single line of exactly the declared length.
pub fn read_phylip_tcs<R: BufRead>(reader: R) -> Result<Vec<Sequence>, String> {
    let mut lines = PhylipLines::new(reader);
    let (count, length) = lines.header()?;
    let mut sequences = Vec::with_capacity(count);

    while let Some((line_num, name)) = lines.next_data()? {
        if name.chars().count() > TCS_MAX_NAME_LENGTH {
            return Err(format!(
                "Sequence with name \"{}\" at line {} is too long. It can be at maximum {} characters long",
                name, line_num, TCS_MAX_NAME_LENGTH
            ));
        }
        let (_, value) = lines
            .next_data()?
            .ok_or_else(|| format!("Unexpected end reached. Sequence data of '{}' is missing", name))?;
        if value.chars().count() != length {
            return Err(format!(
                "Sequence with name {} has wrong length. Expected/Actual: {}/{}",
                name,
                length,
                value.chars().count()
            ));
        }
        sequences.push(make_sequence(value, Some(name))?);
    }

    check_count(&sequences, count)?;
    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_phylip_multiline_sequences() {
        let input = "2    8\nlong sequence name\nACGT\nACGT\n\nseq2\nTTTTAAAA\n";
        let sequences = read_phylip(Cursor::new(input)).unwrap();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].name(), Some("long sequence name"));
        assert_eq!(sequences[0].value(), "ACGTACGT");
        assert_eq!(sequences[1].value(), "TTTTAAAA");
    }

    #[test]
    fn test_phylip_errors() {
        assert!(read_phylip(Cursor::new("")).unwrap_err().contains("No Phylip header"));
        assert!(read_phylip(Cursor::new("two four\n")).unwrap_err().contains("Phylip format"));
        assert!(read_phylip(Cursor::new("1    4\nseq1\n")).unwrap_err().contains("missing"));
        assert!(read_phylip(Cursor::new("2    4\nseq1\nACGT\n"))
            .unwrap_err()
            .contains("Expected/Actual: 2/1"));
        assert!(read_phylip(Cursor::new("1    4\nseq1\nACG\nTT\n"))
            .unwrap_err()
            .contains("wrong length"));
    }

    #[test]
    fn test_tcs() {
        let input = "2    4\nseq1\nACGT\nseq2\nACGA\n";
        let sequences = read_phylip_tcs(Cursor::new(input)).unwrap();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[1].name(), Some("seq2"));
        assert_eq!(sequences[1].value(), "ACGA");
    }

    #[test]
    fn test_tcs_constraints() {
        let long_name = "1    4\nsequence10\nACGT\n";
        assert!(read_phylip_tcs(Cursor::new(long_name)).unwrap_err().contains("too long"));

        let wrong_length = "1    4\nseq1\nACGTA\n";
        assert!(read_phylip_tcs(Cursor::new(wrong_length))
            .unwrap_err()
            .contains("Expected/Actual: 4/5"));

        let missing = "1    4\nseq1\n";
        assert!(read_phylip_tcs(Cursor::new(missing)).unwrap_err().contains("missing"));
    }
}
