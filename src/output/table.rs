// table.rs - Haplotype table writer

use std::io::Write;

use super::{create_output, finish, write_error, write_run_header};
use crate::core::comparison::MasterComparison;
use crate::core::haplotype::Haplotype;

const MEMBER_SEPARATOR: &str = "; ";

fn row_prefix(haplotype: &Haplotype) -> String {
    format!(
        "{}\t{}\t{}",
        haplotype.label(),
        haplotype.member_names().join(MEMBER_SEPARATOR),
        haplotype.len()
    )
}

fn chars_at(value: &str, positions: &[usize]) -> String {
    let chars: Vec<char> = value.chars().collect();
    positions
        .iter()
        .map(|&p| format!("\t{}", chars.get(p).copied().unwrap_or(' ')))
        .collect()
}

/// Write a tab-separated table with one column per differing position.
///
/// The first data row is the master's haplotype showing the master's
/// characters, the following rows show each haplotype's difference string at
/// the same positions.
pub fn write_haplotype_table<W: Write>(
    writer: &mut W,
    comparison: &MasterComparison<'_>,
    command_line: Option<&str>,
) -> Result<(), String> {
    let master = comparison.master();
    let master_haplotype = comparison.master_haplotype().ok_or_else(|| {
        format!(
            "Sequence does not belong to any haplotype. Can not write out haplotype table. Sequence name: {}",
            master.label()
        )
    })?;

    if let Some(command_line) = command_line {
        write_run_header(writer, command_line, "# ", "")?;
    }

    let positions: Vec<usize> = comparison.positions().into_iter().collect();

    let header: String = positions.iter().map(|p| format!("\t{}", p + 1)).collect();
    writeln!(writer, "Haplotype\tSequences\tCount{}", header).map_err(write_error)?;

    writeln!(
        writer,
        "{}{}",
        row_prefix(master_haplotype),
        chars_at(master.value(), &positions)
    )
    .map_err(write_error)?;

    for (haplotype, difference) in comparison.iter() {
        if std::ptr::eq(haplotype, master_haplotype) {
            continue;
        }
        writeln!(
            writer,
            "{}{}",
            row_prefix(haplotype),
            chars_at(difference.difference(), &positions)
        )
        .map_err(write_error)?;
    }

    log::info!(
        "Haplotype table written: {} haplotypes, {} differing positions",
        comparison.len(),
        positions.len()
    );
    Ok(())
}

pub fn write_haplotype_table_to_file(
    file_path: &str,
    comparison: &MasterComparison<'_>,
    command_line: Option<&str>,
) -> Result<(), String> {
    let mut writer = create_output(file_path)?;
    write_haplotype_table(&mut writer, comparison, command_line)?;
    finish(&mut writer)?;
    println!("✅ Haplotype table written to: {}", file_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::comparison::compare_to_master;
    use crate::core::haplotype::classify;
    use crate::data::Sequence;

    fn named(value: &str, name: &str) -> Sequence {
        Sequence::with_name(value, name).unwrap()
    }

    fn render(comparison: &MasterComparison<'_>) -> Result<String, String> {
        let mut buffer = Vec::new();
        write_haplotype_table(&mut buffer, comparison, None)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn test_master_row_comes_first() {
        let haplotypes = classify(vec![
            named("BBCDD", "FrontAndBack"),
            named("ABBDE", "Mid"),
            named("ABBDE", "Mid2"),
            named("ABCDE", "Master"),
        ]);
        let master = named("ABCDE", "Master");
        let comparison = compare_to_master(&haplotypes, &master);

        let expected = "Haplotype\tSequences\tCount\t1\t3\t5\n\
                        Hap3\tMaster\t1\tA\tC\tE\n\
                        Hap1\tFrontAndBack\t1\tB\t.\tD\n\
                        Hap2\tMid; Mid2\t2\t.\tB\t.\n";
        assert_eq!(render(&comparison).unwrap(), expected);
    }

    #[test]
    fn test_master_without_haplotype() {
        let haplotypes = classify(vec![named("BBCDD", "FrontAndBack")]);
        let master = named("ABCDE", "Master");
        let comparison = compare_to_master(&haplotypes, &master);

        let error = render(&comparison).unwrap_err();
        assert!(error.contains("Sequence name: Master"));
    }

    #[test]
    fn test_identical_sequences_have_no_position_columns() {
        let haplotypes = classify(vec![named("ACGT", "a"), named("ACGT", "b")]);
        let comparison = compare_to_master(&haplotypes, &haplotypes[0].sequences()[1]);
        assert_eq!(
            render(&comparison).unwrap(),
            "Haplotype\tSequences\tCount\nHap1\ta; b\t2\n"
        );
    }

    #[test]
    fn test_command_header() {
        let haplotypes = classify(vec![named("ACGT", "a")]);
        let comparison = compare_to_master(&haplotypes, &haplotypes[0].sequences()[0]);
        let mut buffer = Vec::new();
        write_haplotype_table(&mut buffer, &comparison, Some("hcat --input a.fas")).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("# Command: hcat --input a.fas\n# Generated: "));
        assert!(output.ends_with("Haplotype\tSequences\tCount\nHap1\ta\t1\n"));
    }

    #[test]
    fn test_unnamed_master_finds_haplotype_by_value() {
        let haplotypes = classify(vec![named("ABCDE", "s1"), named("ABBDE", "s2")]);
        let master = Sequence::new("ABCDE").unwrap();
        let comparison = compare_to_master(&haplotypes, &master);

        let expected = "Haplotype\tSequences\tCount\t3\n\
                        Hap1\ts1\t1\tC\n\
                        Hap2\ts2\t1\tB\n";
        assert_eq!(render(&comparison).unwrap(), expected);
    }
}
