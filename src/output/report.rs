// report.rs - JSON analysis report

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{create_output, finish};
use crate::core::comparison::MasterComparison;
use crate::core::distance::DistanceMatrix;

#[derive(Debug, Clone, Serialize)]
pub struct MasterEntry {
    pub name: Option<String>,
    pub value: String,
    pub haplotype: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HaplotypeEntry {
    pub name: String,
    pub members: Vec<String>,
    pub count: usize,
    pub difference: String,
    pub distance_to_master: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DistanceEntry {
    pub first: String,
    pub second: String,
    pub distance: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DistanceSummary {
    pub pairs: Vec<DistanceEntry>,
    pub min: Option<usize>,
    pub max: Option<usize>,
}

/// Everything computed for one input file, ready for `serde_json`
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub version: String,
    pub generated: DateTime<Utc>,
    pub master: MasterEntry,
    /// 1-based positions where at least one haplotype differs from the master
    pub positions: Vec<usize>,
    pub haplotypes: Vec<HaplotypeEntry>,
    pub skipped: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<DistanceSummary>,
}

pub fn build_report(comparison: &MasterComparison<'_>, matrix: Option<&DistanceMatrix<'_>>) -> AnalysisReport {
    let master = comparison.master();

    let haplotypes = comparison
        .iter()
        .map(|(haplotype, difference)| HaplotypeEntry {
            name: haplotype.label().to_string(),
            members: haplotype.member_names().into_iter().map(String::from).collect(),
            count: haplotype.len(),
            difference: difference.difference().to_string(),
            distance_to_master: difference.distance(),
        })
        .collect();

    let distances = matrix.map(|matrix| {
        let names = matrix.haplotypes();
        DistanceSummary {
            pairs: matrix
                .pairs()
                .map(|(i, j, distance)| DistanceEntry {
                    first: names[i].label().to_string(),
                    second: names[j].label().to_string(),
                    distance,
                })
                .collect(),
            min: matrix.min_distance(),
            max: matrix.max_distance(),
        }
    });

    AnalysisReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        generated: Utc::now(),
        master: MasterEntry {
            name: master.name().map(String::from),
            value: master.value().to_string(),
            haplotype: comparison.master_haplotype().map(|h| h.label().to_string()),
        },
        positions: comparison.positions().into_iter().map(|p| p + 1).collect(),
        haplotypes,
        skipped: comparison.skipped().iter().map(|e| e.to_string()).collect(),
        distances,
    }
}

pub fn write_report_to_file(file_path: &str, report: &AnalysisReport) -> Result<(), String> {
    let mut writer = create_output(file_path)?;
    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;
    finish(&mut writer)?;
    println!("✅ JSON report written to: {}", file_path);
    Ok(())
}
