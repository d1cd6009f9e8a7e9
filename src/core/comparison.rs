// comparison.rs - Haplotype comparison against a master sequence

use std::collections::BTreeSet;

use crate::core::difference::Difference;
use crate::core::error::HcatError;
use crate::core::haplotype::Haplotype;
use crate::data::Sequence;

/// Differences of every comparable haplotype against one master sequence.
///
/// Entries follow the haplotype input order. Haplotypes whose representative
/// length differs from the master are kept in [`MasterComparison::skipped`].
#[derive(Debug, Clone)]
pub struct MasterComparison<'a> {
    master: &'a Sequence,
    entries: Vec<(&'a Haplotype, Difference<'a>)>,
    skipped: Vec<HcatError>,
}

impl<'a> MasterComparison<'a> {
    pub fn master(&self) -> &'a Sequence {
        self.master
    }

    pub fn entries(&self) -> &[(&'a Haplotype, Difference<'a>)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a Haplotype, &Difference<'a>)> + '_ {
        self.entries.iter().map(|(h, d)| (*h, d))
    }

    /// Difference recorded for a haplotype of the compared slice. Lookup is by
    /// identity, not by value.
    pub fn get(&self, haplotype: &Haplotype) -> Option<&Difference<'a>> {
        self.entries
            .iter()
            .find(|(h, _)| std::ptr::eq(*h, haplotype))
            .map(|(_, d)| d)
    }

    /// Compared haplotype whose value equals the master's, ignoring names
    pub fn master_haplotype(&self) -> Option<&'a Haplotype> {
        self.entries
            .iter()
            .find(|(h, _)| h.belongs_to(self.master))
            .map(|(h, _)| *h)
    }

    /// Union of all difference positions, sorted
    pub fn positions(&self) -> BTreeSet<usize> {
        self.entries
            .iter()
            .flat_map(|(_, d)| d.positions())
            .collect()
    }

    pub fn skipped(&self) -> &[HcatError] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compare the representative of every non-empty haplotype to the master.
///
/// A haplotype whose representative has a different length than the master is
/// skipped with a warning.
pub fn compare_to_master<'a>(haplotypes: &'a [Haplotype], master: &'a Sequence) -> MasterComparison<'a> {
    let mut entries = Vec::with_capacity(haplotypes.len());
    let mut skipped = Vec::new();

    for haplotype in haplotypes {
        let Some(representative) = haplotype.first() else {
            continue;
        };
        if representative.len() != master.len() {
            let error = HcatError::LengthMismatch {
                name: haplotype.label().to_string(),
                expected: master.len(),
                actual: representative.len(),
            };
            log::warn!("{}", error);
            skipped.push(error);
            continue;
        }
        entries.push((haplotype, Difference::new(master, representative)));
    }

    MasterComparison {
        master,
        entries,
        skipped,
    }
}

/// Compare against the member sequence with the given name. Returns `None`
/// when no member carries that name.
pub fn compare_to_master_by_name<'a>(haplotypes: &'a [Haplotype], master_name: &str) -> Option<MasterComparison<'a>> {
    let master = haplotypes
        .iter()
        .flat_map(|h| h.iter())
        .find(|s| s.name() == Some(master_name))?;
    Some(compare_to_master(haplotypes, master))
}
