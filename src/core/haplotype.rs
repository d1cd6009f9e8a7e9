// haplotype.rs - Grouping of identical sequences into haplotypes

use serde::{Deserialize, Serialize};

use crate::core::error::{HcatError, Result};
use crate::data::Sequence;

/// Prefix of generated haplotype names
pub const HAPLOTYPE_PREFIX: &str = "Hap";

/// A group of sequences sharing the same value.
///
/// The first member fixes the value of the group. Members keep their insertion
/// order. Every added sequence is a member of its own, even when an equal
/// sequence was added before.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Haplotype {
    sequences: Vec<Sequence>,
    name: Option<String>,
}

impl Haplotype {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            sequences: Vec::new(),
            name: Some(name.into()),
        }
    }

    pub fn from_sequence(sequence: Sequence) -> Self {
        Self {
            sequences: vec![sequence],
            name: None,
        }
    }

    /// Whether the sequence may join this haplotype. An empty haplotype
    /// accepts any sequence.
    pub fn belongs_to(&self, sequence: &Sequence) -> bool {
        match self.sequences.first() {
            Some(first) => first.equal_seq(sequence),
            None => true,
        }
    }

    /// Add a member. Fails when the value differs from the group's value.
    pub fn add(&mut self, sequence: Sequence) -> Result<()> {
        if !self.belongs_to(&sequence) {
            return Err(HcatError::InvalidArgument(format!(
                "Sequence {} does not belong to haplotype {}",
                sequence,
                self.label()
            )));
        }
        self.sequences.push(sequence);
        Ok(())
    }

    /// Representative member
    pub fn first(&self) -> Option<&Sequence> {
        self.sequences.first()
    }

    /// The representative value under the haplotype's name
    pub fn as_sequence(&self) -> Option<Sequence> {
        self.first()
            .map(|first| Sequence::unchecked(first.value().to_string(), self.name.clone()))
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.sequences.iter()
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn contains(&self, sequence: &Sequence) -> bool {
        self.sequences.contains(sequence)
    }

    /// Names of all named members, in insertion order
    pub fn member_names(&self) -> Vec<&str> {
        self.sequences.iter().filter_map(|s| s.name()).collect()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Identifier for messages: the haplotype name, else the first member's name
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or_else(|| self.first().and_then(|s| s.name()))
            .unwrap_or("<unnamed>")
    }
}

impl<'a> IntoIterator for &'a Haplotype {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.iter()
    }
}

/// Group sequences into haplotypes.
///
/// Groups keep first-seen order, members keep input order. Groups are named
/// `Hap<n>` with n zero-padded to the digit count of the group total.
pub fn classify<I>(sequences: I) -> Vec<Haplotype>
where
    I: IntoIterator<Item = Sequence>,
{
    let mut haplotypes: Vec<Haplotype> = Vec::new();

    for sequence in sequences {
        match haplotypes
            .iter_mut()
            .find(|h| h.first().is_some_and(|first| first.equal_seq(&sequence)))
        {
            Some(haplotype) => haplotype.sequences.push(sequence),
            None => haplotypes.push(Haplotype::from_sequence(sequence)),
        }
    }

    let total = haplotypes.len();
    for (i, haplotype) in haplotypes.iter_mut().enumerate() {
        haplotype.name = Some(haplotype_name(i + 1, total));
    }

    log::info!("Classified sequences into {} haplotypes", total);
    haplotypes
}

/// Name of the index-th (1-based) haplotype out of `total`
pub fn haplotype_name(index: usize, total: usize) -> String {
    let width = total.max(1).to_string().len();
    format!("{}{:0width$}", HAPLOTYPE_PREFIX, index, width = width)
}

/// Flatten haplotypes back into their member sequences
pub fn unwrap_haplotypes(haplotypes: &[Haplotype]) -> Vec<Sequence> {
    haplotypes
        .iter()
        .flat_map(|h| h.sequences.iter().cloned())
        .collect()
}

/// First non-empty haplotype the sequence belongs to
pub fn find_haplotype<'a>(sequence: &Sequence, haplotypes: &'a [Haplotype]) -> Option<&'a Haplotype> {
    haplotypes
        .iter()
        .find(|h| !h.is_empty() && h.belongs_to(sequence))
}

/// Haplotype with the most members, the earliest one on ties
pub fn largest_haplotype(haplotypes: &[Haplotype]) -> Option<&Haplotype> {
    haplotypes
        .iter()
        .filter(|h| !h.is_empty())
        .fold(None, |best: Option<&Haplotype>, h| match best {
            Some(b) if b.len() >= h.len() => Some(b),
            _ => Some(h),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(value: &str, name: &str) -> Sequence {
        Sequence::with_name(value, name).unwrap()
    }

    #[test]
    fn test_classify_groups_in_first_seen_order() {
        let master = named("ABCD", "Master");
        let mid = named("AACD", "Mid");
        let short = named("ABC", "Short");
        let long = named("ABCDE", "Long");
        let master_copy = named("ABCD", "Master2");
        let long_copy = named("ABCDE", "Long2");

        let haplotypes = classify(vec![
            master.clone(),
            mid.clone(),
            short.clone(),
            long.clone(),
            master_copy.clone(),
            mid.clone(),
            long_copy.clone(),
        ]);

        assert_eq!(haplotypes.len(), 4);
        let sizes: Vec<usize> = haplotypes.iter().map(|h| h.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1, 2]);
        assert!(haplotypes[0].contains(&master));
        assert!(haplotypes[0].contains(&master_copy));
        assert!(haplotypes[1].contains(&mid));
        assert!(haplotypes[2].contains(&short));
        assert!(haplotypes[3].contains(&long));
        assert_eq!(haplotypes[3].member_names(), vec!["Long", "Long2"]);
    }

    #[test]
    fn test_classify_simple_and_empty() {
        let sequences = ["ABCD", "AACD", "ABCD"]
            .iter()
            .map(|v| Sequence::new(*v).unwrap())
            .collect::<Vec<_>>();
        let haplotypes = classify(sequences);
        assert_eq!(haplotypes.len(), 2);
        assert_eq!(haplotypes[0].len(), 2);
        assert_eq!(haplotypes[1].len(), 1);

        let sequences = vec![named("ABCD", "a"), named("AACD", "b"), named("ABCD", "c")];
        let haplotypes = classify(sequences);
        assert_eq!(haplotypes[0].len(), 2);
        assert_eq!(haplotypes[1].len(), 1);

        assert!(classify(Vec::new()).is_empty());
        assert_eq!(classify(vec![named("A", "only")]).len(), 1);
    }

    #[test]
    fn test_largest_haplotype() {
        let haplotypes = classify(vec![
            named("ABCD", "a"),
            named("AACD", "b"),
            named("AACD", "c"),
            named("ABCD", "d"),
            named("ABCC", "e"),
        ]);
        assert_eq!(largest_haplotype(&haplotypes).and_then(|h| h.name()), Some("Hap1"));

        let haplotypes = classify(vec![named("ABCD", "a"), named("AACD", "b"), named("AACD", "c")]);
        assert_eq!(largest_haplotype(&haplotypes).and_then(|h| h.name()), Some("Hap2"));

        assert!(largest_haplotype(&[Haplotype::new()]).is_none());
    }

    #[test]
    fn test_names_are_zero_padded() {
        assert_eq!(haplotype_name(1, 1), "Hap1");
        assert_eq!(haplotype_name(1, 9), "Hap1");
        assert_eq!(haplotype_name(3, 24), "Hap03");
        assert_eq!(haplotype_name(24, 24), "Hap24");
        assert_eq!(haplotype_name(7, 100), "Hap007");

        let sequences: Vec<Sequence> = (0..12)
            .map(|i| named(&format!("A{}", i), &format!("s{}", i)))
            .collect();
        let haplotypes = classify(sequences);
        assert_eq!(haplotypes[0].name(), Some("Hap01"));
        assert_eq!(haplotypes[11].name(), Some("Hap12"));
    }

    #[test]
    fn test_belongs_to() {
        let master = named("ABCD", "Master");
        assert!(Haplotype::new().belongs_to(&master));

        let haplotype = Haplotype::from_sequence(master.clone());
        assert!(haplotype.belongs_to(&master));
        assert!(haplotype.belongs_to(&named("ABCD", "Other")));
        assert!(!haplotype.belongs_to(&named("ABC", "Short")));
        assert!(!haplotype.belongs_to(&named("ABCDE", "Long")));
        assert!(!haplotype.belongs_to(&named("AACD", "Mid")));
    }

    #[test]
    fn test_add() {
        let master = named("ABCD", "Master");
        let mut haplotype = Haplotype::from_sequence(master.clone());
        haplotype.add(named("ABCD", "master2")).unwrap();
        assert_eq!(haplotype.len(), 2);

        haplotype.add(master).unwrap();
        assert_eq!(haplotype.len(), 3);

        let result = haplotype.add(named("AACD", "Mid"));
        assert!(matches!(result, Err(HcatError::InvalidArgument(_))));
        assert_eq!(haplotype.len(), 3);
    }

    #[test]
    fn test_as_sequence_uses_haplotype_name() {
        let mut haplotype = Haplotype::named("Hap1");
        assert!(haplotype.as_sequence().is_none());
        haplotype.add(named("ACGT", "s1")).unwrap();

        let sequence = haplotype.as_sequence().unwrap();
        assert_eq!(sequence.value(), "ACGT");
        assert_eq!(sequence.name(), Some("Hap1"));
        assert_eq!(haplotype.first().and_then(|s| s.name()), Some("s1"));
    }

    #[test]
    fn test_unwrap_and_find() {
        let sequences = vec![named("AA", "a"), named("CC", "b"), named("AA", "c")];
        let mut haplotypes = classify(sequences);
        assert_eq!(
            unwrap_haplotypes(&haplotypes)
                .iter()
                .map(|s| s.name().unwrap())
                .collect::<Vec<_>>(),
            vec!["a", "c", "b"]
        );

        haplotypes.insert(0, Haplotype::new());
        let found = find_haplotype(&Sequence::new("CC").unwrap(), &haplotypes).unwrap();
        assert_eq!(found.name(), Some("Hap2"));
        assert!(find_haplotype(&Sequence::new("GG").unwrap(), &haplotypes).is_none());
    }

    #[test]
    fn test_label_fallbacks() {
        assert_eq!(Haplotype::new().label(), "<unnamed>");
        assert_eq!(Haplotype::from_sequence(named("AC", "s1")).label(), "s1");
        assert_eq!(Haplotype::named("Hap3").label(), "Hap3");
    }
}
