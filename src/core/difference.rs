// difference.rs - Position-wise difference between two sequences

use std::collections::BTreeSet;
use std::fmt;

use crate::data::Sequence;

/// Marker used where master and target agree
pub const DEFAULT_NO_DIFFERENCE: char = '.';

/// Difference of a target sequence against a master sequence.
///
/// The difference string is as long as the longer of both sequences. Where the
/// characters agree it holds the no-difference marker, otherwise the target's
/// character. Past the end of a shorter target it holds a blank, past the end
/// of a shorter master the target's remaining characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference<'a> {
    master: &'a Sequence,
    target: &'a Sequence,
    difference: String,
    no_difference: char,
}

impl<'a> Difference<'a> {
    pub fn new(master: &'a Sequence, target: &'a Sequence) -> Self {
        Self::with_marker(master, target, DEFAULT_NO_DIFFERENCE)
    }

    /// Compute the difference using a custom no-difference marker
    pub fn with_marker(master: &'a Sequence, target: &'a Sequence, no_difference: char) -> Self {
        let difference = compute_difference(master.value(), target.value(), no_difference);
        Self {
            master,
            target,
            difference,
            no_difference,
        }
    }

    pub fn difference(&self) -> &str {
        &self.difference
    }

    /// Sorted indices (0-based) at which a difference was recorded
    pub fn positions(&self) -> BTreeSet<usize> {
        self.difference
            .chars()
            .enumerate()
            .filter(|(_, c)| *c != self.no_difference)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of differing positions
    pub fn distance(&self) -> usize {
        self.difference
            .chars()
            .filter(|c| *c != self.no_difference)
            .count()
    }

    pub fn is_different(&self) -> bool {
        self.difference.chars().any(|c| c != self.no_difference)
    }

    /// Compare difference strings only
    pub fn equal_dif(&self, other: &Difference<'_>) -> bool {
        self.difference == other.difference
    }

    pub fn master(&self) -> &'a Sequence {
        self.master
    }

    pub fn target(&self) -> &'a Sequence {
        self.target
    }

    pub fn no_difference(&self) -> char {
        self.no_difference
    }
}

impl fmt::Display for Difference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.difference)
    }
}

fn compute_difference(master: &str, target: &str, no_difference: char) -> String {
    let master: Vec<char> = master.chars().collect();
    let target: Vec<char> = target.chars().collect();
    let min_len = master.len().min(target.len());

    let mut result = String::with_capacity(master.len().max(target.len()));
    for i in 0..min_len {
        if master[i] == target[i] {
            result.push(no_difference);
        } else {
            result.push(target[i]);
        }
    }
    // Only one of these tails is non-empty
    result.extend(std::iter::repeat(' ').take(master.len().saturating_sub(min_len)));
    result.extend(&target[min_len..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(value: &str) -> Sequence {
        Sequence::new(value).unwrap()
    }

    #[test]
    fn test_difference_to_itself() {
        let master = seq("ABCD");
        let diff = Difference::new(&master, &master);
        assert_eq!(diff.difference(), "....");
        assert_eq!(diff.distance(), 0);
        assert!(!diff.is_different());
        assert!(diff.positions().is_empty());
    }

    #[test]
    fn test_single_position_differences() {
        let master = seq("ABCD");
        let cases = [("BBCD", "B...", 0), ("AACD", ".A..", 1), ("ABCC", "...C", 3)];
        for (target, expected, position) in cases {
            let target = seq(target);
            let diff = Difference::new(&master, &target);
            assert_eq!(diff.difference(), expected);
            assert_eq!(diff.distance(), 1);
            assert_eq!(diff.positions().into_iter().collect::<Vec<_>>(), vec![position]);
        }
    }

    #[test]
    fn test_multiple_differences() {
        let master = seq("ABCD");
        let multi = seq("ACBD");
        let diff = Difference::new(&master, &multi);
        assert_eq!(diff.difference(), ".CB.");
        assert_eq!(diff.positions().into_iter().collect::<Vec<_>>(), vec![1, 2]);

        let all = seq("DCBA");
        let diff = Difference::new(&master, &all);
        assert_eq!(diff.difference(), "DCBA");
        assert_eq!(diff.distance(), 4);
    }

    #[test]
    fn test_shorter_target_leaves_blank() {
        let master = seq("ABCD");
        let short = seq("ABC");
        let diff = Difference::new(&master, &short);
        assert_eq!(diff.difference(), "... ");
        assert_eq!(diff.distance(), 1);
        assert_eq!(diff.positions().into_iter().next(), Some(3));
    }

    #[test]
    fn test_longer_target_keeps_tail() {
        let master = seq("ABCD");
        let long = seq("ABCDE");
        let diff = Difference::new(&master, &long);
        assert_eq!(diff.difference(), "....E");
        assert_eq!(diff.distance(), 1);
        assert_eq!(diff.positions().into_iter().next(), Some(4));
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = seq("ACGTACGT");
        let b = seq("ACCTAGGA");
        let forward = Difference::new(&a, &b);
        let backward = Difference::new(&b, &a);
        assert_eq!(forward.distance(), backward.distance());
        assert_ne!(forward.difference(), backward.difference());
    }

    #[test]
    fn test_custom_marker() {
        let master = seq("ACGT");
        let target = seq("ACGA");
        let diff = Difference::with_marker(&master, &target, '-');
        assert_eq!(diff.difference(), "---A");
        assert_eq!(diff.no_difference(), '-');
        assert_eq!(diff.to_string(), "---A");
    }

    #[test]
    fn test_equal_dif_ignores_sequences() {
        let master = seq("ACGT");
        let a = Sequence::with_name("ACGA", "a").unwrap();
        let b = Sequence::with_name("ACGA", "b").unwrap();
        let first = Difference::new(&master, &a);
        let second = Difference::new(&master, &b);
        assert!(first.equal_dif(&second));
        assert_ne!(first, second);
        assert_eq!(first.target().name(), Some("a"));
        assert_eq!(first.master(), &master);
    }
}
