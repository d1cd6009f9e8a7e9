// codon.rs - Triplet translation with reading frame detection

use std::collections::BTreeSet;

use crate::core::error::{HcatError, Result};
use crate::data::{CodonTransformationData, Sequence};

/// Translation of a triplet with no table entry
pub const INVALID_CODON: char = '?';

/// Prefix added to the name of translated sequences
pub const TRANSFORMED_PREFIX: &str = "Codon Transformed: ";

/// Sequences shorter than this are always read from offset 0
const MIN_DETECTION_LENGTH: usize = 5;

/// Translates nucleotide sequences into amino acids with one genetic code.
///
/// Alternative start and end positions are triplet indices counted from the
/// translation offset. At those positions only the start (or end) table is
/// consulted, so a regular codon there translates as [`INVALID_CODON`].
#[derive(Debug, Clone)]
pub struct CodonTransformer<'a> {
    data: &'a CodonTransformationData,
    alternative_start: BTreeSet<usize>,
    alternative_end: BTreeSet<usize>,
}

impl<'a> CodonTransformer<'a> {
    pub fn new(data: &'a CodonTransformationData) -> Self {
        Self {
            data,
            alternative_start: BTreeSet::new(),
            alternative_end: BTreeSet::new(),
        }
    }

    pub fn with_alternative_start(mut self, positions: impl IntoIterator<Item = usize>) -> Self {
        self.alternative_start.extend(positions);
        self
    }

    pub fn with_alternative_end(mut self, positions: impl IntoIterator<Item = usize>) -> Self {
        self.alternative_end.extend(positions);
        self
    }

    pub fn data(&self) -> &'a CodonTransformationData {
        self.data
    }

    pub fn alternative_start(&self) -> &BTreeSet<usize> {
        &self.alternative_start
    }

    pub fn alternative_end(&self) -> &BTreeSet<usize> {
        &self.alternative_end
    }

    /// Translate starting at `offset`. Trailing characters that do not form a
    /// full triplet are dropped.
    pub fn transform(&self, sequence: &Sequence, offset: usize) -> Result<Sequence> {
        let chars: Vec<char> = sequence.value().chars().collect();
        if offset >= chars.len() {
            return Err(HcatError::OutOfRange {
                offset,
                length: chars.len(),
            });
        }

        let translated = self.translate(&chars, offset);
        log::debug!(
            "Transformed sequence {} from offset {}: {}",
            sequence.label(),
            offset,
            translated
        );
        Ok(Sequence::unchecked(translated, transformed_name(sequence)))
    }

    /// Translate in the detected reading frame
    pub fn transform_auto(&self, sequence: &Sequence) -> Sequence {
        let chars: Vec<char> = sequence.value().chars().collect();
        let offset = self.detect_offset_chars(&chars);
        Sequence::unchecked(self.translate(&chars, offset), transformed_name(sequence))
    }

    /// Reading frame chosen by [`CodonTransformer::transform_auto`].
    ///
    /// Short sequences use offset 0. Otherwise the first offset among 0, 1, 2
    /// whose leading triplet is a start codon wins. Without one, the offset
    /// whose translation holds the fewest stop markers wins, earlier offsets
    /// winning ties. Translations containing an invalid codon are never
    /// picked, and offset 0 is used when all of them contain one.
    pub fn detect_offset(&self, sequence: &Sequence) -> usize {
        let chars: Vec<char> = sequence.value().chars().collect();
        self.detect_offset_chars(&chars)
    }

    fn detect_offset_chars(&self, chars: &[char]) -> usize {
        if chars.len() < MIN_DETECTION_LENGTH {
            log::debug!("Sequence too short for frame detection, using offset 0");
            return 0;
        }

        if let Some(offset) = (0..3).find(|&offset| {
            let triplet: String = chars[offset..offset + 3].iter().collect();
            self.data.start.contains_key(&triplet)
        }) {
            log::debug!("Found start codon at offset {}", offset);
            return offset;
        }

        let mut best: Option<(usize, usize)> = None;
        for offset in 0..3 {
            let translated = self.translate(chars, offset);
            let Some(count) = self.end_count(&translated) else {
                log::debug!("Offset {} yields invalid codons", offset);
                continue;
            };
            log::debug!("Offset {} yields {} end codon(s)", offset, count);
            if best.map_or(true, |(_, least)| count < least) {
                best = Some((offset, count));
                if count == 0 {
                    break;
                }
            }
        }

        best.map_or(0, |(offset, _)| offset)
    }

    /// Number of stop markers, `None` when the translation has an invalid codon
    fn end_count(&self, translated: &str) -> Option<usize> {
        let mut count = 0;
        for c in translated.chars() {
            if c == INVALID_CODON {
                return None;
            }
            if self.data.is_end_marker(c) {
                count += 1;
            }
        }
        Some(count)
    }

    fn translate(&self, chars: &[char], offset: usize) -> String {
        let mut translated = String::with_capacity(chars.len() / 3 + 1);
        let mut i = offset;
        while i + 2 < chars.len() {
            let triplet: String = chars[i..i + 3].iter().collect();
            let index = (i - offset) / 3;
            let table = if self.alternative_start.contains(&index) {
                &self.data.start
            } else if self.alternative_end.contains(&index) {
                &self.data.end
            } else {
                &self.data.codon
            };
            translated.push(table.get(&triplet).copied().unwrap_or(INVALID_CODON));
            i += 3;
        }
        translated
    }
}

fn transformed_name(sequence: &Sequence) -> Option<String> {
    sequence
        .name()
        .map(|name| format!("{}{}", TRANSFORMED_PREFIX, name))
}
