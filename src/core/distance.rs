// distance.rs - Pairwise haplotype distance matrix

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crate::core::difference::Difference;
use crate::core::haplotype::Haplotype;

/// Symmetric distance table over non-empty haplotypes.
///
/// The distance between two haplotypes is the number of differing positions
/// of their representatives. Self distances are not stored.
#[derive(Debug, Clone)]
pub struct DistanceMatrix<'a> {
    haplotypes: Vec<&'a Haplotype>,
    distances: Vec<Vec<Option<usize>>>,
}

impl<'a> DistanceMatrix<'a> {
    /// Build the matrix. Empty haplotypes do not participate.
    pub fn build(haplotypes: &'a [Haplotype]) -> Self {
        Self::compute(haplotypes, None)
    }

    /// Build the matrix while reporting progress on the terminal
    pub fn build_with_progress(haplotypes: &'a [Haplotype]) -> Self {
        let participants = haplotypes.iter().filter(|h| !h.is_empty()).count();
        let total_comparisons = participants * participants.saturating_sub(1) / 2;
        println!(
            "🔄 Computing distance matrix ({} × {} = {} comparisons)...",
            participants, participants, total_comparisons
        );

        let pb = ProgressBar::new(total_comparisons as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {per_sec} ETA: {eta}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }

        let start = Instant::now();
        let matrix = Self::compute(haplotypes, Some(&pb));
        pb.finish_with_message("✅ Distance matrix computation completed!");
        println!(
            "✅ Distance matrix computed in {:.2}s",
            start.elapsed().as_secs_f64()
        );
        matrix
    }

    fn compute(haplotypes: &'a [Haplotype], pb: Option<&ProgressBar>) -> Self {
        let participants: Vec<&'a Haplotype> = haplotypes.iter().filter(|h| !h.is_empty()).collect();
        let n = participants.len();
        let mut distances = vec![vec![None; n]; n];

        let total_comparisons = n * n.saturating_sub(1) / 2;
        let update_interval = std::cmp::max(1, total_comparisons / 100);
        let progress_counter = AtomicUsize::new(0);

        let upper_triangle: Vec<(usize, usize, Option<usize>)> = (0..n)
            .into_par_iter()
            .flat_map(|i| {
                let participants = &participants;
                let progress_counter = &progress_counter;
                (i + 1..n).into_par_iter().map(move |j| {
                    let distance = representative_distance(participants[i], participants[j]);

                    let count = progress_counter.fetch_add(1, Ordering::Relaxed) + 1;
                    if let Some(pb) = pb {
                        if count % update_interval == 0 {
                            pb.set_position(count as u64);
                        }
                    }

                    (i, j, distance)
                })
            })
            .collect();

        for (i, j, distance) in upper_triangle {
            distances[i][j] = distance;
            distances[j][i] = distance;
        }

        log::info!(
            "Distance matrix built over {} haplotypes ({} pairs)",
            n,
            total_comparisons
        );

        Self {
            haplotypes: participants,
            distances,
        }
    }

    /// Participating haplotypes, in input order
    pub fn haplotypes(&self) -> &[&'a Haplotype] {
        &self.haplotypes
    }

    pub fn len(&self) -> usize {
        self.haplotypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.haplotypes.is_empty()
    }

    /// Full square table, `None` on the diagonal
    pub fn rows(&self) -> &[Vec<Option<usize>>] {
        &self.distances
    }

    /// Distance between the haplotypes at two matrix indices
    pub fn distance_at(&self, i: usize, j: usize) -> Option<usize> {
        self.distances.get(i)?.get(j).copied().flatten()
    }

    /// Participant index by identity, so equal haplotypes stay distinct
    fn index_of(&self, haplotype: &Haplotype) -> Option<usize> {
        self.haplotypes.iter().position(|h| std::ptr::eq(*h, haplotype))
    }

    /// Distance between two haplotypes of the built slice. `None` when either
    /// is not part of the matrix or both are the same haplotype.
    pub fn distance(&self, a: &Haplotype, b: &Haplotype) -> Option<usize> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        self.distance_at(i, j)
    }

    /// Distances from one haplotype to every other participant
    pub fn distances(&self, haplotype: &Haplotype) -> Option<Vec<(&'a Haplotype, usize)>> {
        let i = self.index_of(haplotype)?;
        Some(
            self.haplotypes
                .iter()
                .enumerate()
                .filter_map(|(j, other)| self.distance_at(i, j).map(|d| (*other, d)))
                .collect(),
        )
    }

    /// All stored pairs `(i, j, distance)` with `i < j`
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        (0..self.len()).flat_map(move |i| {
            (i + 1..self.len()).filter_map(move |j| self.distance_at(i, j).map(|d| (i, j, d)))
        })
    }

    /// Smallest pairwise distance, `None` with fewer than two participants
    pub fn min_distance(&self) -> Option<usize> {
        self.pairs().map(|(_, _, d)| d).min()
    }

    /// Largest pairwise distance, `None` with fewer than two participants
    pub fn max_distance(&self) -> Option<usize> {
        self.pairs().map(|(_, _, d)| d).max()
    }
}

fn representative_distance(a: &Haplotype, b: &Haplotype) -> Option<usize> {
    let first = a.first()?;
    let second = b.first()?;
    Some(Difference::new(first, second).distance())
}
