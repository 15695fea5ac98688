//! Character frequency statistics for checking sampler uniformity.

use std::collections::BTreeMap;

use rand::Rng;

use super::generate::{ConfigError, sample};
use super::charset::CharClasses;

#[derive(Debug, Clone)]
pub struct Histogram {
    counts: BTreeMap<char, usize>,
    total: usize,
}

impl Histogram {
    /// Draw `samples` characters from the combined alphabet of `classes`.
    /// Every alphabet character gets an entry, including those never drawn.
    pub fn sample<R: Rng + ?Sized>(
        classes: CharClasses,
        samples: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let alphabet = classes.alphabet();
        if alphabet.is_empty() {
            return Err(ConfigError::NoClassSelected);
        }

        let mut counts: BTreeMap<char, usize> = alphabet.iter().map(|&c| (c, 0)).collect();
        for _ in 0..samples {
            *counts.entry(sample(&alphabet, rng)).or_insert(0) += 1;
        }

        Ok(Self {
            counts,
            total: samples,
        })
    }

    pub fn counts(&self) -> &BTreeMap<char, usize> {
        &self.counts
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// N / K.
    pub fn expected(&self) -> f64 {
        self.total as f64 / self.counts.len() as f64
    }

    /// Largest |observed - expected| / expected over all characters.
    /// Zero for an empty histogram.
    pub fn max_relative_deviation(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let expected = self.expected();
        self.counts
            .values()
            .map(|&n| (n as f64 - expected).abs() / expected)
            .fold(0.0, f64::max)
    }

    /// Pearson chi-square statistic with K - 1 degrees of freedom.
    pub fn chi_square(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let expected = self.expected();
        self.counts
            .values()
            .map(|&n| {
                let d = n as f64 - expected;
                d * d / expected
            })
            .sum()
    }

    pub fn degrees_of_freedom(&self) -> usize {
        self.counts.len().saturating_sub(1)
    }
}
