//! Distribution of ISRCs over their reference year.

use std::collections::BTreeMap;

use crate::isrc::Isrc;

/// Count of codes per reference year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearDistribution {
    counts: BTreeMap<i32, usize>,
    total: usize,
}

impl YearDistribution {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bucket every code against `current_year`.
    #[must_use]
    pub fn from_codes<'a, I>(codes: I, current_year: i32) -> Self
    where
        I: IntoIterator<Item = &'a Isrc>,
    {
        let mut dist = Self::new();
        for isrc in codes {
            dist.add(isrc, current_year);
        }
        dist
    }

    pub fn add(&mut self, isrc: &Isrc, current_year: i32) {
        *self
            .counts
            .entry(isrc.reference_year(current_year))
            .or_insert(0) += 1;
        self.total += 1;
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[must_use]
    pub fn count(&self, year: i32) -> usize {
        self.counts.get(&year).copied().unwrap_or(0)
    }

    /// Earliest and latest year seen.
    #[must_use]
    pub fn range(&self) -> Option<(i32, i32)> {
        let first = *self.counts.keys().next()?;
        let last = *self.counts.keys().next_back()?;
        Some((first, last))
    }

    /// Every year from the earliest to the latest, including empty ones.
    #[must_use]
    pub fn contiguous(&self) -> Vec<(i32, usize)> {
        self.range().map_or_else(Vec::new, |(first, last)| {
            (first..=last).map(|year| (year, self.count(year))).collect()
        })
    }
}

#[cfg(test)]
#[path = "year_tests.rs"]
mod tests;
