//! Distribution of ISRCs over their issuing country.

use indexmap::IndexMap;

use super::countries::{self, Country};
use crate::isrc::Isrc;

/// Number of codes issued under one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCount {
    pub country: &'static Country,
    pub count: usize,
}

/// Count of codes per country, keyed by ISO alpha-2 in first-seen order.
///
/// Prefixes that resolve to no country are tallied separately, keyed by the
/// upper-cased prefix.
#[derive(Debug, Clone, Default)]
pub struct CountryDistribution {
    counts: IndexMap<&'static str, CountryCount>,
    unmatched: IndexMap<String, usize>,
    total: usize,
}

impl CountryDistribution {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_codes<'a, I>(codes: I) -> Self
    where
        I: IntoIterator<Item = &'a Isrc>,
    {
        let mut dist = Self::new();
        for isrc in codes {
            dist.add(isrc);
        }
        dist
    }

    pub fn add(&mut self, isrc: &Isrc) {
        self.total += 1;
        let prefix = isrc.country_code();
        match countries::lookup(&prefix) {
            Some(country) => {
                self.counts
                    .entry(country.alpha2)
                    .or_insert(CountryCount { country, count: 0 })
                    .count += 1;
            }
            None => *self.unmatched.entry(prefix).or_insert(0) += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[must_use]
    pub fn count(&self, alpha2: &str) -> usize {
        self.counts.get(alpha2).map_or(0, |c| c.count)
    }

    /// Countries ordered by count (descending), ties broken by alpha-2.
    #[must_use]
    pub fn ranked(&self) -> Vec<CountryCount> {
        let mut ranked: Vec<CountryCount> = self.counts.values().copied().collect();
        ranked.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.country.alpha2.cmp(b.country.alpha2))
        });
        ranked
    }

    /// Prefixes with no matching country, in first-seen order.
    #[must_use]
    pub const fn unmatched(&self) -> &IndexMap<String, usize> {
        &self.unmatched
    }

    #[must_use]
    pub fn unmatched_total(&self) -> usize {
        self.unmatched.values().sum()
    }
}

#[cfg(test)]
#[path = "country_tests.rs"]
mod tests;
