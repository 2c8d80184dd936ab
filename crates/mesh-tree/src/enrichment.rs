//! Enrichment results attached to MeSH terms
//!
//! The statistics are computed elsewhere; this module only carries them and
//! decides which ones are worth showing.

use serde::{Deserialize, Serialize};

/// Default significance cut-off
pub const DEFAULT_MAX_P_VALUE: f64 = 0.05;

/// Default minimum number of mapped query entities
pub const DEFAULT_MIN_COUNT: usize = 5;

/// Enrichment of one term's entity set in a query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentStat {
    /// Query entities annotated with the term
    pub query_mapped: usize,
    /// Reference entities annotated with the term
    pub reference_mapped: usize,
    pub p_value: f64,
    pub enrichment_score: f64,
}

/// Which results to keep for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentFilter {
    pub max_p_value: f64,
    pub min_count: usize,
}

impl Default for EnrichmentFilter {
    fn default() -> Self {
        Self {
            max_p_value: DEFAULT_MAX_P_VALUE,
            min_count: DEFAULT_MIN_COUNT,
        }
    }
}

impl EnrichmentFilter {
    pub fn new(max_p_value: f64, min_count: usize) -> Self {
        Self {
            max_p_value,
            min_count,
        }
    }

    /// Only drops results with nothing mapped from the query
    pub fn permissive() -> Self {
        Self::new(f64::INFINITY, 0)
    }

    /// A NaN p-value never passes.
    pub fn accepts(&self, stat: &EnrichmentStat) -> bool {
        stat.query_mapped > 0
            && stat.query_mapped >= self.min_count
            && stat.p_value <= self.max_p_value
    }

    /// Keep accepted results, in order
    pub fn apply<N, I>(&self, results: I) -> Vec<(N, EnrichmentStat)>
    where
        I: IntoIterator<Item = (N, EnrichmentStat)>,
    {
        results
            .into_iter()
            .filter(|(_, stat)| self.accepts(stat))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(query_mapped: usize, p_value: f64) -> EnrichmentStat {
        EnrichmentStat {
            query_mapped,
            reference_mapped: 100,
            p_value,
            enrichment_score: 1.5,
        }
    }

    #[test]
    fn test_default_thresholds() {
        let filter = EnrichmentFilter::default();
        assert!(filter.accepts(&stat(5, 0.05)));
        assert!(!filter.accepts(&stat(4, 0.01)));
        assert!(!filter.accepts(&stat(10, 0.051)));
        assert!(!filter.accepts(&stat(10, f64::NAN)));
    }

    #[test]
    fn test_permissive_still_drops_unmapped() {
        let filter = EnrichmentFilter::permissive();
        assert!(filter.accepts(&stat(1, 0.9)));
        assert!(!filter.accepts(&stat(0, 0.0)));
    }

    #[test]
    fn test_apply_keeps_order() {
        let filter = EnrichmentFilter::new(0.1, 1);
        let kept = filter.apply(vec![
            ("b", stat(3, 0.01)),
            ("x", stat(0, 0.01)),
            ("a", stat(2, 0.09)),
            ("y", stat(2, 0.5)),
        ]);
        let names: Vec<&str> = kept.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["b", "a"]);
    }
}
