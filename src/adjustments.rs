use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::warn;

/// Sparse head-to-head adjustment factors for specific score pairs.
///
/// Keys are `(home score, away score)`; any pair without an entry reads as a
/// neutral factor of 1.0. Writing the same pair twice keeps the last value.
#[derive(Clone, Debug, Default)]
pub struct AdjustmentMap {
    factors: HashMap<(i64, i64), f64>,
}

impl AdjustmentMap {
    pub fn new() -> Self {
        AdjustmentMap {
            factors: HashMap::new(),
        }
    }

    /// Read adjustments from a CSV file.
    /// Format: home_score,away_score,factor
    ///
    /// Blank lines and rows that fail to parse are skipped with a warning;
    /// the rest of the file is still loaded.
    pub fn read_from_file(&mut self, filepath: &Path) -> io::Result<()> {
        let file = File::open(filepath)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split(',').collect();
            if parts.len() != 3 {
                warn!("skipping malformed adjustment row: {line}");
                continue;
            }

            let home = parts[0].trim().parse::<i64>();
            let away = parts[1].trim().parse::<i64>();
            let factor = parts[2].trim().parse::<f64>();
            match (home, away, factor) {
                (Ok(home), Ok(away), Ok(factor)) => self.set(home, away, factor),
                _ => warn!("skipping unparseable adjustment row: {line}"),
            }
        }

        Ok(())
    }

    /// Add or update the factor for a score pair.
    pub fn set(&mut self, home: i64, away: i64, factor: f64) {
        self.factors.insert((home, away), factor);
    }

    /// Remove the factor for a score pair.
    pub fn remove(&mut self, home: i64, away: i64) {
        self.factors.remove(&(home, away));
    }

    /// Get the factor for a score pair, if one was set.
    pub fn get(&self, home: i64, away: i64) -> Option<f64> {
        self.factors.get(&(home, away)).copied()
    }

    /// The multiplier applied to a score pair; 1.0 unless overridden.
    pub fn factor(&self, home: i64, away: i64) -> f64 {
        self.get(home, away).unwrap_or(1.0)
    }

    /// Check whether a pair has an explicit factor.
    pub fn contains(&self, home: i64, away: i64) -> bool {
        self.factors.contains_key(&(home, away))
    }

    /// Get the number of explicit factors.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// A copy with every `(home, away)` key flipped to `(away, home)`, for
    /// viewing the same head-to-head history from the other side.
    pub fn mirrored(&self) -> AdjustmentMap {
        let factors = self
            .factors
            .iter()
            .map(|(&(home, away), &factor)| ((away, home), factor))
            .collect();
        AdjustmentMap { factors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_pairs_are_neutral() {
        let adjustments = AdjustmentMap::new();
        assert_eq!(adjustments.factor(14, 12), 1.0);
        assert_eq!(adjustments.get(14, 12), None);
        assert!(!adjustments.contains(14, 12));
    }

    #[test]
    fn test_last_write_wins() {
        let mut adjustments = AdjustmentMap::new();
        adjustments.set(14, 12, 1.5);
        adjustments.set(14, 12, 5.0);
        assert_eq!(adjustments.factor(14, 12), 5.0);
        assert_eq!(adjustments.len(), 1);
    }

    #[test]
    fn test_keys_are_ordered_pairs() {
        let mut adjustments = AdjustmentMap::new();
        adjustments.set(14, 12, 2.0);
        assert_eq!(adjustments.factor(12, 14), 1.0);
    }

    #[test]
    fn test_remove_restores_neutral() {
        let mut adjustments = AdjustmentMap::new();
        adjustments.set(14, 12, 2.0);
        adjustments.remove(14, 12);
        assert!(adjustments.is_empty());
        assert_eq!(adjustments.factor(14, 12), 1.0);
    }

    #[test]
    fn test_mirrored_flips_keys() {
        let mut adjustments = AdjustmentMap::new();
        adjustments.set(14, 12, 2.0);
        let mirrored = adjustments.mirrored();
        assert_eq!(mirrored.factor(12, 14), 2.0);
        assert_eq!(mirrored.factor(14, 12), 1.0);
    }

    #[test]
    fn test_read_from_file_skips_bad_rows() {
        let path = std::env::temp_dir().join("matchcast_adjustments_test.csv");
        std::fs::write(&path, "14,12,5.0\n\nnot,a,row\n10,10\n12, 15, 0.8\n").unwrap();

        let mut adjustments = AdjustmentMap::new();
        adjustments.read_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(adjustments.len(), 2);
        assert_eq!(adjustments.factor(14, 12), 5.0);
        assert_eq!(adjustments.factor(12, 15), 0.8);
    }
}
