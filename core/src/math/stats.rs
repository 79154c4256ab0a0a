use serde::{Deserialize, Serialize};

/// Summary of the quantized words in a table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TableStats {
    pub min: u16,
    pub max: u16,
    pub mean: f64,
}

impl TableStats {
    pub fn from_samples(samples: &[u16]) -> Option<Self> {
        let min = *samples.iter().min()?;
        let max = *samples.iter().max()?;
        let sum: u64 = samples.iter().map(|&v| u64::from(v)).sum();
        Some(Self {
            min,
            max,
            mean: sum as f64 / samples.len() as f64,
        })
    }

    pub fn peak_to_peak(&self) -> u16 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_has_no_stats() {
        assert_eq!(TableStats::from_samples(&[]), None);
    }

    #[test]
    fn stats_track_extremes_and_mean() {
        let stats = TableStats::from_samples(&[25_000, 45_000, 25_000, 5_000]).unwrap();
        assert_eq!(stats.min, 5_000);
        assert_eq!(stats.max, 45_000);
        assert_eq!(stats.peak_to_peak(), 40_000);
        assert_eq!(stats.mean, 25_000.0);
    }
}
