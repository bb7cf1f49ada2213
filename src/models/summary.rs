use crate::services::payloads::EmbeddingStats;

/// Derived statistics grid for the text-analysis result card.
///
/// Order statistics (min/max/range/median/quartiles) derive from the mean
/// series; variance derives from the std series. Quartile indexing matches
/// the dashboard's historical floor-index convention.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingSummary {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub variance: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
}

impl EmbeddingSummary {
    pub fn from_stats(stats: &EmbeddingStats) -> Option<Self> {
        if stats.mean.is_empty() {
            return None;
        }

        let mut sorted = stats.mean.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let min = sorted[0];
        let max = sorted[sorted.len() - 1];
        let median = sorted[sorted.len() / 2];
        let q1 = sorted[sorted.len() / 4];
        let q3 = sorted[sorted.len() * 3 / 4];

        let variance = if stats.std.is_empty() {
            0.0
        } else {
            stats.std.iter().map(|v| v * v).sum::<f64>() / stats.std.len() as f64
        };

        Some(Self {
            mean: stats.mean[0],
            std: stats.std.first().copied().unwrap_or(0.0),
            min,
            max,
            range: max - min,
            variance,
            median,
            q1,
            q3,
            iqr: q3 - q1,
        })
    }
}

/// Heuristic for the fallback banner: simplified embeddings come out of a
/// unit normal, so every component of the first vector lands in [-1, 1]
/// essentially never for a real model head.
pub fn looks_like_fallback(embeddings: &[Vec<f64>]) -> bool {
    match embeddings.first() {
        Some(first) if !first.is_empty() => first.iter().all(|v| (-1.0..=1.0).contains(v)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_over_the_mean_series() {
        let stats = EmbeddingStats {
            mean: vec![1.0, 2.0, 3.0],
            std: vec![0.1, 0.2, 0.3],
        };
        let summary = EmbeddingSummary::from_stats(&stats).unwrap();
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 3.0);
        assert_eq!(summary.range, 2.0);
        assert_eq!(summary.mean, 1.0);
        assert_eq!(summary.std, 0.1);
        assert_eq!(summary.median, 2.0);
        // variance = (0.01 + 0.04 + 0.09) / 3
        assert!((summary.variance - 0.14 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_mean_series_yields_no_summary() {
        let stats = EmbeddingStats { mean: vec![], std: vec![0.1] };
        assert!(EmbeddingSummary::from_stats(&stats).is_none());
    }

    #[test]
    fn fallback_detection() {
        assert!(looks_like_fallback(&[vec![0.2, -0.9, 1.0]]));
        assert!(!looks_like_fallback(&[vec![0.2, -1.9]]));
        assert!(!looks_like_fallback(&[]));
        assert!(!looks_like_fallback(&[vec![]]));
    }
}
