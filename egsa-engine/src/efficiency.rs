use serde::{Deserialize, Serialize};

use crate::Usage;

/// Efficiency relative to a benchmark, ordered from worst to best.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Deserialize,
    Serialize,
    derive_more::Display,
)]
#[repr(u8)]
pub enum EfficiencyRating {
    Poor = 1,
    Average = 2,
    Good = 3,
    Excellent = 4,
}

impl EfficiencyRating {
    pub const EXCELLENT_RATIO: f64 = 0.8;
    pub const GOOD_RATIO: f64 = 1.0;
    pub const AVERAGE_RATIO: f64 = 1.2;

    /// Rate the usage-to-benchmark ratio, lower is better.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= Self::EXCELLENT_RATIO {
            Self::Excellent
        } else if ratio <= Self::GOOD_RATIO {
            Self::Good
        } else if ratio <= Self::AVERAGE_RATIO {
            Self::Average
        } else {
            Self::Poor
        }
    }

    /// Non-positive benchmarks carry no information and rate as a neutral ratio of one.
    pub fn from_usage(usage: Usage, benchmark: Usage) -> Self {
        let ratio = if benchmark > Usage::ZERO { (usage / benchmark).0 } else { 1.0 };
        Self::from_ratio(ratio)
    }

    pub const fn score(self) -> u8 {
        self as u8
    }

    pub const fn from_score(score: u8) -> Option<Self> {
        match score {
            1 => Some(Self::Poor),
            2 => Some(Self::Average),
            3 => Some(Self::Good),
            4 => Some(Self::Excellent),
            _ => None,
        }
    }

    /// Round a mean score half-up and map it back onto the scale.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_mean_score(mean: f64) -> Self {
        let rounded = (mean + 0.5).floor().clamp(1.0, 4.0) as u8;
        Self::from_score(rounded).unwrap_or(Self::Poor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(EfficiencyRating::from_ratio(0.0), EfficiencyRating::Excellent);
        assert_eq!(EfficiencyRating::from_ratio(0.8), EfficiencyRating::Excellent);
        assert_eq!(EfficiencyRating::from_ratio(0.81), EfficiencyRating::Good);
        assert_eq!(EfficiencyRating::from_ratio(1.0), EfficiencyRating::Good);
        assert_eq!(EfficiencyRating::from_ratio(1.01), EfficiencyRating::Average);
        assert_eq!(EfficiencyRating::from_ratio(1.2), EfficiencyRating::Average);
        assert_eq!(EfficiencyRating::from_ratio(1.21), EfficiencyRating::Poor);
    }

    #[test]
    fn monotonic_in_ratio() {
        let ratings: Vec<_> =
            (0..=30).map(|step| EfficiencyRating::from_ratio(f64::from(step) * 0.1)).collect();
        assert!(ratings.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn non_positive_benchmark_rates_good() {
        assert_eq!(
            EfficiencyRating::from_usage(Usage::from(1000.0), Usage::ZERO),
            EfficiencyRating::Good
        );
        assert_eq!(
            EfficiencyRating::from_usage(Usage::from(1000.0), Usage::from(-5.0)),
            EfficiencyRating::Good
        );
    }

    #[test]
    fn ordering() {
        assert!(EfficiencyRating::Poor < EfficiencyRating::Average);
        assert!(EfficiencyRating::Good < EfficiencyRating::Excellent);
        assert_eq!(EfficiencyRating::Excellent.score(), 4);
    }

    #[test]
    fn mean_rounds_half_up() {
        assert_eq!(EfficiencyRating::from_mean_score(3.5), EfficiencyRating::Excellent);
        assert_eq!(EfficiencyRating::from_mean_score(2.5), EfficiencyRating::Good);
        assert_eq!(EfficiencyRating::from_mean_score(2.49), EfficiencyRating::Average);
        assert_eq!(EfficiencyRating::from_mean_score(1.0), EfficiencyRating::Poor);
    }
}
