//! Predict Traffic Congestion scenario

use log::debug;
use std::fmt;

use super::rng::RandomSource;
use super::types::{
    CAR_COUNT_RANGE, HIGH_CONGESTION_THRESHOLD, MODERATE_CONGESTION_THRESHOLD, ROAD_CAPACITY,
};

/// How likely the road is to jam
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CongestionLevel {
    Low,
    Moderate,
    High,
}

impl CongestionLevel {
    /// Classify a probability. Values sitting exactly on a threshold fall
    /// into the lower bucket.
    pub fn from_probability(probability: f64) -> Self {
        if probability > HIGH_CONGESTION_THRESHOLD {
            CongestionLevel::High
        } else if probability > MODERATE_CONGESTION_THRESHOLD {
            CongestionLevel::Moderate
        } else {
            CongestionLevel::Low
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            CongestionLevel::High => {
                "High chance of traffic congestion. Consider optimization strategies."
            }
            CongestionLevel::Moderate => {
                "Moderate chance of congestion. Keep monitoring traffic flow."
            }
            CongestionLevel::Low => "Low chance of congestion. Traffic is flowing smoothly.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CongestionReport {
    pub car_count: i32,
    pub probability: f64,
    pub level: CongestionLevel,
}

/// Share of road capacity in use, capped at 1
pub fn congestion_probability(car_count: i32) -> f64 {
    (car_count as f64 / ROAD_CAPACITY).min(1.0)
}

pub fn predict_traffic_congestion<R: RandomSource + ?Sized>(rng: &mut R) -> CongestionReport {
    let car_count = rng.next_int(CAR_COUNT_RANGE);
    let probability = congestion_probability(car_count);
    let level = CongestionLevel::from_probability(probability);
    debug!(
        "congestion draw: cars={}, p={:.4}, level={:?}",
        car_count, probability, level
    );

    CongestionReport {
        car_count,
        probability,
        level,
    }
}

impl fmt::Display for CongestionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nPredicting Traffic Congestion...")?;
        writeln!(f, "Number of Cars: {}", self.car_count)?;
        writeln!(
            f,
            "Congestion Probability: {:.2}%",
            self.probability * 100.0
        )?;
        writeln!(f, "{}", self.level.advice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(CongestionLevel::from_probability(0.7), CongestionLevel::Moderate);
        assert_eq!(CongestionLevel::from_probability(0.4), CongestionLevel::Low);
        assert_eq!(CongestionLevel::from_probability(0.705), CongestionLevel::High);
        assert_eq!(CongestionLevel::from_probability(0.405), CongestionLevel::Moderate);
        assert_eq!(CongestionLevel::from_probability(1.0), CongestionLevel::High);
    }

    #[test]
    fn test_boundary_car_counts() {
        // 80 / 200 = 0.4 and 140 / 200 = 0.7 exactly
        assert_eq!(congestion_probability(80), 0.4);
        assert_eq!(congestion_probability(140), 0.7);
        assert_eq!(
            CongestionLevel::from_probability(congestion_probability(80)),
            CongestionLevel::Low
        );
        assert_eq!(
            CongestionLevel::from_probability(congestion_probability(140)),
            CongestionLevel::Moderate
        );
        assert_eq!(
            CongestionLevel::from_probability(congestion_probability(141)),
            CongestionLevel::High
        );
    }

    #[test]
    fn test_probability_is_capped() {
        assert_eq!(congestion_probability(500), 1.0);
        assert_eq!(congestion_probability(50), 0.25);
    }

    #[test]
    fn test_report_text() {
        let report = CongestionReport {
            car_count: 125,
            probability: 0.625,
            level: CongestionLevel::Moderate,
        };
        let text = report.to_string();
        assert!(text.contains("Number of Cars: 125\n"));
        assert!(text.contains("Congestion Probability: 62.50%\n"));
        assert!(text.ends_with("Keep monitoring traffic flow.\n"));
    }
}
