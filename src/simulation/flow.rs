//! Simulate Traffic Flow scenario

use log::debug;
use std::fmt;

use super::rng::RandomSource;
use super::types::{AVERAGE_SPEED_RANGE, CAR_COUNT_RANGE};

/// Result of a single traffic flow simulation
#[derive(Debug, Clone, PartialEq)]
pub struct FlowReport {
    pub car_count: i32,
    /// Average speed in km/h
    pub average_speed: f64,
    /// Estimated travel time in minutes
    pub travel_time: f64,
}

/// Estimated travel time in minutes for `car_count` cars at `average_speed`
pub fn travel_time(car_count: i32, average_speed: f64) -> f64 {
    (car_count as f64 / average_speed) * 60.0
}

/// Draw a car count and speed, then estimate travel time
pub fn simulate_traffic_flow<R: RandomSource + ?Sized>(rng: &mut R) -> FlowReport {
    let car_count = rng.next_int(CAR_COUNT_RANGE);
    let average_speed = rng.next_int(AVERAGE_SPEED_RANGE) as f64;
    debug!("flow draw: cars={}, speed={}", car_count, average_speed);

    FlowReport {
        car_count,
        average_speed,
        travel_time: travel_time(car_count, average_speed),
    }
}

impl fmt::Display for FlowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nSimulating Traffic Flow...")?;
        writeln!(f, "Total Cars: {}", self.car_count)?;
        writeln!(f, "Average Speed: {} km/h", self.average_speed)?;
        writeln!(f, "Estimated Travel Time: {} minutes", self.travel_time)
    }
}
