//! Optimize Traffic Flow scenario
//!
//! Stretches the green phase and shrinks the red phase in proportion to how
//! full the road is. Neither result is clamped.

use log::debug;
use std::fmt;

use super::rng::RandomSource;
use super::types::{CAR_COUNT_RANGE, LIGHT_DURATION_RANGE, ROAD_CAPACITY};

/// Initial and adjusted light durations for one draw
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeReport {
    pub car_count: i32,
    pub green_light_duration: i32,
    pub red_light_duration: i32,
    pub optimized_green: f64,
    pub optimized_red: f64,
}

pub fn optimized_green(green_light_duration: i32, car_count: i32) -> f64 {
    green_light_duration as f64 * (1.0 + car_count as f64 / ROAD_CAPACITY)
}

/// Red phase scaled down by load. Goes negative once `car_count` exceeds
/// capacity, which the drawn range never reaches.
pub fn optimized_red(red_light_duration: i32, car_count: i32) -> f64 {
    red_light_duration as f64 * (1.0 - car_count as f64 / ROAD_CAPACITY)
}

/// Draw car count, green and red durations (in that order) and adjust them
pub fn optimize_traffic_flow<R: RandomSource + ?Sized>(rng: &mut R) -> OptimizeReport {
    let car_count = rng.next_int(CAR_COUNT_RANGE);
    let green_light_duration = rng.next_int(LIGHT_DURATION_RANGE);
    let red_light_duration = rng.next_int(LIGHT_DURATION_RANGE);
    debug!(
        "optimize draw: cars={}, green={}, red={}",
        car_count, green_light_duration, red_light_duration
    );

    OptimizeReport {
        car_count,
        green_light_duration,
        red_light_duration,
        optimized_green: optimized_green(green_light_duration, car_count),
        optimized_red: optimized_red(red_light_duration, car_count),
    }
}

impl fmt::Display for OptimizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nOptimizing Traffic Flow...")?;
        writeln!(f, "Number of Cars: {}", self.car_count)?;
        writeln!(
            f,
            "Initial Green Light Duration: {} seconds",
            self.green_light_duration
        )?;
        writeln!(
            f,
            "Initial Red Light Duration: {} seconds",
            self.red_light_duration
        )?;
        writeln!(
            f,
            "Optimized Green Light Duration (based on {} cars): {:.2} seconds",
            self.car_count, self.optimized_green
        )?;
        writeln!(
            f,
            "Optimized Red Light Duration (based on {} cars): {:.2} seconds",
            self.car_count, self.optimized_red
        )
    }
}
