//! Signal Timing Optimization scenario
//!
//! Samples a traffic flow from the historical normal distribution and
//! splits a signal cycle between green and red phases based on it.

use log::debug;
use std::fmt;

use super::rng::{normal_sample, RandomSource};
use super::types::{
    MAX_LIGHT_DURATION, MEAN_TRAFFIC_FLOW, MIN_LIGHT_DURATION, SIGNAL_CYCLE, STD_DEV_TRAFFIC_FLOW,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SignalReport {
    /// Sampled flow in cars per minute
    pub traffic_flow: f64,
    pub green_light_duration: f64,
    pub red_light_duration: f64,
}

fn clamp_duration(seconds: f64) -> f64 {
    seconds.clamp(MIN_LIGHT_DURATION, MAX_LIGHT_DURATION)
}

/// Green phase grows with flow
pub fn optimize_green_light(traffic_flow: f64) -> f64 {
    clamp_duration(traffic_flow / 2.0)
}

/// Red phase takes what the green phase leaves of the cycle
pub fn optimize_red_light(traffic_flow: f64) -> f64 {
    clamp_duration(SIGNAL_CYCLE - traffic_flow / 2.0)
}

pub fn optimize_signal_timing<R: RandomSource + ?Sized>(rng: &mut R) -> SignalReport {
    let traffic_flow = normal_sample(rng, MEAN_TRAFFIC_FLOW, STD_DEV_TRAFFIC_FLOW);
    debug!("signal draw: flow={:.4}", traffic_flow);

    SignalReport {
        traffic_flow,
        green_light_duration: optimize_green_light(traffic_flow),
        red_light_duration: optimize_red_light(traffic_flow),
    }
}

impl fmt::Display for SignalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\nOptimizing Signal Timing based on Historical Traffic Flow..."
        )?;
        writeln!(
            f,
            "Generated Traffic Flow (cars per minute): {:.2}",
            self.traffic_flow
        )?;
        writeln!(
            f,
            "Optimized Green Light Duration (for {:.2} cars/min): {:.2} seconds",
            self.traffic_flow, self.green_light_duration
        )?;
        writeln!(
            f,
            "Optimized Red Light Duration (for {:.2} cars/min): {:.2} seconds",
            self.traffic_flow, self.red_light_duration
        )
    }
}
