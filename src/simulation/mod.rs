//! Traffic scenarios
//!
//! Each scenario draws its own random inputs, applies a closed-form formula
//! and returns a report. Nothing here does console I/O, so every scenario
//! can be tested by handing it a scripted random source.

mod congestion;
mod flow;
mod optimize;
mod rng;
mod scenario;
mod signal;
mod types;

pub use congestion::{
    congestion_probability, predict_traffic_congestion, CongestionLevel, CongestionReport,
};
pub use flow::{simulate_traffic_flow, travel_time, FlowReport};
pub use optimize::{optimize_traffic_flow, optimized_green, optimized_red, OptimizeReport};
pub use rng::{box_muller, normal_sample, RandomSource, ScriptedSource, SimRng};
pub use scenario::{Report, Scenario};
pub use signal::{optimize_green_light, optimize_red_light, optimize_signal_timing, SignalReport};
pub use types::{
    AVERAGE_SPEED_RANGE, CAR_COUNT_RANGE, HIGH_CONGESTION_THRESHOLD, LIGHT_DURATION_RANGE,
    MAX_LIGHT_DURATION, MEAN_TRAFFIC_FLOW, MIN_LIGHT_DURATION, MODERATE_CONGESTION_THRESHOLD,
    ROAD_CAPACITY, SIGNAL_CYCLE, STD_DEV_TRAFFIC_FLOW,
};
