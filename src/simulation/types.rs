//! Shared constants for the traffic scenarios
//!
//! Every scenario draws from the same fixed ranges and compares against
//! the same road capacity, so they live together here.

use std::ops::Range;

/// Number of cars a road segment is considered able to carry
pub const ROAD_CAPACITY: f64 = 200.0;

/// Range of simulated car counts (upper bound exclusive)
pub const CAR_COUNT_RANGE: Range<i32> = 50..200;

/// Range of simulated average speeds in km/h (upper bound exclusive)
pub const AVERAGE_SPEED_RANGE: Range<i32> = 20..60;

/// Range of initial light durations in seconds (upper bound exclusive)
pub const LIGHT_DURATION_RANGE: Range<i32> = 30..120;

/// Shortest light phase the signal timing scenario will assign
pub const MIN_LIGHT_DURATION: f64 = 30.0;

/// Longest light phase the signal timing scenario will assign
pub const MAX_LIGHT_DURATION: f64 = 120.0;

/// Full signal cycle the red phase is derived from
pub const SIGNAL_CYCLE: f64 = 180.0;

/// Historical traffic flow in cars per minute
pub const MEAN_TRAFFIC_FLOW: f64 = 100.0;
pub const STD_DEV_TRAFFIC_FLOW: f64 = 20.0;

/// Congestion probability above which congestion is likely
pub const HIGH_CONGESTION_THRESHOLD: f64 = 0.7;

/// Congestion probability above which congestion should be watched
pub const MODERATE_CONGESTION_THRESHOLD: f64 = 0.4;
