//! Dispatch from a scenario choice to its computation

use std::fmt;

use super::congestion::{predict_traffic_congestion, CongestionReport};
use super::flow::{simulate_traffic_flow, FlowReport};
use super::optimize::{optimize_traffic_flow, OptimizeReport};
use super::rng::RandomSource;
use super::signal::{optimize_signal_timing, SignalReport};

/// The four computations offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Scenario {
    /// Simulate Traffic Flow
    Flow,
    /// Optimize Traffic Flow
    Optimize,
    /// Predict Traffic Congestion
    Congestion,
    /// Optimize Signal Timing
    Signal,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Flow,
        Scenario::Optimize,
        Scenario::Congestion,
        Scenario::Signal,
    ];

    /// Label shown in the menu
    pub fn title(&self) -> &'static str {
        match self {
            Scenario::Flow => "Simulate Traffic Flow",
            Scenario::Optimize => "Optimize Traffic Flow",
            Scenario::Congestion => "Predict Traffic Congestion",
            Scenario::Signal => "Optimize Signal Timing",
        }
    }

    /// Draw fresh inputs and compute this scenario's report
    pub fn run<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Report {
        match self {
            Scenario::Flow => Report::Flow(simulate_traffic_flow(rng)),
            Scenario::Optimize => Report::Optimize(optimize_traffic_flow(rng)),
            Scenario::Congestion => Report::Congestion(predict_traffic_congestion(rng)),
            Scenario::Signal => Report::Signal(optimize_signal_timing(rng)),
        }
    }
}

/// Output of any scenario
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Flow(FlowReport),
    Optimize(OptimizeReport),
    Congestion(CongestionReport),
    Signal(SignalReport),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Flow(report) => fmt::Display::fmt(report, f),
            Report::Optimize(report) => fmt::Display::fmt(report, f),
            Report::Congestion(report) => fmt::Display::fmt(report, f),
            Report::Signal(report) => fmt::Display::fmt(report, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::rng::SimRng;

    #[test]
    fn test_run_returns_matching_report() {
        let mut rng = SimRng::new_with_seed(1);
        for scenario in Scenario::ALL {
            let report = scenario.run(&mut rng);
            let matches = matches!(
                (scenario, &report),
                (Scenario::Flow, Report::Flow(_))
                    | (Scenario::Optimize, Report::Optimize(_))
                    | (Scenario::Congestion, Report::Congestion(_))
                    | (Scenario::Signal, Report::Signal(_))
            );
            assert!(matches, "{:?} produced {:?}", scenario, report);
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let mut a = SimRng::new_with_seed(99);
        let mut b = SimRng::new_with_seed(99);
        for scenario in Scenario::ALL {
            assert_eq!(scenario.run(&mut a), scenario.run(&mut b));
        }
    }
}
