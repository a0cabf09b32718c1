//! Pulse propagation engine.
//!
//! This module drives a [`Network`] one trigger cycle at a time and analyzes
//! the resulting traffic.
//!
//! ## Trigger Cycles
//!
//! A trigger cycle (a button press) proceeds as follows:
//!
//! 1. A low pulse from the initiator is queued for the entry point
//! 2. The oldest pending pulse is popped, counted and shown to the observer
//! 3. If the target is a declared module it reacts, and any emitted pulse is
//!    queued once per fan-out target in declaration order
//! 4. Steps 2 and 3 repeat until the queue is empty
//!
//! The queue is strictly first-in first-out, so every consequence of an
//! earlier pulse is queued before those of a later sibling.

mod analyzer;
mod scheduler;

pub use analyzer::{brute_force_first_low, AnalyzerConfig, CycleAnalyzer, CycleReport, FeederPeriod};
pub use scheduler::{CycleStats, Event, Scheduler, SchedulerConfig};

use crate::error::Result;
use crate::network::Network;

/// Press the button `presses` times and total the pulses sent.
pub fn count_pulses(network: Network, presses: u64, config: SchedulerConfig) -> CycleStats {
    let mut scheduler = Scheduler::with_config(network, config);
    scheduler.run_trigger_cycles(presses)
}

/// Find the fewest presses after which the configured target receives low.
pub fn fewest_presses(
    network: Network,
    scheduler_config: SchedulerConfig,
    analyzer_config: AnalyzerConfig,
) -> Result<CycleReport> {
    let mut scheduler = Scheduler::with_config(network, scheduler_config);
    CycleAnalyzer::with_config(analyzer_config).analyze(&mut scheduler)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "broadcaster -> a, b, c\n%a -> b\n%b -> c\n%c -> inv\n&inv -> a";

    #[test]
    fn test_count_pulses() {
        let network = Network::parse(EXAMPLE).unwrap();
        let stats = count_pulses(network, 1000, SchedulerConfig::default());
        assert_eq!(stats.product(), 32_000_000);
    }

    #[test]
    fn test_parts_use_independent_networks() {
        let input = "broadcaster -> a0\n%a0 -> a1, ca\n%a1 -> ca\n&ca -> fa, a0\n&fa -> hub\n&hub -> rx";
        let network = Network::parse(input).unwrap();

        let stats = count_pulses(network.clone(), 1000, SchedulerConfig::default());
        assert!(stats.total() > 0);

        let report = fewest_presses(network, SchedulerConfig::default(), AnalyzerConfig::default()).unwrap();
        assert_eq!(report.presses, 3);
    }
}
