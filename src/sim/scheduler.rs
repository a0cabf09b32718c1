//! Event scheduler driving trigger cycles.

use std::collections::VecDeque;
use std::fmt;
use std::ops::AddAssign;

use crate::network::{ModuleId, Network, Signal};
use crate::{DEFAULT_ENTRY_POINT, DEFAULT_INITIATOR};

/// Configuration for the scheduler.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Module that receives the initiating low pulse.
    pub entry_point: ModuleId,
    /// Sender name attached to the initiating pulse.
    pub initiator: ModuleId,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            entry_point: ModuleId::new(DEFAULT_ENTRY_POINT),
            initiator: ModuleId::new(DEFAULT_INITIATOR),
        }
    }
}

impl SchedulerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry point module.
    pub fn with_entry_point(mut self, entry_point: impl Into<ModuleId>) -> Self {
        self.entry_point = entry_point.into();
        self
    }

    /// Set the sender name of the initiating pulse.
    pub fn with_initiator(mut self, initiator: impl Into<ModuleId>) -> Self {
        self.initiator = initiator.into();
        self
    }
}

/// A pulse in flight from one module to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub sender: ModuleId,
    pub target: ModuleId,
    pub signal: Signal,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{}-> {}", self.sender, self.signal, self.target)
    }
}

/// Pulse counts observed during one or more trigger cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    pub low: u64,
    pub high: u64,
}

impl CycleStats {
    /// Count one pulse.
    pub fn record(&mut self, signal: Signal) {
        match signal {
            Signal::Low => self.low += 1,
            Signal::High => self.high += 1,
        }
    }

    /// Total number of pulses.
    pub fn total(&self) -> u64 {
        self.low + self.high
    }

    /// Product of low and high counts.
    pub fn product(&self) -> u64 {
        self.low * self.high
    }
}

impl AddAssign for CycleStats {
    fn add_assign(&mut self, other: Self) {
        self.low += other.low;
        self.high += other.high;
    }
}

/// Drives trigger cycles over a network it owns.
///
/// Each call to [`Scheduler::run_trigger_cycle`] is one button press: a low
/// pulse is injected at the entry point and pending events are processed in
/// strict FIFO order until the queue drains. Module state carries over from
/// one press to the next.
pub struct Scheduler {
    /// The network being driven
    network: Network,
    config: SchedulerConfig,
    /// Presses completed since construction
    presses: u64,
    /// Pending events, reused across presses
    queue: VecDeque<Event>,
}

impl Scheduler {
    /// Create a new scheduler with default configuration.
    pub fn new(network: Network) -> Self {
        Self::with_config(network, SchedulerConfig::default())
    }

    /// Create a new scheduler with custom configuration.
    pub fn with_config(network: Network, config: SchedulerConfig) -> Self {
        Self {
            network,
            config,
            presses: 0,
            queue: VecDeque::new(),
        }
    }

    /// Run one trigger cycle.
    pub fn run_trigger_cycle(&mut self) -> CycleStats {
        self.run_trigger_cycle_with_observer(|_| {})
    }

    /// Run one trigger cycle, showing every dispatched event to `observer`.
    ///
    /// Events addressed to undeclared modules are counted and observed but
    /// not dispatched.
    pub fn run_trigger_cycle_with_observer<F>(&mut self, mut observer: F) -> CycleStats
    where
        F: FnMut(&Event),
    {
        let mut stats = CycleStats::default();

        self.queue.push_back(Event {
            sender: self.config.initiator.clone(),
            target: self.config.entry_point.clone(),
            signal: Signal::Low,
        });

        while let Some(event) = self.queue.pop_front() {
            stats.record(event.signal);
            observer(&event);
            log::trace!("{}", event);

            let Some(module) = self.network.get_mut(event.target.as_str()) else {
                continue;
            };

            if let Some(signal) = module.receive(&event.sender, event.signal) {
                for target in module.targets() {
                    self.queue.push_back(Event {
                        sender: event.target.clone(),
                        target: target.clone(),
                        signal,
                    });
                }
            }
        }

        self.presses += 1;
        log::debug!(
            "press {}: {} low, {} high",
            self.presses,
            stats.low,
            stats.high
        );

        stats
    }

    /// Run `count` trigger cycles and sum their statistics.
    pub fn run_trigger_cycles(&mut self, count: u64) -> CycleStats {
        let mut stats = CycleStats::default();
        for _ in 0..count {
            stats += self.run_trigger_cycle();
        }
        stats
    }

    /// Presses completed since construction.
    pub fn presses(&self) -> u64 {
        self.presses
    }

    /// Get the configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Get a reference to the network.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Release the network.
    pub fn into_network(self) -> Network {
        self.network
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::Module;

    const EXAMPLE: &str = "broadcaster -> a, b, c\n%a -> b\n%b -> c\n%c -> inv\n&inv -> a";

    const EXAMPLE_WITH_SINK: &str =
        "broadcaster -> a\n%a -> inv, con\n&inv -> b\n%b -> con\n&con -> output";

    fn scheduler(input: &str) -> Scheduler {
        Scheduler::new(Network::parse(input).unwrap())
    }

    fn toggle_states(network: &Network) -> Vec<bool> {
        network
            .modules()
            .iter()
            .filter_map(|m| match m {
                Module::Toggle(t) => Some(t.is_on()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_single_press_example() {
        let mut sim = scheduler(EXAMPLE);
        let stats = sim.run_trigger_cycle();
        assert_eq!(stats, CycleStats { low: 8, high: 4 });
        assert_eq!(stats.total(), 12);
        assert_eq!(sim.presses(), 1);

        // Every toggle flipped on and back off
        assert_eq!(toggle_states(sim.network()), vec![false, false, false]);
        let inv = sim.network().gate("inv").unwrap();
        assert_eq!(inv.remembered("c"), Some(Signal::Low));
    }

    #[test]
    fn test_single_press_event_order() {
        let mut sim = scheduler(EXAMPLE);
        let mut events = Vec::new();
        sim.run_trigger_cycle_with_observer(|e| events.push(e.to_string()));

        assert_eq!(
            events,
            vec![
                "button -low-> broadcaster",
                "broadcaster -low-> a",
                "broadcaster -low-> b",
                "broadcaster -low-> c",
                "a -high-> b",
                "b -high-> c",
                "c -high-> inv",
                "inv -low-> a",
                "a -low-> b",
                "b -low-> c",
                "c -low-> inv",
                "inv -high-> a",
            ]
        );
    }

    #[test]
    fn test_thousand_presses_example() {
        let mut sim = scheduler(EXAMPLE);
        let stats = sim.run_trigger_cycles(1000);
        assert_eq!(stats, CycleStats { low: 8000, high: 4000 });
        assert_eq!(stats.product(), 32_000_000);
    }

    #[test]
    fn test_thousand_presses_example_with_sink() {
        let mut sim = scheduler(EXAMPLE_WITH_SINK);
        let stats = sim.run_trigger_cycles(1000);
        assert_eq!(stats, CycleStats { low: 4250, high: 2750 });
        assert_eq!(stats.product(), 11_687_500);
    }

    #[test]
    fn test_state_persists_across_presses() {
        let mut sim = scheduler(EXAMPLE_WITH_SINK);
        sim.run_trigger_cycle();
        assert_eq!(toggle_states(sim.network()), vec![true, true]);
        sim.run_trigger_cycle();
        assert_eq!(toggle_states(sim.network()), vec![false, true]);
        assert_eq!(sim.presses(), 2);
    }

    #[test]
    fn test_sink_events_are_counted_not_dispatched() {
        let mut sim = scheduler("broadcaster -> nowhere");
        let mut targets = Vec::new();
        let stats = sim.run_trigger_cycle_with_observer(|e| targets.push(e.target.clone()));
        assert_eq!(stats, CycleStats { low: 2, high: 0 });
        assert_eq!(targets, vec!["broadcaster", "nowhere"]);
    }

    #[test]
    fn test_deterministic_runs() {
        let mut first = scheduler(EXAMPLE_WITH_SINK);
        let mut second = scheduler(EXAMPLE_WITH_SINK);

        for _ in 0..25 {
            let mut a = Vec::new();
            let mut b = Vec::new();
            first.run_trigger_cycle_with_observer(|e| a.push(e.clone()));
            second.run_trigger_cycle_with_observer(|e| b.push(e.clone()));
            assert_eq!(a, b);
        }

        assert_eq!(first.network(), second.network());
    }

    #[test]
    fn test_reset_replays_identically() {
        let mut sim = scheduler(EXAMPLE_WITH_SINK);
        let before = sim.run_trigger_cycles(7);

        let mut network = sim.into_network();
        network.reset();
        assert_eq!(network, Network::parse(EXAMPLE_WITH_SINK).unwrap());

        let mut sim = Scheduler::new(network);
        assert_eq!(sim.run_trigger_cycles(7), before);
    }

    #[test]
    fn test_custom_entry_point() {
        let config = SchedulerConfig::new()
            .with_entry_point("start")
            .with_initiator("switch");
        let mut sim = Scheduler::with_config(Network::parse("start -> a\n%a -> rx").unwrap(), config);

        let mut first = None;
        sim.run_trigger_cycle_with_observer(|e| {
            if first.is_none() {
                first = Some(e.clone());
            }
        });
        let first = first.unwrap();
        assert_eq!(first.sender, "switch");
        assert_eq!(first.target, "start");
    }
}
