//! Cycle analysis for the fewest presses that deliver a low pulse to a target.
//!
//! Simulating press after press until the target fires is infeasible for
//! realistic networks: the answer is routinely in the hundreds of trillions.
//! Instead the analyzer looks at the single gate in front of the target.
//! That gate emits low only when every feeder last sent high, so the target
//! fires on the first press where all feeders send high together.
//!
//! Each feeder is watched until it first sends high into the gate. That
//! press index is taken as the feeder's period, and the answer is the least
//! common multiple of all periods. The shortcut is only valid when every
//! feeder keeps firing at exact multiples of its period, so each later
//! occurrence seen along the way is checked and a mismatch is reported as
//! [`PulseError::IrregularCycle`].

use std::collections::BTreeMap;

use num_integer::Integer;

use super::scheduler::Scheduler;
use crate::error::{PulseError, Result};
use crate::modules::Module;
use crate::network::{ModuleId, Network, Signal};
use crate::{DEFAULT_MAX_PRESSES, DEFAULT_TARGET};

/// Configuration for the cycle analyzer.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Sink whose first low pulse is searched for.
    pub target: ModuleId,
    /// Upper bound on presses simulated by one search.
    pub max_presses: u64,
    /// Extra occurrences each feeder must show at its period before the
    /// result is accepted.
    pub confirmations: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            target: ModuleId::new(DEFAULT_TARGET),
            max_presses: DEFAULT_MAX_PRESSES,
            confirmations: 0,
        }
    }
}

impl AnalyzerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target sink.
    pub fn with_target(mut self, target: impl Into<ModuleId>) -> Self {
        self.target = target.into();
        self
    }

    /// Set the press budget.
    pub fn with_max_presses(mut self, max_presses: u64) -> Self {
        self.max_presses = max_presses;
        self
    }

    /// Require `confirmations` additional on-period occurrences per feeder.
    ///
    /// - 0 (default): accept each feeder's first occurrence
    /// - 1 or more: keep pressing until every feeder has repeated, at the
    ///   cost of simulating that many more periods of the slowest feeder
    pub fn with_confirmations(mut self, confirmations: u64) -> Self {
        self.confirmations = confirmations;
        self
    }
}

/// The detected period of one feeder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeederPeriod {
    pub feeder: ModuleId,
    pub period: u64,
}

/// Outcome of a cycle analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Gate directly in front of the target
    pub gate: ModuleId,
    /// Period of every feeder, in identifier order
    pub periods: Vec<FeederPeriod>,
    /// Fewest presses after which the target receives a low pulse
    pub presses: u64,
}

/// Occurrence bookkeeping for one feeder.
#[derive(Debug, Default)]
struct FeederTrack {
    period: Option<u64>,
    occurrences: u64,
    last_press: u64,
}

impl FeederTrack {
    /// Record a high pulse into the gate during `press`.
    ///
    /// Returns the press that was expected instead when the occurrence is
    /// off period.
    fn observe(&mut self, press: u64) -> std::result::Result<(), u64> {
        if self.last_press == press {
            return Ok(());
        }
        self.last_press = press;
        self.occurrences += 1;

        match self.period {
            None => {
                self.period = Some(press);
                Ok(())
            }
            Some(period) => {
                let expected = self.occurrences * period;
                if press == expected {
                    Ok(())
                } else {
                    Err(expected)
                }
            }
        }
    }

    fn is_settled(&self, confirmations: u64) -> bool {
        self.period.is_some() && self.occurrences > confirmations
    }
}

/// Finds the fewest presses that deliver a low pulse to a target sink.
#[derive(Debug, Clone, Default)]
pub struct CycleAnalyzer {
    config: AnalyzerConfig,
}

impl CycleAnalyzer {
    /// Create a new analyzer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Identify the gate in front of the target and the modules feeding it.
    pub fn locate_gate(&self, network: &Network) -> Result<(ModuleId, Vec<ModuleId>)> {
        let target = self.config.target.as_str();
        let candidates = network.predecessors(target);

        let gate_id = match candidates.as_slice() {
            [] => {
                return Err(PulseError::NoGateForTarget {
                    target: target.to_string(),
                })
            }
            [single] => *single,
            _ => {
                return Err(PulseError::AmbiguousGate {
                    target: target.to_string(),
                    candidates: candidates.iter().map(|c| c.to_string()).collect(),
                })
            }
        };

        let module = network
            .get(gate_id.as_str())
            .ok_or_else(|| PulseError::NoGateForTarget {
                target: target.to_string(),
            })?;
        let Module::AllHighGate(gate) = module else {
            return Err(PulseError::UnsupportedGate {
                gate: gate_id.to_string(),
                kind: module.kind().to_string(),
            });
        };

        let feeders: Vec<ModuleId> = gate.inputs().cloned().collect();
        if feeders.is_empty() {
            return Err(PulseError::NoFeeders {
                gate: gate_id.to_string(),
            });
        }

        Ok((gate_id.clone(), feeders))
    }

    /// Press until every feeder's period is known and combine them.
    ///
    /// Press indices are counted from the construction of the scheduler's
    /// network, so the scheduler should normally be fresh.
    pub fn analyze(&self, scheduler: &mut Scheduler) -> Result<CycleReport> {
        let (gate, feeders) = self.locate_gate(scheduler.network())?;
        log::info!(
            "analyzing {} feeders of gate '{}' in front of '{}'",
            feeders.len(),
            gate,
            self.config.target
        );

        let mut tracks: BTreeMap<ModuleId, FeederTrack> = feeders
            .into_iter()
            .map(|f| (f, FeederTrack::default()))
            .collect();

        let limit = scheduler.presses().saturating_add(self.config.max_presses);

        while !tracks.values().all(|t| t.is_settled(self.config.confirmations)) {
            if scheduler.presses() >= limit {
                return Err(PulseError::PressLimitExceeded {
                    limit: self.config.max_presses,
                });
            }

            let press = scheduler.presses() + 1;
            let mut irregular: Option<PulseError> = None;

            scheduler.run_trigger_cycle_with_observer(|event| {
                if event.signal != Signal::High || event.target != gate || irregular.is_some() {
                    return;
                }
                if let Some(track) = tracks.get_mut(&event.sender) {
                    let was_new = track.period.is_none();
                    match track.observe(press) {
                        Ok(()) if was_new => {
                            log::info!("feeder '{}' first sent high at press {}", event.sender, press)
                        }
                        Ok(()) => {}
                        Err(expected) => {
                            irregular = Some(PulseError::IrregularCycle {
                                feeder: event.sender.to_string(),
                                period: track.period.unwrap_or(expected),
                                press,
                                expected,
                            })
                        }
                    }
                }
            });

            if let Some(err) = irregular {
                return Err(err);
            }
        }

        let periods: Vec<FeederPeriod> = tracks
            .into_iter()
            .filter_map(|(feeder, track)| track.period.map(|period| FeederPeriod { feeder, period }))
            .collect();
        let presses = lcm_of(periods.iter().map(|p| p.period))?;

        log::info!("target '{}' first receives low after {} presses", self.config.target, presses);

        Ok(CycleReport {
            gate,
            periods,
            presses,
        })
    }
}

/// Least common multiple of all values, failing on overflow.
fn lcm_of(values: impl IntoIterator<Item = u64>) -> Result<u64> {
    values.into_iter().try_fold(1u64, |acc, value| {
        let gcd = acc.gcd(&value);
        (acc / gcd).checked_mul(value).ok_or(PulseError::PeriodOverflow)
    })
}

/// Simulate until `target` receives a low pulse and return that press.
///
/// This is the direct strategy the analyzer avoids. It is useful as a cross
/// check on small networks and as a fallback when feeders are irregular.
pub fn brute_force_first_low(scheduler: &mut Scheduler, target: &str, limit: u64) -> Result<u64> {
    let end = scheduler.presses().saturating_add(limit);

    while scheduler.presses() < end {
        let mut hit = false;
        scheduler.run_trigger_cycle_with_observer(|event| {
            if event.signal == Signal::Low && event.target == target {
                hit = true;
            }
        });
        if hit {
            return Ok(scheduler.presses());
        }
    }

    Err(PulseError::PressLimitExceeded { limit })
}
