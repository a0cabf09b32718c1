//! # Pulse Net
//!
//! A discrete-event simulator for networks of modules exchanging binary pulses.
//!
//! This library provides:
//! - A line-oriented format for declaring modules and their wiring
//! - Two-phase construction of the wiring graph
//! - Relay, toggle and all-high gate module behavior
//! - A FIFO event scheduler that runs one trigger cycle per button press
//! - Cycle analysis that finds when a target sink first receives a low pulse
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Parser for module declarations
//! - [`network`] - Wiring graph representation and validation
//! - [`modules`] - Module behavior (relay, toggle, all-high gate)
//! - [`sim`] - Event scheduling and cycle analysis
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! RUST_LOG=info pulsenet network.txt --presses 1000 --target rx
//! ```
//!
//! ### Library
//!
//! ```
//! use pulse_net::{Network, Scheduler};
//!
//! let network = Network::parse("broadcaster -> a, b, c\n%a -> b\n%b -> c\n%c -> inv\n&inv -> a")?;
//! let mut scheduler = Scheduler::new(network);
//! let stats = scheduler.run_trigger_cycles(1000);
//! assert_eq!(stats.product(), 32_000_000);
//! # Ok::<(), pulse_net::PulseError>(())
//! ```
//!
//! ## Fewest Presses
//!
//! The press count after which a target sink first receives a low pulse is
//! usually far too large to reach by simulation. The [`sim::CycleAnalyzer`]
//! watches each input of the gate in front of the target, records the press
//! at which it first sends high, verifies that later occurrences fall on
//! multiples of that press, and returns the least common multiple.

pub mod dsl;
pub mod error;
pub mod modules;
pub mod network;
pub mod sim;

// Re-export main types for convenience
pub use error::{PulseError, Result};
pub use network::{ModuleId, Network, Signal};
pub use sim::{CycleAnalyzer, CycleStats, Scheduler};

/// Default entry point module
pub const DEFAULT_ENTRY_POINT: &str = "broadcaster";

/// Default sender name of the initiating pulse
pub const DEFAULT_INITIATOR: &str = "button";

/// Default target sink for the fewest-presses search
pub const DEFAULT_TARGET: &str = "rx";

/// Default number of presses tallied for the pulse product
pub const DEFAULT_PRESSES: u64 = 1000;

/// Default press budget for a single cycle analysis
pub const DEFAULT_MAX_PRESSES: u64 = 1_000_000;
