//! Error types for the pulse network simulator.
//!
//! This module provides a unified error type [`PulseError`] that covers
//! all error conditions that can occur while parsing module declarations,
//! building and validating the wiring graph, and analyzing trigger cycles.
//!
//! Dispatching an event to an undeclared module is deliberately absent from
//! this list: such targets are external sinks and simply absorb the event.

use thiserror::Error;

/// Result type alias using [`PulseError`].
pub type Result<T> = std::result::Result<T, PulseError>;

/// Unified error type for all pulse network operations.
#[derive(Error, Debug)]
pub enum PulseError {
    // ============ Declaration Parsing Errors ============
    /// A line could not be split into identifier, kind and targets
    #[error("Malformed declaration at line {line}: {message}")]
    MalformedDeclaration { line: usize, message: String },

    /// The same module identifier was declared twice
    #[error("Duplicate module '{name}' at line {line}")]
    DuplicateModule { name: String, line: usize },

    // ============ Topology Errors ============
    /// The entry point module is not declared
    #[error("Entry point '{name}' is not declared")]
    MissingEntryPoint { name: String },

    /// Invalid network topology
    #[error("Invalid network topology: {message}")]
    InvalidTopology { message: String },

    /// No declared module forwards to the target
    #[error("No module forwards to target '{target}'")]
    NoGateForTarget { target: String },

    /// More than one module forwards to the target
    #[error("Target '{target}' has more than one predecessor: {candidates:?}")]
    AmbiguousGate {
        target: String,
        candidates: Vec<String>,
    },

    /// The module in front of the target is not an all-high gate
    #[error("Module '{gate}' in front of the target is a {kind}, expected an all-high gate")]
    UnsupportedGate { gate: String, kind: String },

    /// The gate in front of the target has no inputs
    #[error("Gate '{gate}' has no feeders")]
    NoFeeders { gate: String },

    // ============ Analysis Errors ============
    /// A feeder's high emission did not recur at its recorded period
    #[error(
        "Feeder '{feeder}' sent high at press {press}, expected press {expected} (period {period})"
    )]
    IrregularCycle {
        feeder: String,
        period: u64,
        press: u64,
        expected: u64,
    },

    /// The press budget ran out before the search completed
    #[error("Search did not finish within {limit} presses")]
    PressLimitExceeded { limit: u64 },

    /// The least common multiple of the periods does not fit in a u64
    #[error("Least common multiple of feeder periods overflows")]
    PeriodOverflow,

    // ============ I/O Errors ============
    /// Error reading the network description file
    #[error("Failed to read network file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PulseError {
    /// Create a malformed declaration error
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedDeclaration {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid topology error
    pub fn topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}
