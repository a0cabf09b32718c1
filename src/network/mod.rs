//! Wiring graph representation and validation.
//!
//! This module provides the internal representation of a network after
//! parsing. The [`Network`] struct holds every module together with its
//! fan-out list in a form suitable for simulation.

mod graph;
mod types;
mod validate;

pub use graph::Network;
pub use types::*;
pub use validate::validate_network;
