//! Network validation.

use crate::dsl::ModuleKind;
use crate::error::{PulseError, Result};

use super::Network;

/// Validate a network for simulation.
///
/// Checks:
/// - The network declares at least one module
/// - The entry point is declared
/// - The entry point is a relay
///
/// Undeclared targets are reported but never rejected; they act as sinks.
pub fn validate_network(network: &Network, entry_point: &str) -> Result<()> {
    if network.is_empty() {
        return Err(PulseError::topology("Network has no modules"));
    }

    let entry = network
        .get(entry_point)
        .ok_or_else(|| PulseError::MissingEntryPoint {
            name: entry_point.to_string(),
        })?;

    if entry.kind() != ModuleKind::Relay {
        return Err(PulseError::topology(format!(
            "Entry point '{}' must be a relay, found {}",
            entry_point,
            entry.kind()
        )));
    }

    for sink in network.sinks() {
        log::debug!("'{}' is not declared and will act as a sink", sink);
    }

    Ok(())
}
