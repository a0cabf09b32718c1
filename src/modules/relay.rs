//! Relay module.

use crate::network::{ModuleId, Signal};

/// A stateless module that forwards every signal unchanged.
///
/// The entry point of a network is always a relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relay {
    pub id: ModuleId,
    pub targets: Vec<ModuleId>,
}

impl Relay {
    /// Create a new relay.
    pub fn new(id: ModuleId, targets: Vec<ModuleId>) -> Self {
        Self { id, targets }
    }

    /// Forward the received signal.
    pub fn receive(&self, signal: Signal) -> Signal {
        signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_forwards_input() {
        let relay = Relay::new(ModuleId::new("broadcaster"), vec![ModuleId::new("a")]);
        for signal in [Signal::Low, Signal::High, Signal::High, Signal::Low] {
            assert_eq!(relay.receive(signal), signal);
        }
    }
}
