//! All-high gate module.

use std::collections::BTreeMap;

use crate::network::{ModuleId, Signal};

/// A module that remembers the last pulse from each of its inputs.
///
/// After updating the memory for the sender, the gate emits low if every
/// remembered pulse is high and high otherwise. It never suppresses output.
///
/// The set of inputs is registered once while the network is built (see
/// [`crate::network::Network::from_ast`]) and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllHighGate {
    pub id: ModuleId,
    pub targets: Vec<ModuleId>,
    memory: BTreeMap<ModuleId, Signal>,
}

impl AllHighGate {
    /// Create a new gate with no registered inputs.
    pub fn new(id: ModuleId, targets: Vec<ModuleId>) -> Self {
        Self {
            id,
            targets,
            memory: BTreeMap::new(),
        }
    }

    /// Register an upstream module. Its remembered pulse starts low.
    pub(crate) fn add_input(&mut self, input: ModuleId) {
        self.memory.insert(input, Signal::Low);
    }

    /// Registered inputs, in identifier order.
    pub fn inputs(&self) -> impl Iterator<Item = &ModuleId> {
        self.memory.keys()
    }

    /// Number of registered inputs.
    pub fn input_count(&self) -> usize {
        self.memory.len()
    }

    /// Last pulse remembered for an input.
    pub fn remembered(&self, input: &str) -> Option<Signal> {
        self.memory.get(input).copied()
    }

    /// Record the pulse from `sender` and compute the output.
    pub fn receive(&mut self, sender: &ModuleId, signal: Signal) -> Signal {
        match self.memory.get_mut(sender.as_str()) {
            Some(slot) => *slot = signal,
            None => log::warn!("gate '{}' ignored pulse from unregistered input '{}'", self.id, sender),
        }

        if self.memory.values().all(Signal::is_high) {
            Signal::Low
        } else {
            Signal::High
        }
    }

    /// Forget every remembered pulse.
    pub fn reset(&mut self) {
        for slot in self.memory.values_mut() {
            *slot = Signal::Low;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(inputs: &[&str]) -> AllHighGate {
        let mut g = AllHighGate::new(ModuleId::new("con"), vec![ModuleId::new("output")]);
        for input in inputs {
            g.add_input(ModuleId::new(*input));
        }
        g
    }

    #[test]
    fn test_inputs_start_low() {
        let g = gate(&["a", "b"]);
        assert_eq!(g.input_count(), 2);
        assert_eq!(g.remembered("a"), Some(Signal::Low));
        assert_eq!(g.remembered("b"), Some(Signal::Low));
        assert_eq!(g.remembered("c"), None);
    }

    #[test]
    fn test_single_input_inverts() {
        let mut g = gate(&["c"]);
        let c = ModuleId::new("c");
        assert_eq!(g.receive(&c, Signal::High), Signal::Low);
        assert_eq!(g.receive(&c, Signal::Low), Signal::High);
    }

    #[test]
    fn test_low_only_when_all_high() {
        let mut g = gate(&["a", "b", "c"]);
        let (a, b, c) = (ModuleId::new("a"), ModuleId::new("b"), ModuleId::new("c"));

        assert_eq!(g.receive(&a, Signal::High), Signal::High);
        assert_eq!(g.receive(&b, Signal::High), Signal::High);
        assert_eq!(g.receive(&c, Signal::High), Signal::Low);
        // Repeating a high keeps the gate satisfied
        assert_eq!(g.receive(&a, Signal::High), Signal::Low);
        assert_eq!(g.receive(&b, Signal::Low), Signal::High);
        assert_eq!(g.receive(&b, Signal::High), Signal::Low);
    }

    #[test]
    fn test_unregistered_sender_does_not_extend_memory() {
        let mut g = gate(&["a"]);
        assert_eq!(g.receive(&ModuleId::new("button"), Signal::Low), Signal::High);
        assert_eq!(g.input_count(), 1);
        assert_eq!(g.remembered("button"), None);
    }

    #[test]
    fn test_reset_restores_low_memory() {
        let mut g = gate(&["a"]);
        g.receive(&ModuleId::new("a"), Signal::High);
        g.reset();
        assert_eq!(g.remembered("a"), Some(Signal::Low));
        assert_eq!(g.input_count(), 1);
    }
}
