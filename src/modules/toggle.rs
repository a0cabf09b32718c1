//! Toggle module.

use crate::network::{ModuleId, Signal};

/// A module with a single on/off bit.
///
/// High pulses are ignored. Each low pulse flips the bit, after which the
/// module emits high if it is now on and low if it is now off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub id: ModuleId,
    pub targets: Vec<ModuleId>,
    on: bool,
}

impl Toggle {
    /// Create a new toggle in the off state.
    pub fn new(id: ModuleId, targets: Vec<ModuleId>) -> Self {
        Self {
            id,
            targets,
            on: false,
        }
    }

    /// Current state of the bit.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// React to a pulse. Returns `None` when nothing is emitted.
    pub fn receive(&mut self, signal: Signal) -> Option<Signal> {
        match signal {
            Signal::High => None,
            Signal::Low => {
                self.on = !self.on;
                Some(if self.on { Signal::High } else { Signal::Low })
            }
        }
    }

    /// Return to the off state.
    pub fn reset(&mut self) {
        self.on = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle() -> Toggle {
        Toggle::new(ModuleId::new("a"), vec![ModuleId::new("b")])
    }

    #[test]
    fn test_high_is_ignored() {
        let mut t = toggle();
        assert_eq!(t.receive(Signal::High), None);
        assert!(!t.is_on());
    }

    #[test]
    fn test_low_alternates_output() {
        let mut t = toggle();
        let inputs = [
            Signal::Low,
            Signal::High,
            Signal::Low,
            Signal::Low,
            Signal::High,
            Signal::High,
            Signal::Low,
        ];
        let outputs: Vec<_> = inputs.iter().map(|&s| t.receive(s)).collect();
        assert_eq!(
            outputs,
            vec![
                Some(Signal::High),
                None,
                Some(Signal::Low),
                Some(Signal::High),
                None,
                None,
                Some(Signal::Low),
            ]
        );
        assert!(!t.is_on());
    }

    #[test]
    fn test_reset() {
        let mut t = toggle();
        t.receive(Signal::Low);
        assert!(t.is_on());
        t.reset();
        assert!(!t.is_on());
        assert_eq!(t.receive(Signal::Low), Some(Signal::High));
    }
}
