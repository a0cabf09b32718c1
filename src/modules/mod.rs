//! Module models for pulse propagation.
//!
//! This module provides the three behavioral units of a network:
//! - Relay: forwards every pulse unchanged
//! - Toggle: one bit, flipped by low pulses
//! - All-high gate: remembers the last pulse from each input
//!
//! Each module owns its ordered fan-out list and reacts to one pulse at a
//! time through [`Module::receive`].

mod gate;
mod relay;
mod toggle;

pub use gate::AllHighGate;
pub use relay::Relay;
pub use toggle::Toggle;

use crate::dsl::{ModuleDecl, ModuleKind};
use crate::network::{ModuleId, Signal};

/// A network module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Module {
    Relay(Relay),
    Toggle(Toggle),
    AllHighGate(AllHighGate),
}

impl Module {
    /// Create a module from a declaration. Gate inputs are registered later.
    pub fn from_decl(decl: &ModuleDecl) -> Self {
        let id = ModuleId::new(decl.name.as_str());
        let targets: Vec<ModuleId> = decl.targets.iter().map(|t| ModuleId::new(t.as_str())).collect();

        match decl.kind {
            ModuleKind::Relay => Module::Relay(Relay::new(id, targets)),
            ModuleKind::Toggle => Module::Toggle(Toggle::new(id, targets)),
            ModuleKind::AllHighGate => Module::AllHighGate(AllHighGate::new(id, targets)),
        }
    }

    /// The module's identifier.
    pub fn id(&self) -> &ModuleId {
        match self {
            Module::Relay(m) => &m.id,
            Module::Toggle(m) => &m.id,
            Module::AllHighGate(m) => &m.id,
        }
    }

    /// Downstream identifiers, in declaration order.
    pub fn targets(&self) -> &[ModuleId] {
        match self {
            Module::Relay(m) => &m.targets,
            Module::Toggle(m) => &m.targets,
            Module::AllHighGate(m) => &m.targets,
        }
    }

    /// The module's kind.
    pub fn kind(&self) -> ModuleKind {
        match self {
            Module::Relay(_) => ModuleKind::Relay,
            Module::Toggle(_) => ModuleKind::Toggle,
            Module::AllHighGate(_) => ModuleKind::AllHighGate,
        }
    }

    /// Check whether `target` appears in the fan-out.
    pub fn forwards_to(&self, target: &str) -> bool {
        self.targets().iter().any(|t| t == target)
    }

    /// React to a pulse from `sender`.
    ///
    /// Returns the pulse to broadcast to every target, or `None` when the
    /// module stays silent.
    pub fn receive(&mut self, sender: &ModuleId, signal: Signal) -> Option<Signal> {
        match self {
            Module::Relay(m) => Some(m.receive(signal)),
            Module::Toggle(m) => m.receive(signal),
            Module::AllHighGate(m) => Some(m.receive(sender, signal)),
        }
    }

    /// Restore the module's initial state.
    pub fn reset(&mut self) {
        match self {
            Module::Relay(_) => {}
            Module::Toggle(m) => m.reset(),
            Module::AllHighGate(m) => m.reset(),
        }
    }
}
