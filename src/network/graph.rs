//! Wiring graph structure.

use std::collections::{HashMap, HashSet};

use super::types::ModuleId;
use crate::dsl::{self, NetworkAst};
use crate::error::{PulseError, Result};
use crate::modules::{AllHighGate, Module};

/// A complete network ready for simulation.
///
/// Topology is fixed at construction. Only the internal state of the
/// modules changes while pulses are dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    /// All modules, in declaration order
    modules: Vec<Module>,

    /// Mapping from module identifiers to positions in `modules`
    index: HashMap<ModuleId, usize>,
}

impl Network {
    /// Build a network from a parsed AST.
    ///
    /// Construction runs in two phases:
    /// 1. every declaration becomes a module with its fan-out list;
    /// 2. every fan-out list is walked again and each sender is registered
    ///    as an input of the gates it targets.
    ///
    /// The second phase is what makes a gate aware of its full input set,
    /// which is only discoverable from other modules' declarations.
    pub fn from_ast(ast: NetworkAst) -> Result<Self> {
        let mut modules = Vec::with_capacity(ast.declarations.len());
        let mut index = HashMap::with_capacity(ast.declarations.len());

        for decl in &ast.declarations {
            let module = Module::from_decl(decl);
            if index.insert(module.id().clone(), modules.len()).is_some() {
                return Err(PulseError::DuplicateModule {
                    name: decl.name.clone(),
                    line: decl.line,
                });
            }
            modules.push(module);
        }

        let mut network = Network { modules, index };
        network.register_gate_inputs();

        log::debug!(
            "built network with {} modules and {} sinks",
            network.len(),
            network.sinks().len()
        );

        Ok(network)
    }

    /// Parse a description and build the network in one step.
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_ast(dsl::parse(input)?)
    }

    fn register_gate_inputs(&mut self) {
        let mut edges = Vec::new();
        for module in &self.modules {
            for target in module.targets() {
                if let Some(&idx) = self.index.get(target) {
                    if matches!(self.modules[idx], Module::AllHighGate(_)) {
                        edges.push((idx, module.id().clone()));
                    }
                }
            }
        }

        for (idx, sender) in edges {
            if let Module::AllHighGate(ref mut gate) = self.modules[idx] {
                gate.add_input(sender);
            }
        }
    }

    /// Find a module by identifier.
    pub fn get(&self, id: &str) -> Option<&Module> {
        self.index.get(id).map(|&idx| &self.modules[idx])
    }

    /// Find a module by identifier for mutation.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Module> {
        match self.index.get(id) {
            Some(&idx) => Some(&mut self.modules[idx]),
            None => None,
        }
    }

    /// Find a gate by identifier.
    pub fn gate(&self, id: &str) -> Option<&AllHighGate> {
        match self.get(id) {
            Some(Module::AllHighGate(gate)) => Some(gate),
            _ => None,
        }
    }

    /// Check whether `id` is a declared module.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All modules, in declaration order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Number of declared modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check whether the network has no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Modules whose fan-out contains `id`, in declaration order.
    pub fn predecessors(&self, id: &str) -> Vec<&ModuleId> {
        self.modules
            .iter()
            .filter(|m| m.forwards_to(id))
            .map(Module::id)
            .collect()
    }

    /// Targets that are not declared modules, in first-seen order.
    pub fn sinks(&self) -> Vec<&ModuleId> {
        let mut seen = HashSet::new();
        self.modules
            .iter()
            .flat_map(Module::targets)
            .filter(|t| !self.contains(t.as_str()))
            .filter(|t| seen.insert(*t))
            .collect()
    }

    /// Return every module to its initial state.
    pub fn reset(&mut self) {
        for module in &mut self.modules {
            module.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::ModuleKind;
    use crate::network::Signal;

    const EXAMPLE: &str = "broadcaster -> a, b, c\n%a -> b\n%b -> c\n%c -> inv\n&inv -> a";

    const EXAMPLE_WITH_SINK: &str =
        "broadcaster -> a\n%a -> inv, con\n&inv -> b\n%b -> con\n&con -> output";

    #[test]
    fn test_build_example() {
        let network = Network::parse(EXAMPLE).unwrap();
        assert_eq!(network.len(), 5);
        assert_eq!(network.get("broadcaster").unwrap().kind(), ModuleKind::Relay);
        assert_eq!(network.get("a").unwrap().kind(), ModuleKind::Toggle);
        assert_eq!(network.get("inv").unwrap().kind(), ModuleKind::AllHighGate);

        let ids: Vec<_> = network.modules().iter().map(|m| m.id().as_str()).collect();
        assert_eq!(ids, vec!["broadcaster", "a", "b", "c", "inv"]);
    }

    #[test]
    fn test_gate_inputs_are_backfilled() {
        let network = Network::parse(EXAMPLE_WITH_SINK).unwrap();

        let inv = network.gate("inv").unwrap();
        assert_eq!(inv.inputs().collect::<Vec<_>>(), vec!["a"]);

        let con = network.gate("con").unwrap();
        assert_eq!(con.inputs().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(con.remembered("a"), Some(Signal::Low));
        assert_eq!(con.remembered("b"), Some(Signal::Low));
    }

    #[test]
    fn test_gate_declared_before_its_inputs() {
        let network = Network::parse("&g -> out\nbroadcaster -> x, y\n%x -> g\n%y -> g").unwrap();
        let g = network.gate("g").unwrap();
        assert_eq!(g.input_count(), 2);
    }

    #[test]
    fn test_undeclared_targets_are_sinks() {
        let network = Network::parse(EXAMPLE_WITH_SINK).unwrap();
        assert!(!network.contains("output"));
        assert_eq!(network.sinks(), vec!["output"]);
        assert_eq!(network.get("con").unwrap().targets(), &[ModuleId::new("output")]);
    }

    #[test]
    fn test_predecessors() {
        let network = Network::parse(EXAMPLE).unwrap();
        assert_eq!(network.predecessors("b"), vec!["broadcaster", "a"]);
        assert_eq!(network.predecessors("a"), vec!["broadcaster", "inv"]);
        assert!(network.predecessors("broadcaster").is_empty());
    }

    #[test]
    fn test_duplicate_declaration_in_ast() {
        let mut ast = dsl::parse("%a -> b").unwrap();
        let mut dup = ast.declarations[0].clone();
        dup.line = 7;
        ast.declarations.push(dup);

        let err = Network::from_ast(ast).unwrap_err();
        assert!(matches!(err, PulseError::DuplicateModule { line: 7, .. }));
    }

    #[test]
    fn test_building_twice_is_identical() {
        let first = Network::parse(EXAMPLE_WITH_SINK).unwrap();
        let second = Network::parse(EXAMPLE_WITH_SINK).unwrap();
        assert_eq!(first, second);
    }
}
