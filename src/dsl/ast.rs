//! Abstract Syntax Tree types for module declarations.

use std::fmt;

/// Complete AST representation of a parsed network description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkAst {
    /// All module declarations, in source order
    pub declarations: Vec<ModuleDecl>,
}

impl NetworkAst {
    /// Create a new empty network AST.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A single module declaration from the description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDecl {
    /// Behavioral kind selected by the marker
    pub kind: ModuleKind,
    /// Module identifier (without marker)
    pub name: String,
    /// Downstream identifiers, in declaration order
    pub targets: Vec<String>,
    /// Source line number for error reporting
    pub line: usize,
}

/// Module kinds supported by the description format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// Re-emits every signal (no marker)
    Relay,
    /// Flips on low input (`%`)
    Toggle,
    /// Emits low only when all inputs last sent high (`&`)
    AllHighGate,
}

impl ModuleKind {
    /// Parse a module kind from its marker character.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '%' => Some(Self::Toggle),
            '&' => Some(Self::AllHighGate),
            _ => None,
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Relay => write!(f, "relay"),
            Self::Toggle => write!(f, "toggle"),
            Self::AllHighGate => write!(f, "all-high gate"),
        }
    }
}
