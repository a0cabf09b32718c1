//! Parser for textual module declarations.
//!
//! A network is described one module per line. Each line names the module,
//! optionally prefixed with a kind marker, followed by an arrow and the
//! ordered list of modules it forwards to.
//!
//! # Grammar Overview
//!
//! ```text
//! network     = { line }
//! line        = comment | declaration | empty
//! comment     = '#' { any_char }
//! declaration = [marker] identifier "->" target { "," target }
//! marker      = '%' | '&'
//! target      = identifier
//! identifier  = { any_char except whitespace ',' '%' '&' }+
//! ```
//!
//! # Module Kinds
//!
//! | Marker | Kind | Behavior |
//! |--------|------|----------|
//! | none | Relay | Re-emits every signal it receives |
//! | `%` | Toggle | Ignores high; flips on low and emits its new state |
//! | `&` | All-high gate | Emits low only when every input last sent high |
//!
//! # Example
//!
//! ```text
//! broadcaster -> a, b, c
//! %a -> b
//! %b -> c
//! %c -> inv
//! &inv -> a
//! ```

mod ast;
mod parser;

pub use ast::*;
pub use parser::Parser;

use crate::error::Result;

/// Parse a network description string into an AST.
pub fn parse(input: &str) -> Result<NetworkAst> {
    let mut parser = Parser::new(input);
    parser.parse()
}

/// Parse a network description file.
pub fn parse_file(path: &std::path::Path) -> Result<NetworkAst> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::PulseError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
