//! Parser for module declarations.

use std::collections::HashSet;

use super::ast::*;
use crate::error::{PulseError, Result};

/// Separator between a module and its targets.
const ARROW: &str = "->";

/// Line-oriented parser for network descriptions.
pub struct Parser<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
        }
    }

    /// Parse the entire network description.
    pub fn parse(&mut self) -> Result<NetworkAst> {
        let mut ast = NetworkAst::new();
        let mut seen = HashSet::new();

        for (idx, raw) in self.lines.by_ref() {
            let line = idx + 1;
            let text = raw.trim();

            // Skip empty lines and comments
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let decl = parse_declaration(line, text)?;
            if !seen.insert(decl.name.clone()) {
                return Err(PulseError::DuplicateModule {
                    name: decl.name,
                    line,
                });
            }
            ast.declarations.push(decl);
        }

        Ok(ast)
    }
}

/// Parse one `[marker]name -> a, b, c` line.
fn parse_declaration(line: usize, text: &str) -> Result<ModuleDecl> {
    let (head, tail) = text
        .split_once(ARROW)
        .ok_or_else(|| PulseError::malformed(line, format!("missing '{}' in {:?}", ARROW, text)))?;

    let head = head.trim();
    let mut chars = head.chars();
    let (kind, name) = match chars.next().and_then(ModuleKind::from_marker) {
        Some(kind) => (kind, chars.as_str()),
        None => (ModuleKind::Relay, head),
    };

    if !is_identifier(name) {
        return Err(PulseError::malformed(
            line,
            format!("invalid module identifier {:?}", head),
        ));
    }

    let mut targets = Vec::new();
    for target in tail.split(',').map(str::trim) {
        if !is_identifier(target) {
            return Err(PulseError::malformed(
                line,
                format!("invalid target {:?} for module '{}'", target, name),
            ));
        }
        targets.push(target.to_string());
    }

    Ok(ModuleDecl {
        kind,
        name: name.to_string(),
        targets,
        line,
    })
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| !c.is_whitespace() && !matches!(c, ',' | '%' | '&'))
}
