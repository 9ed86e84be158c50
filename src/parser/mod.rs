//! Formula and sequent parsing
//!
//! The grammar (one-letter variables except `v`/`V`, which spell Or):
//!
//! ```text
//! Variable = any letter except 'v'/'V'
//! Not      = '!' | '~'
//! And      = '&'
//! Or       = '|' | 'v' | 'V'
//! Implies  = '->'
//! Unit     = (Not, Unit) | Variable | '(' Node ')'
//! Binary   = Unit, (And | Or | Implies), Unit
//! Node     = Unit | Binary
//! Sequent  = [Node {',' Node}] '=>' [Node {',' Node}]
//! ```
//!
//! Binary nodes never chain: `A -> B -> C` needs parentheses. Errors
//! carry the character offset of the offending token so callers can put
//! a caret under the failing column.

mod grammar;

pub use grammar::{parse_formula, parse_sequent};

use std::fmt;

/// A parse failure at a known input offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub offset: usize,
    pub message: String,
}

impl SyntaxError {
    /// Render the offending line with a caret under the failing column
    pub fn caret_diagnostic(&self, input: &str) -> String {
        let line: String = input
            .chars()
            .map(|c| if c == '\t' { ' ' } else { c })
            .collect();
        let padding = " ".repeat(self.offset);
        format!("{}\n{}^\n{}Error: {}", line, padding, padding, self.message)
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message, self.offset)
    }
}
