//! Brute-force tautology checking
//!
//! Enumerates every truth assignment over a formula's atoms and returns
//! the first one that makes the formula false. Formulas with more than
//! [`MAX_ATOMS`] atoms are rejected before any enumeration.

use crate::logic::Formula;
use std::collections::BTreeMap;
use std::fmt;

/// Largest atom alphabet the exhaustive search accepts
pub const MAX_ATOMS: usize = 10;

/// Validator failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    /// The formula has too many atoms for exhaustive enumeration
    TooManyAtoms { count: usize },
}

impl fmt::Display for ValidatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidatorError::TooManyAtoms { count } => write!(
                f,
                "expression has too many atoms: {} (max {} supported)",
                count, MAX_ATOMS
            ),
        }
    }
}

/// Find an assignment under which the formula is false
///
/// Assignments are enumerated from all-true downwards, so the returned
/// counterexample is the first falsifying one in that order. Returns
/// `Ok(None)` when the formula is a tautology.
pub fn find_counterexample(
    formula: &Formula,
) -> Result<Option<BTreeMap<char, bool>>, ValidatorError> {
    let atoms: Vec<char> = formula.atoms().into_iter().collect();
    if atoms.len() > MAX_ATOMS {
        return Err(ValidatorError::TooManyAtoms { count: atoms.len() });
    }

    let mut assignment = BTreeMap::new();
    for pattern in (0..(1u32 << atoms.len())).rev() {
        for (bit, letter) in atoms.iter().enumerate() {
            assignment.insert(*letter, (pattern >> bit) & 1 == 1);
        }
        if !formula.evaluate(&assignment) {
            return Ok(Some(assignment));
        }
    }
    Ok(None)
}
