//! Two-sided sequents

use super::formula::Formula;
use std::fmt;
use std::rc::Rc;

/// A sequent `premises => outcomes`: the conjunction of the premises
/// implies the disjunction of the outcomes. Order carries no meaning but
/// is preserved so output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequent {
    pub premises: Vec<Rc<Formula>>,
    pub outcomes: Vec<Rc<Formula>>,
}

impl Sequent {
    pub fn new(premises: Vec<Rc<Formula>>, outcomes: Vec<Rc<Formula>>) -> Self {
        Sequent { premises, outcomes }
    }

    /// The sequent `=> formula`
    pub fn single(formula: Rc<Formula>) -> Self {
        Sequent {
            premises: Vec::new(),
            outcomes: vec![formula],
        }
    }

    /// Total connective count across both sides; every sequent rule
    /// strictly decreases it, which bounds the proof-search depth.
    pub fn connectives(&self) -> usize {
        self.premises
            .iter()
            .chain(self.outcomes.iter())
            .map(|formula| formula.connectives())
            .sum()
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, formulas: &[Rc<Formula>]) -> fmt::Result {
    for (i, formula) in formulas.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", formula)?;
    }
    Ok(())
}

impl fmt::Display for Sequent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.premises)?;
        if !self.premises.is_empty() {
            write!(f, " ")?;
        }
        write!(f, "=>")?;
        if !self.outcomes.is_empty() {
            write!(f, " ")?;
        }
        write_list(f, &self.outcomes)
    }
}
