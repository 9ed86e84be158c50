//! Proof certificates for the Hilbert engine
//!
//! Steps live in an arena and reference each other by index: the same
//! certificate may be required by several modus-ponens derivations, so
//! the proof is a DAG keyed by proven formula, not an owned tree.

use crate::logic::{Formula, Substitution};
use std::fmt;
use std::rc::Rc;

/// How a step's formula was derived
#[derive(Debug, Clone)]
pub enum Derivation {
    /// Instance of a library axiom under the recorded substitution
    Axiom {
        name: &'static str,
        schema: Rc<Formula>,
        substitution: Substitution,
    },
    /// Assumed from the premises of the sequent under proof
    Premise,
    /// Modus ponens over two earlier certificates (arena indices)
    ModusPonens { antecedent: usize, implication: usize },
}

/// One node of the proof DAG; owns the formula it proves
#[derive(Debug, Clone)]
pub struct ProofStep {
    pub formula: Rc<Formula>,
    pub derivation: Derivation,
}

/// A finished proof: the full step arena plus the goal's certificate
#[derive(Debug, Clone)]
pub struct HilbertProof {
    pub steps: Vec<ProofStep>,
    pub goal: usize,
}

impl HilbertProof {
    /// The formula the proof establishes
    pub fn goal_formula(&self) -> &Rc<Formula> {
        &self.steps[self.goal].formula
    }

    /// Arena indices of the steps reachable from the goal, in numbering
    /// order: depth-first post-order, a modus-ponens step after its
    /// antecedent and implication certificates. Steps the goal never
    /// needed get no number.
    pub fn ordering(&self) -> Vec<usize> {
        let mut visited = vec![false; self.steps.len()];
        let mut order = Vec::new();
        self.visit(self.goal, &mut visited, &mut order);
        order
    }

    fn visit(&self, index: usize, visited: &mut Vec<bool>, order: &mut Vec<usize>) {
        if visited[index] {
            return;
        }
        visited[index] = true;
        if let Derivation::ModusPonens {
            antecedent,
            implication,
        } = self.steps[index].derivation
        {
            self.visit(antecedent, visited, order);
            self.visit(implication, visited, order);
        }
        order.push(index);
    }

    /// The numbered steps, in print order
    pub fn numbered_steps(&self) -> Vec<(usize, &ProofStep)> {
        self.ordering()
            .into_iter()
            .enumerate()
            .map(|(position, index)| (position + 1, &self.steps[index]))
            .collect()
    }
}

impl fmt::Display for HilbertProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.ordering();
        let mut numbers = vec![0usize; self.steps.len()];
        for (position, &index) in order.iter().enumerate() {
            numbers[index] = position + 1;
        }

        for (position, &index) in order.iter().enumerate() {
            let step = &self.steps[index];
            writeln!(f, "{:<4}{}", format!("{}.", position + 1), step.formula)?;
            match &step.derivation {
                Derivation::Axiom {
                    name,
                    schema,
                    substitution,
                } => {
                    writeln!(f, "      from axiom {}: {}", name, schema)?;
                    if !substitution.is_empty() {
                        writeln!(f, "      where")?;
                        for (letter, bound) in substitution.iter() {
                            writeln!(f, "        {} = {}", letter, bound)?;
                        }
                    }
                }
                Derivation::Premise => {
                    writeln!(f, "      from premise")?;
                }
                Derivation::ModusPonens {
                    antecedent,
                    implication,
                } => {
                    writeln!(
                        f,
                        "      modus ponens, from steps {} and {}",
                        numbers[*antecedent], numbers[*implication]
                    )?;
                }
            }
            if position + 1 < order.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
