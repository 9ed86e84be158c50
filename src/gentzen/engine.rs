//! Backward rule application for the sequent calculus
//!
//! `decide` closes a sequent as an axiom leaf when any premise is
//! structurally equal to any outcome, otherwise applies the first rule
//! that fits: left rules over the premises in order, then right rules
//! over the outcomes. Every rule strictly reduces the total connective
//! count, so recursion depth is bounded by the input sequent.

use crate::logic::{BinaryOp, Formula, FormulaKind, Sequent};
use std::rc::Rc;

/// The rule applied at a proof-tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// No rule applied: an undecomposable, non-axiom sequent
    Unproved,
    /// A premise coincides with an outcome
    Axiom,
    LeftNot,
    LeftAnd,
    LeftOr,
    LeftImplies,
    RightNot,
    RightAnd,
    RightOr,
    RightImplies,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Unproved => "unproved",
            Rule::Axiom => "axiom",
            Rule::LeftNot => "left-not",
            Rule::LeftAnd => "left-and",
            Rule::LeftOr => "left-or",
            Rule::LeftImplies => "left-implies",
            Rule::RightNot => "right-not",
            Rule::RightAnd => "right-and",
            Rule::RightOr => "right-or",
            Rule::RightImplies => "right-implies",
        }
    }
}

/// One node of the proof tree
///
/// Strictly a tree: every node is built by exactly one parent, and
/// failed branches stay in place so the rendering can show them.
#[derive(Debug)]
pub struct ProofNode {
    pub sequent: Sequent,
    pub rule: Rule,
    pub children: Vec<ProofNode>,
}

impl ProofNode {
    pub(super) fn new(sequent: Sequent) -> Self {
        ProofNode {
            sequent,
            rule: Rule::Unproved,
            children: Vec::new(),
        }
    }

    /// Height of the tree rooted here (a leaf has height 1)
    pub fn height(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ProofNode::height)
            .max()
            .unwrap_or(0)
    }
}

/// Decide the node's sequent, growing the tree beneath it. A node is
/// provable iff it is an axiom leaf or every child of the one applied
/// rule is provable.
pub(super) fn decide(node: &mut ProofNode) -> bool {
    let is_axiom = node
        .sequent
        .premises
        .iter()
        .any(|premise| node.sequent.outcomes.iter().any(|outcome| outcome == premise));
    if is_axiom {
        node.rule = Rule::Axiom;
        return true;
    }

    let decomposition =
        left_decomposition(&node.sequent).or_else(|| right_decomposition(&node.sequent));
    match decomposition {
        Some((rule, children)) => {
            node.rule = rule;
            node.children = children.into_iter().map(ProofNode::new).collect();
            let mut provable = true;
            for child in &mut node.children {
                // decide every branch even after a failure, so the
                // rendered tree shows where the attempt died
                if !decide(child) {
                    provable = false;
                }
            }
            provable
        }
        None => false,
    }
}

fn without(formulas: &[Rc<Formula>], index: usize) -> Vec<Rc<Formula>> {
    let mut rest = Vec::with_capacity(formulas.len() + 1);
    rest.extend_from_slice(&formulas[..index]);
    rest.extend_from_slice(&formulas[index + 1..]);
    rest
}

fn pushed(list: &[Rc<Formula>], formula: Rc<Formula>) -> Vec<Rc<Formula>> {
    let mut list = list.to_vec();
    list.push(formula);
    list
}

/// Decompose the first non-atomic premise, if any
fn left_decomposition(sequent: &Sequent) -> Option<(Rule, Vec<Sequent>)> {
    for (index, premise) in sequent.premises.iter().enumerate() {
        match premise.kind() {
            FormulaKind::Atom { .. } => continue,
            FormulaKind::Not(inner) => {
                let child = Sequent::new(
                    without(&sequent.premises, index),
                    pushed(&sequent.outcomes, inner.clone()),
                );
                return Some((Rule::LeftNot, vec![child]));
            }
            FormulaKind::Binary(BinaryOp::And, lhs, rhs) => {
                let mut premises = without(&sequent.premises, index);
                premises.push(lhs.clone());
                premises.push(rhs.clone());
                let child = Sequent::new(premises, sequent.outcomes.clone());
                return Some((Rule::LeftAnd, vec![child]));
            }
            FormulaKind::Binary(BinaryOp::Or, lhs, rhs) => {
                let rest = without(&sequent.premises, index);
                let left = Sequent::new(pushed(&rest, lhs.clone()), sequent.outcomes.clone());
                let right = Sequent::new(pushed(&rest, rhs.clone()), sequent.outcomes.clone());
                return Some((Rule::LeftOr, vec![left, right]));
            }
            FormulaKind::Binary(BinaryOp::Implies, lhs, rhs) => {
                let rest = without(&sequent.premises, index);
                let antecedent = Sequent::new(rest.clone(), pushed(&sequent.outcomes, lhs.clone()));
                let consequent =
                    Sequent::new(pushed(&rest, rhs.clone()), sequent.outcomes.clone());
                return Some((Rule::LeftImplies, vec![antecedent, consequent]));
            }
        }
    }
    None
}

/// Decompose the first non-atomic outcome; only reached when no left
/// rule applied
fn right_decomposition(sequent: &Sequent) -> Option<(Rule, Vec<Sequent>)> {
    for (index, outcome) in sequent.outcomes.iter().enumerate() {
        match outcome.kind() {
            FormulaKind::Atom { .. } => continue,
            FormulaKind::Not(inner) => {
                let child = Sequent::new(
                    pushed(&sequent.premises, inner.clone()),
                    without(&sequent.outcomes, index),
                );
                return Some((Rule::RightNot, vec![child]));
            }
            FormulaKind::Binary(BinaryOp::And, lhs, rhs) => {
                let rest = without(&sequent.outcomes, index);
                let left = Sequent::new(sequent.premises.clone(), pushed(&rest, lhs.clone()));
                let right = Sequent::new(sequent.premises.clone(), pushed(&rest, rhs.clone()));
                return Some((Rule::RightAnd, vec![left, right]));
            }
            FormulaKind::Binary(BinaryOp::Or, lhs, rhs) => {
                let mut outcomes = without(&sequent.outcomes, index);
                outcomes.push(lhs.clone());
                outcomes.push(rhs.clone());
                let child = Sequent::new(sequent.premises.clone(), outcomes);
                return Some((Rule::RightOr, vec![child]));
            }
            FormulaKind::Binary(BinaryOp::Implies, lhs, rhs) => {
                let child = Sequent::new(
                    pushed(&sequent.premises, lhs.clone()),
                    pushed(&without(&sequent.outcomes, index), rhs.clone()),
                );
                return Some((Rule::RightImplies, vec![child]));
            }
        }
    }
    None
}
