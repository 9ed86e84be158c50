//! Propositional formula trees
//!
//! Formulas are immutable: every transformation builds new nodes, and
//! subtrees are shared through `Rc`. The structural hash is computed once
//! at construction so map lookups never re-walk the tree.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Binary connective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Implies,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::And => "&",
            BinaryOp::Or => "V",
            BinaryOp::Implies => "->",
        }
    }
}

/// A propositional formula with its cached structural hash
#[derive(Debug)]
pub struct Formula {
    hash: u64,
    kind: FormulaKind,
}

/// Formula node shape
///
/// An atom carries a `literal` marker: literal atoms come from parsed
/// input and never bind as pattern variables, placeholder atoms are the
/// schema letters of the axiom library. The marker does not take part in
/// equality or hashing, so a guessed placeholder tree and the equal
/// literal tree collapse to one proof-search key.
#[derive(Debug)]
pub enum FormulaKind {
    Atom { letter: char, literal: bool },
    Not(Rc<Formula>),
    Binary(BinaryOp, Rc<Formula>, Rc<Formula>),
}

const TAG_NOT: u64 = 3;

fn mix(hash: u64, value: u64) -> u64 {
    hash.wrapping_mul(31).wrapping_add(value)
}

impl Formula {
    /// A concrete atom from parsed input
    pub fn literal(letter: char) -> Rc<Formula> {
        Formula::atom(letter, true)
    }

    /// A schema placeholder atom
    pub fn placeholder(letter: char) -> Rc<Formula> {
        Formula::atom(letter, false)
    }

    fn atom(letter: char, literal: bool) -> Rc<Formula> {
        Rc::new(Formula {
            hash: letter as u64,
            kind: FormulaKind::Atom { letter, literal },
        })
    }

    pub fn not(inner: Rc<Formula>) -> Rc<Formula> {
        let hash = mix(mix(17, inner.hash), TAG_NOT);
        Rc::new(Formula {
            hash,
            kind: FormulaKind::Not(inner),
        })
    }

    pub fn binary(op: BinaryOp, lhs: Rc<Formula>, rhs: Rc<Formula>) -> Rc<Formula> {
        let hash = mix(mix(mix(17, lhs.hash), op as u64), rhs.hash);
        Rc::new(Formula {
            hash,
            kind: FormulaKind::Binary(op, lhs, rhs),
        })
    }

    pub fn and(lhs: Rc<Formula>, rhs: Rc<Formula>) -> Rc<Formula> {
        Formula::binary(BinaryOp::And, lhs, rhs)
    }

    pub fn or(lhs: Rc<Formula>, rhs: Rc<Formula>) -> Rc<Formula> {
        Formula::binary(BinaryOp::Or, lhs, rhs)
    }

    pub fn implies(lhs: Rc<Formula>, rhs: Rc<Formula>) -> Rc<Formula> {
        Formula::binary(BinaryOp::Implies, lhs, rhs)
    }

    pub fn kind(&self) -> &FormulaKind {
        &self.kind
    }

    /// Evaluate under a truth assignment
    ///
    /// Every atom of the formula must be present in the assignment; a
    /// missing atom is a defect in the caller, not bad input.
    pub fn evaluate(&self, assignment: &BTreeMap<char, bool>) -> bool {
        match &self.kind {
            FormulaKind::Atom { letter, .. } => match assignment.get(letter) {
                Some(value) => *value,
                None => panic!("no value for atom {} in assignment", letter),
            },
            FormulaKind::Not(inner) => !inner.evaluate(assignment),
            FormulaKind::Binary(op, lhs, rhs) => match op {
                BinaryOp::And => lhs.evaluate(assignment) && rhs.evaluate(assignment),
                BinaryOp::Or => lhs.evaluate(assignment) || rhs.evaluate(assignment),
                BinaryOp::Implies => !lhs.evaluate(assignment) || rhs.evaluate(assignment),
            },
        }
    }

    /// Collect all atom letters into `atoms`
    pub fn collect_atoms(&self, atoms: &mut BTreeSet<char>) {
        match &self.kind {
            FormulaKind::Atom { letter, .. } => {
                atoms.insert(*letter);
            }
            FormulaKind::Not(inner) => inner.collect_atoms(atoms),
            FormulaKind::Binary(_, lhs, rhs) => {
                lhs.collect_atoms(atoms);
                rhs.collect_atoms(atoms);
            }
        }
    }

    /// All atom letters, in letter order
    pub fn atoms(&self) -> BTreeSet<char> {
        let mut atoms = BTreeSet::new();
        self.collect_atoms(&mut atoms);
        atoms
    }

    /// Number of connectives (negations and binary operators)
    pub fn connectives(&self) -> usize {
        match &self.kind {
            FormulaKind::Atom { .. } => 0,
            FormulaKind::Not(inner) => 1 + inner.connectives(),
            FormulaKind::Binary(_, lhs, rhs) => 1 + lhs.connectives() + rhs.connectives(),
        }
    }

    fn is_binary(&self) -> bool {
        matches!(self.kind, FormulaKind::Binary(..))
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        if self.hash != other.hash {
            return false;
        }
        match (&self.kind, &other.kind) {
            (FormulaKind::Atom { letter: a, .. }, FormulaKind::Atom { letter: b, .. }) => a == b,
            (FormulaKind::Not(a), FormulaKind::Not(b)) => a == b,
            (FormulaKind::Binary(op_a, la, ra), FormulaKind::Binary(op_b, lb, rb)) => {
                op_a == op_b && la == lb && ra == rb
            }
            _ => false,
        }
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FormulaKind::Atom { letter, .. } => write!(f, "{}", letter),
            FormulaKind::Not(inner) => {
                if inner.is_binary() {
                    write!(f, "!({})", inner)
                } else {
                    write!(f, "!{}", inner)
                }
            }
            FormulaKind::Binary(op, lhs, rhs) => {
                if lhs.is_binary() {
                    write!(f, "({})", lhs)?;
                } else {
                    write!(f, "{}", lhs)?;
                }
                write!(f, " {} ", op.symbol())?;
                if rhs.is_binary() {
                    write!(f, "({})", rhs)
                } else {
                    write!(f, "{}", rhs)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        let a = Formula::implies(Formula::literal('A'), Formula::literal('B'));
        let b = Formula::implies(Formula::literal('A'), Formula::literal('B'));
        assert_eq!(a, b);
        assert_ne!(a, Formula::implies(Formula::literal('B'), Formula::literal('A')));
    }

    #[test]
    fn equality_ignores_literal_marker() {
        // a guessed placeholder tree must collapse with the parsed tree
        let parsed = Formula::not(Formula::literal('A'));
        let guessed = Formula::not(Formula::placeholder('A'));
        assert_eq!(parsed, guessed);

        use std::collections::hash_map::DefaultHasher;
        let digest = |formula: &Formula| {
            let mut hasher = DefaultHasher::new();
            formula.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(digest(&parsed), digest(&guessed));
    }

    #[test]
    fn display_parenthesizes_binary_operands() {
        let inner = Formula::and(Formula::literal('A'), Formula::literal('B'));
        let formula = Formula::implies(inner.clone(), Formula::literal('C'));
        assert_eq!(formula.to_string(), "(A & B) -> C");
        assert_eq!(Formula::not(inner).to_string(), "!(A & B)");
        assert_eq!(Formula::not(Formula::literal('A')).to_string(), "!A");
        assert_eq!(
            Formula::or(Formula::literal('A'), Formula::literal('B')).to_string(),
            "A V B"
        );
    }

    #[test]
    fn evaluate_implication() {
        let formula = Formula::implies(Formula::literal('A'), Formula::literal('B'));
        let mut assignment = BTreeMap::new();
        assignment.insert('A', true);
        assignment.insert('B', false);
        assert!(!formula.evaluate(&assignment));
        assignment.insert('A', false);
        assert!(formula.evaluate(&assignment));
    }

    #[test]
    #[should_panic(expected = "no value for atom")]
    fn evaluate_panics_on_missing_atom() {
        let formula = Formula::literal('A');
        formula.evaluate(&BTreeMap::new());
    }

    #[test]
    fn atoms_and_connectives() {
        let formula = Formula::implies(
            Formula::and(Formula::literal('B'), Formula::literal('A')),
            Formula::not(Formula::literal('A')),
        );
        assert_eq!(formula.atoms().into_iter().collect::<Vec<_>>(), vec!['A', 'B']);
        assert_eq!(formula.connectives(), 3);
    }
}
