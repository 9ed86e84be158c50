//! JSON serialization types for proof data
//!
//! Mirror types decoupled from the engine structures, so the wire format
//! stays stable however the engines evolve.

use crate::gentzen::{GentzenProof, ProofNode};
use crate::hilbert::{Derivation, HilbertProof};
use crate::logic::{BinaryOp, Formula, FormulaKind, Sequent};
use serde::{Deserialize, Serialize};

/// JSON representation of a formula
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FormulaJson {
    Atom {
        letter: char,
    },
    Not {
        inner: Box<FormulaJson>,
    },
    And {
        left: Box<FormulaJson>,
        right: Box<FormulaJson>,
    },
    Or {
        left: Box<FormulaJson>,
        right: Box<FormulaJson>,
    },
    Implies {
        left: Box<FormulaJson>,
        right: Box<FormulaJson>,
    },
}

impl FormulaJson {
    pub fn from_formula(formula: &Formula) -> Self {
        match formula.kind() {
            FormulaKind::Atom { letter, .. } => FormulaJson::Atom { letter: *letter },
            FormulaKind::Not(inner) => FormulaJson::Not {
                inner: Box::new(FormulaJson::from_formula(inner)),
            },
            FormulaKind::Binary(op, lhs, rhs) => {
                let left = Box::new(FormulaJson::from_formula(lhs));
                let right = Box::new(FormulaJson::from_formula(rhs));
                match op {
                    BinaryOp::And => FormulaJson::And { left, right },
                    BinaryOp::Or => FormulaJson::Or { left, right },
                    BinaryOp::Implies => FormulaJson::Implies { left, right },
                }
            }
        }
    }
}

/// One binding of an axiom-step substitution table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingJson {
    pub letter: char,
    pub formula: String,
}

/// JSON representation of a numbered Hilbert proof step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HilbertStepJson {
    pub number: usize,
    pub formula: FormulaJson,
    pub rule: String,
    /// Step numbers this step depends on (antecedent, then implication)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub premises: Vec<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub substitution: Vec<BindingJson>,
}

/// JSON representation of a Hilbert proof
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HilbertProofJson {
    pub steps: Vec<HilbertStepJson>,
}

impl From<&HilbertProof> for HilbertProofJson {
    fn from(proof: &HilbertProof) -> Self {
        let order = proof.ordering();
        let mut numbers = vec![0usize; proof.steps.len()];
        for (position, &index) in order.iter().enumerate() {
            numbers[index] = position + 1;
        }

        let steps = order
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                let step = &proof.steps[index];
                let (rule, premises, substitution) = match &step.derivation {
                    Derivation::Axiom {
                        name, substitution, ..
                    } => (
                        format!("axiom {}", name),
                        Vec::new(),
                        substitution
                            .iter()
                            .map(|(letter, bound)| BindingJson {
                                letter,
                                formula: bound.to_string(),
                            })
                            .collect(),
                    ),
                    Derivation::Premise => ("premise".to_string(), Vec::new(), Vec::new()),
                    Derivation::ModusPonens {
                        antecedent,
                        implication,
                    } => (
                        "modus ponens".to_string(),
                        vec![numbers[*antecedent], numbers[*implication]],
                        Vec::new(),
                    ),
                };
                HilbertStepJson {
                    number: position + 1,
                    formula: FormulaJson::from_formula(&step.formula),
                    rule,
                    premises,
                    substitution,
                }
            })
            .collect();

        HilbertProofJson { steps }
    }
}

/// JSON representation of a sequent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequentJson {
    pub premises: Vec<FormulaJson>,
    pub outcomes: Vec<FormulaJson>,
}

impl From<&Sequent> for SequentJson {
    fn from(sequent: &Sequent) -> Self {
        SequentJson {
            premises: sequent
                .premises
                .iter()
                .map(|formula| FormulaJson::from_formula(formula))
                .collect(),
            outcomes: sequent
                .outcomes
                .iter()
                .map(|formula| FormulaJson::from_formula(formula))
                .collect(),
        }
    }
}

/// JSON representation of one sequent proof-tree node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProofTreeJson {
    pub sequent: SequentJson,
    pub rule: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<ProofTreeJson>,
}

impl From<&ProofNode> for ProofTreeJson {
    fn from(node: &ProofNode) -> Self {
        ProofTreeJson {
            sequent: SequentJson::from(&node.sequent),
            rule: node.rule.name().to_string(),
            children: node.children.iter().map(ProofTreeJson::from).collect(),
        }
    }
}

/// JSON representation of a sequent decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GentzenResultJson {
    pub provable: bool,
    pub tree: ProofTreeJson,
}

impl From<&GentzenProof> for GentzenResultJson {
    fn from(proof: &GentzenProof) -> Self {
        GentzenResultJson {
            provable: proof.provable,
            tree: ProofTreeJson::from(&proof.root),
        }
    }
}
