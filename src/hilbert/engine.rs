//! Proof-search state for the Hilbert engine
//!
//! The engine keeps two maps, both insertion-ordered so identical inputs
//! replay identically:
//!
//! - `proven`: formula -> certificate index, append-only, first proof wins
//! - `targets`: unproven formula -> the implications waiting on it, so a
//!   fresh certificate can fire modus ponens immediately
//!
//! One tick runs every pending target against every axiom schema. A
//! schema can prove a target outright, or its implication spine is walked
//! right-side-first: a full match instantiates the axiom and registers
//! every stripped antecedent as a new target; a match with exactly one
//! schema letter unbound guesses that letter over the generated candidate
//! set; two or more unbound letters abandon the schema at that spine
//! position.

use super::proof::{Derivation, HilbertProof, ProofStep};
use crate::axioms::{axiom_library, Axiom};
use crate::generate::candidates;
use crate::logic::{match_schema, substitute, BinaryOp, Formula, FormulaKind, Substitution};
use indexmap::{IndexMap, IndexSet};
use std::collections::BTreeSet;
use std::rc::Rc;

pub(super) struct Engine {
    axioms: Vec<Axiom>,
    steps: Vec<ProofStep>,
    proven: IndexMap<Rc<Formula>, usize>,
    targets: IndexMap<Rc<Formula>, IndexSet<Rc<Formula>>>,
}

impl Engine {
    pub fn new(goal: Rc<Formula>) -> Self {
        let mut engine = Engine {
            axioms: axiom_library(),
            steps: Vec::new(),
            proven: IndexMap::new(),
            targets: IndexMap::new(),
        };
        // seed the goal with a trivial self-implication usage so it goes
        // through the same target bookkeeping as every later formula
        let seed_usage = Formula::implies(goal.clone(), goal.clone());
        engine.add_target(goal, seed_usage);
        engine
    }

    pub fn is_proven(&self, formula: &Rc<Formula>) -> bool {
        self.proven.contains_key(formula)
    }

    /// Extract the finished proof; the goal must be proven
    pub fn into_proof(self, goal: &Rc<Formula>) -> HilbertProof {
        let goal_idx = match self.proven.get(goal) {
            Some(&idx) => idx,
            None => panic!("no certificate for goal {}", goal),
        };
        HilbertProof {
            steps: self.steps,
            goal: goal_idx,
        }
    }

    /// One expansion tick over a snapshot of the current targets
    pub fn expand_targets(&mut self) {
        let pending: Vec<Rc<Formula>> = self.targets.keys().cloned().collect();
        for target in pending {
            for axiom_idx in 0..self.axioms.len() {
                self.expand_with_axiom(&target, axiom_idx);
            }
        }
    }

    fn expand_with_axiom(&mut self, target: &Rc<Formula>, axiom_idx: usize) {
        if self.is_proven(target) {
            return;
        }
        let axiom = self.axioms[axiom_idx].clone();

        // the schema may match the target as a whole
        let mut subst = Substitution::new();
        if match_schema(&axiom.schema, target, &mut subst) {
            self.on_proven(
                target.clone(),
                Derivation::Axiom {
                    name: axiom.name,
                    schema: axiom.schema.clone(),
                    substitution: subst,
                },
            );
            return;
        }

        let letter_count = axiom.schema.atoms().len();
        let target_atoms = target.atoms();

        let mut spine = axiom.schema.clone();
        let mut depth = 0;
        loop {
            let rhs = match spine.kind() {
                FormulaKind::Binary(BinaryOp::Implies, _, rhs) => rhs.clone(),
                _ => break,
            };
            depth += 1;

            // try the target as the conclusion at this spine position
            let mut subst = Substitution::new();
            if match_schema(&rhs, target, &mut subst) {
                if subst.len() + 1 == letter_count {
                    self.instantiate_with_guesses(&axiom, subst, &target_atoms, depth);
                } else if subst.len() < letter_count {
                    // two or more letters unbound: not enough information
                    break;
                } else {
                    self.instantiate(&axiom, subst, depth);
                }
            }
            spine = rhs;
        }
    }

    /// Instantiate the axiom under a complete substitution and register
    /// the `depth` stripped antecedents as targets
    fn instantiate(&mut self, axiom: &Axiom, subst: Substitution, depth: usize) {
        let instance = substitute(&axiom.schema, &subst);
        self.on_proven(
            instance.clone(),
            Derivation::Axiom {
                name: axiom.name,
                schema: axiom.schema.clone(),
                substitution: subst,
            },
        );
        self.register_antecedents(&instance, depth);
    }

    /// Exactly one schema letter is unbound: bind it to every candidate
    /// over the target's atoms in turn. This is the engine's only source
    /// of existential guessing.
    fn instantiate_with_guesses(
        &mut self,
        axiom: &Axiom,
        subst: Substitution,
        target_atoms: &BTreeSet<char>,
        depth: usize,
    ) {
        let missing = axiom
            .schema
            .atoms()
            .into_iter()
            .find(|letter| !subst.contains(*letter))
            .expect("an unbound schema letter");
        for candidate in candidates(target_atoms) {
            let mut guessed = subst.clone();
            guessed.insert(missing, candidate.clone());
            self.instantiate(axiom, guessed, depth);
        }
    }

    /// Record a certificate for a newly proven formula, then fire every
    /// waiting usage transitively. Re-proving a formula is a no-op: the
    /// first certificate wins.
    fn on_proven(&mut self, formula: Rc<Formula>, derivation: Derivation) {
        if self.proven.contains_key(&formula) {
            return;
        }
        let step_idx = self.steps.len();
        self.steps.push(ProofStep {
            formula: formula.clone(),
            derivation,
        });
        self.proven.insert(formula.clone(), step_idx);

        let usages: Vec<Rc<Formula>> = match self.targets.get(&formula) {
            Some(set) => set.iter().cloned().collect(),
            None => return,
        };
        for usage in &usages {
            self.apply_modus_ponens(&formula, usage);
        }

        // usages that got proven along the way can never fire again
        let remaining: IndexSet<Rc<Formula>> = usages
            .into_iter()
            .filter(|usage| !self.proven.contains_key(usage))
            .collect();
        if remaining.is_empty() {
            self.targets.shift_remove(&formula);
        } else {
            self.targets.insert(formula, remaining);
        }
    }

    /// Register `formula` as wanted, with `usage` as the implication that
    /// will consume it; if it is already proven, try the modus ponens now
    fn add_target(&mut self, formula: Rc<Formula>, usage: Rc<Formula>) {
        if self.proven.contains_key(&formula) {
            self.apply_modus_ponens(&formula, &usage);
        } else {
            self.targets.entry(formula).or_default().insert(usage);
        }
    }

    /// From `source` and `source -> conclusion`, derive the conclusion
    fn apply_modus_ponens(&mut self, source: &Rc<Formula>, implication: &Rc<Formula>) {
        let source_step = match self.proven.get(source) {
            Some(&idx) => idx,
            None => return,
        };
        let implication_step = match self.proven.get(implication) {
            Some(&idx) => idx,
            None => return,
        };
        let conclusion = match implication.kind() {
            FormulaKind::Binary(BinaryOp::Implies, _, rhs) => rhs.clone(),
            _ => panic!("invalid use of modus ponens: {} is not an implication", implication),
        };
        if self.proven.contains_key(&conclusion) {
            return;
        }
        self.on_proven(
            conclusion,
            Derivation::ModusPonens {
                antecedent: source_step,
                implication: implication_step,
            },
        );
    }

    /// Walk `depth` antecedents down an instantiated implication spine,
    /// registering each left-hand side as a target whose usage is its
    /// enclosing implication. This runs for already-proven instances too:
    /// re-registration is what fires modus ponens when an implication
    /// becomes proven after its antecedent.
    fn register_antecedents(&mut self, instance: &Rc<Formula>, depth: usize) {
        let mut spine = instance.clone();
        for _ in 0..depth {
            let (lhs, rhs) = match spine.kind() {
                FormulaKind::Binary(BinaryOp::Implies, lhs, rhs) => (lhs.clone(), rhs.clone()),
                _ => panic!("implication spine of {} ended before depth {}", instance, depth),
            };
            self.add_target(lhs, spine.clone());
            spine = rhs;
        }
    }
}
