//! Hilbert-style axiomatic proof search
//!
//! Derives a single conclusion from the fixed axiom library via
//! substitution and modus ponens. The search runs in ticks; each tick
//! expands every pending target against every schema, and budgets are
//! checked between ticks only.

mod engine;
mod proof;

pub use proof::{Derivation, HilbertProof, ProofStep};

use crate::logic::Sequent;
use engine::Engine;
use std::fmt;
use std::time::{Duration, Instant};

/// Search budgets for one proof request
#[derive(Debug, Clone)]
pub struct HilbertConfig {
    /// Expansion rounds allowed before giving up
    pub max_ticks: usize,
    /// Wall-clock budget, checked once per tick
    pub timeout: Duration,
}

impl Default for HilbertConfig {
    fn default() -> Self {
        HilbertConfig {
            max_ticks: 4,
            timeout: Duration::from_secs(5),
        }
    }
}

/// Result of a proof search that was allowed to run
#[derive(Debug, Clone)]
pub enum HilbertOutcome {
    /// The goal was derived
    Proof {
        proof: HilbertProof,
        elapsed: Duration,
        ticks: usize,
    },
    /// Budgets ran out with the goal still unproven; no partial proof
    Exhausted { elapsed: Duration, ticks: usize },
}

/// Rejection before any search is attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HilbertError {
    /// The engine only proves sequents of the shape `=> formula`
    UnsupportedSequent { premises: usize, outcomes: usize },
}

impl fmt::Display for HilbertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HilbertError::UnsupportedSequent { premises, outcomes } => write!(
                f,
                "Hilbert prover can only prove a single outcome with no premises \
                 (got {} premises and {} outcomes)",
                premises, outcomes
            ),
        }
    }
}

/// Prove a sequent of the shape `=> formula`
pub fn prove(sequent: &Sequent, config: &HilbertConfig) -> Result<HilbertOutcome, HilbertError> {
    if !sequent.premises.is_empty() || sequent.outcomes.len() != 1 {
        return Err(HilbertError::UnsupportedSequent {
            premises: sequent.premises.len(),
            outcomes: sequent.outcomes.len(),
        });
    }
    let goal = sequent.outcomes[0].clone();

    let mut engine = Engine::new(goal.clone());
    let start = Instant::now();
    let mut ticks = 0;
    while !engine.is_proven(&goal) {
        engine.expand_targets();
        ticks += 1;
        if !engine.is_proven(&goal)
            && (ticks > config.max_ticks || start.elapsed() > config.timeout)
        {
            return Ok(HilbertOutcome::Exhausted {
                elapsed: start.elapsed(),
                ticks,
            });
        }
    }

    let proof = engine.into_proof(&goal);
    Ok(HilbertOutcome::Proof {
        proof,
        elapsed: start.elapsed(),
        ticks,
    })
}
