//! End-to-end tests for the Hilbert engine

use sequitur::hilbert::{self, Derivation, HilbertConfig, HilbertError, HilbertOutcome};
use sequitur::json::HilbertProofJson;
use sequitur::logic::Sequent;
use sequitur::validator::find_counterexample;
use sequitur::{parse_formula, parse_sequent};

fn prove_formula(input: &str, config: &HilbertConfig) -> HilbertOutcome {
    let formula = parse_formula(input).unwrap();
    hilbert::prove(&Sequent::single(formula), config).unwrap()
}

#[test]
fn proves_self_implication() {
    let outcome = prove_formula("A -> A", &HilbertConfig::default());
    match outcome {
        HilbertOutcome::Proof { proof, ticks, .. } => {
            let numbered = proof.numbered_steps();
            let (_, last) = numbered.last().unwrap();
            assert_eq!(last.formula.to_string(), "A -> A");
            assert!(ticks <= 4, "took {} ticks", ticks);
            // a self-implication needs modus ponens, it is no axiom instance
            assert!(numbered
                .iter()
                .any(|(_, step)| matches!(step.derivation, Derivation::ModusPonens { .. })));
        }
        HilbertOutcome::Exhausted { ticks, .. } => {
            panic!("search exhausted after {} ticks", ticks)
        }
    }
}

#[test]
fn proves_direct_axiom_instances_in_one_tick() {
    for input in [
        "A -> (B -> A)",
        "(A & B) -> A",
        "(A & B) -> B",
        "A -> (A V B)",
        "B -> (A V B)",
        "(A -> B) -> (!B -> !A)",
        "A -> !!A",
        "!!A -> A",
    ] {
        match prove_formula(input, &HilbertConfig::default()) {
            HilbertOutcome::Proof { proof, ticks, .. } => {
                assert_eq!(ticks, 1, "{} should be immediate", input);
                let numbered = proof.numbered_steps();
                assert_eq!(numbered.len(), 1, "{} is one axiom step", input);
                assert!(matches!(
                    numbered[0].1.derivation,
                    Derivation::Axiom { .. }
                ));
            }
            HilbertOutcome::Exhausted { .. } => panic!("failed to prove {}", input),
        }
    }
}

#[test]
fn every_proven_step_is_a_tautology() {
    for input in ["A -> A", "A -> (B -> A)", "(A & B) -> B", "A -> !!A"] {
        match prove_formula(input, &HilbertConfig::default()) {
            HilbertOutcome::Proof { proof, .. } => {
                for step in &proof.steps {
                    assert_eq!(
                        find_counterexample(&step.formula),
                        Ok(None),
                        "step {} of the {} proof is falsifiable",
                        step.formula,
                        input
                    );
                }
            }
            HilbertOutcome::Exhausted { .. } => panic!("failed to prove {}", input),
        }
    }
}

#[test]
fn modus_ponens_steps_reference_earlier_numbers() {
    let outcome = prove_formula("A -> A", &HilbertConfig::default());
    let proof = match outcome {
        HilbertOutcome::Proof { proof, .. } => proof,
        HilbertOutcome::Exhausted { .. } => panic!("failed to prove A -> A"),
    };

    let order = proof.ordering();
    let mut numbers = vec![0usize; proof.steps.len()];
    for (position, &index) in order.iter().enumerate() {
        numbers[index] = position + 1;
    }
    for &index in &order {
        if let Derivation::ModusPonens {
            antecedent,
            implication,
        } = proof.steps[index].derivation
        {
            assert!(numbers[antecedent] != 0 && numbers[antecedent] < numbers[index]);
            assert!(numbers[implication] != 0 && numbers[implication] < numbers[index]);
        }
    }
}

#[test]
fn rejects_sequents_with_premises_or_extra_outcomes() {
    let config = HilbertConfig::default();

    let with_premises = parse_sequent("A => A").unwrap();
    assert_eq!(
        hilbert::prove(&with_premises, &config).unwrap_err(),
        HilbertError::UnsupportedSequent {
            premises: 1,
            outcomes: 1
        }
    );

    let two_outcomes = parse_sequent("=> A, B").unwrap();
    assert_eq!(
        hilbert::prove(&two_outcomes, &config).unwrap_err(),
        HilbertError::UnsupportedSequent {
            premises: 0,
            outcomes: 2
        }
    );

    let empty = parse_sequent("=>").unwrap();
    assert!(hilbert::prove(&empty, &config).is_err());
}

#[test]
fn exhausted_search_reports_diagnostics_without_a_proof() {
    // A -> A is provable but not within a zero-tick budget
    let config = HilbertConfig {
        max_ticks: 0,
        ..HilbertConfig::default()
    };
    match prove_formula("A -> A", &config) {
        HilbertOutcome::Exhausted { ticks, elapsed } => {
            assert_eq!(ticks, 1);
            assert!(elapsed <= config.timeout);
        }
        HilbertOutcome::Proof { .. } => panic!("zero-tick budget must exhaust"),
    }
}

#[test]
fn proof_text_lists_numbered_justified_steps() {
    let outcome = prove_formula("A -> (B -> A)", &HilbertConfig::default());
    let proof = match outcome {
        HilbertOutcome::Proof { proof, .. } => proof,
        HilbertOutcome::Exhausted { .. } => panic!("failed to prove"),
    };
    let text = proof.to_string();
    assert!(text.starts_with("1.  A -> (B -> A)\n"));
    assert!(text.contains("from axiom 1.1: A -> (B -> A)"));
    assert!(text.contains("      where\n        A = A\n        B = B"));
}

#[test]
fn proof_exports_to_json() {
    let outcome = prove_formula("A -> A", &HilbertConfig::default());
    let proof = match outcome {
        HilbertOutcome::Proof { proof, .. } => proof,
        HilbertOutcome::Exhausted { .. } => panic!("failed to prove"),
    };

    let json = serde_json::to_value(HilbertProofJson::from(&proof)).unwrap();
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), proof.ordering().len());
    assert_eq!(steps[0]["number"], 1);
    let last = steps.last().unwrap();
    assert_eq!(last["rule"], "modus ponens");
    assert_eq!(last["premises"].as_array().unwrap().len(), 2);
}
