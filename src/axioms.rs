//! The fixed axiom library
//!
//! Eleven Hilbert-style axiom schemas over the placeholders A, B, C.
//! Every schema is checked to be a tautology when the library is built;
//! a failure there is a defect in the library itself and aborts loudly.

use crate::logic::Formula;
use crate::validator::find_counterexample;
use std::rc::Rc;

/// A named axiom schema
#[derive(Debug, Clone)]
pub struct Axiom {
    pub name: &'static str,
    pub schema: Rc<Formula>,
}

fn a() -> Rc<Formula> {
    Formula::placeholder('A')
}

fn b() -> Rc<Formula> {
    Formula::placeholder('B')
}

fn c() -> Rc<Formula> {
    Formula::placeholder('C')
}

/// Build the axiom library
///
/// The schemas are small, so each proof request builds its own copy; the
/// library has no shared mutable state.
pub fn axiom_library() -> Vec<Axiom> {
    let axioms = vec![
        // A -> (B -> A)
        Axiom {
            name: "1.1",
            schema: Formula::implies(a(), Formula::implies(b(), a())),
        },
        // (A -> (B -> C)) -> ((A -> B) -> (A -> C))
        Axiom {
            name: "1.2",
            schema: Formula::implies(
                Formula::implies(a(), Formula::implies(b(), c())),
                Formula::implies(
                    Formula::implies(a(), b()),
                    Formula::implies(a(), c()),
                ),
            ),
        },
        // (A & B) -> A
        Axiom {
            name: "2.1",
            schema: Formula::implies(Formula::and(a(), b()), a()),
        },
        // (A & B) -> B
        Axiom {
            name: "2.2",
            schema: Formula::implies(Formula::and(a(), b()), b()),
        },
        // (A -> B) -> ((A -> C) -> (A -> (B & C)))
        Axiom {
            name: "2.3",
            schema: Formula::implies(
                Formula::implies(a(), b()),
                Formula::implies(
                    Formula::implies(a(), c()),
                    Formula::implies(a(), Formula::and(b(), c())),
                ),
            ),
        },
        // A -> (A V B)
        Axiom {
            name: "3.1",
            schema: Formula::implies(a(), Formula::or(a(), b())),
        },
        // B -> (A V B)
        Axiom {
            name: "3.2",
            schema: Formula::implies(b(), Formula::or(a(), b())),
        },
        // (A -> C) -> ((B -> C) -> ((A V B) -> C))
        Axiom {
            name: "3.3",
            schema: Formula::implies(
                Formula::implies(a(), c()),
                Formula::implies(
                    Formula::implies(b(), c()),
                    Formula::implies(Formula::or(a(), b()), c()),
                ),
            ),
        },
        // (A -> B) -> (!B -> !A)
        Axiom {
            name: "4.1",
            schema: Formula::implies(
                Formula::implies(a(), b()),
                Formula::implies(Formula::not(b()), Formula::not(a())),
            ),
        },
        // A -> !!A
        Axiom {
            name: "4.2",
            schema: Formula::implies(a(), Formula::not(Formula::not(a()))),
        },
        // !!A -> A
        Axiom {
            name: "4.3",
            schema: Formula::implies(Formula::not(Formula::not(a())), a()),
        },
    ];

    for axiom in &axioms {
        match find_counterexample(&axiom.schema) {
            Ok(None) => {}
            result => panic!(
                "axiom {} ({}) failed its tautology check: {:?}",
                axiom.name, axiom.schema, result
            ),
        }
    }

    axioms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_has_eleven_named_schemas() {
        let axioms = axiom_library();
        let names: Vec<&str> = axioms.iter().map(|axiom| axiom.name).collect();
        assert_eq!(
            names,
            vec!["1.1", "1.2", "2.1", "2.2", "2.3", "3.1", "3.2", "3.3", "4.1", "4.2", "4.3"]
        );
    }

    #[test]
    fn every_schema_is_a_tautology() {
        // exhaustive over the placeholder alphabet; also exercised by the
        // construction-time assertion, kept explicit here
        for axiom in axiom_library() {
            assert_eq!(
                find_counterexample(&axiom.schema),
                Ok(None),
                "axiom {} is not a tautology",
                axiom.name
            );
        }
    }

    #[test]
    fn schemas_use_at_most_three_placeholders() {
        for axiom in axiom_library() {
            assert!(axiom.schema.atoms().len() <= 3);
            assert!(axiom.schema.atoms().iter().all(|l| ['A', 'B', 'C'].contains(l)));
        }
    }

    #[test]
    fn schema_rendering_matches_names() {
        let axioms = axiom_library();
        assert_eq!(axioms[0].schema.to_string(), "A -> (B -> A)");
        assert_eq!(
            axioms[1].schema.to_string(),
            "(A -> (B -> C)) -> ((A -> B) -> (A -> C))"
        );
        assert_eq!(axioms[10].schema.to_string(), "!!A -> A");
    }
}
