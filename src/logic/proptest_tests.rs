//! Property-based tests for matching and substitution.

use super::formula::{BinaryOp, Formula};
use super::matching::match_schema;
use super::substitution::{substitute, Substitution};
use proptest::prelude::*;
use std::rc::Rc;

/// Formula shape before choosing atoms
#[derive(Debug, Clone)]
enum FormulaDesc {
    Atom(u8),
    Not(Box<FormulaDesc>),
    Binary(u8, Box<FormulaDesc>, Box<FormulaDesc>),
}

fn arb_formula_desc(max_depth: u32) -> BoxedStrategy<FormulaDesc> {
    if max_depth == 0 {
        (0..3u8).prop_map(FormulaDesc::Atom).boxed()
    } else {
        prop_oneof![
            2 => (0..3u8).prop_map(FormulaDesc::Atom),
            1 => arb_formula_desc(max_depth - 1).prop_map(|inner| FormulaDesc::Not(Box::new(inner))),
            2 => (
                0..3u8,
                arb_formula_desc(max_depth - 1),
                arb_formula_desc(max_depth - 1),
            )
                .prop_map(|(op, lhs, rhs)| {
                    FormulaDesc::Binary(op, Box::new(lhs), Box::new(rhs))
                }),
        ]
        .boxed()
    }
}

fn binary_op(index: u8) -> BinaryOp {
    match index % 3 {
        0 => BinaryOp::And,
        1 => BinaryOp::Or,
        _ => BinaryOp::Implies,
    }
}

/// Build a schema over placeholders A, B, C
fn build_schema(desc: &FormulaDesc) -> Rc<Formula> {
    match desc {
        FormulaDesc::Atom(i) => Formula::placeholder(['A', 'B', 'C'][(*i % 3) as usize]),
        FormulaDesc::Not(inner) => Formula::not(build_schema(inner)),
        FormulaDesc::Binary(op, lhs, rhs) => {
            Formula::binary(binary_op(*op), build_schema(lhs), build_schema(rhs))
        }
    }
}

/// Build a concrete formula over literals p, q, r
fn build_concrete(desc: &FormulaDesc) -> Rc<Formula> {
    match desc {
        FormulaDesc::Atom(i) => Formula::literal(['p', 'q', 'r'][(*i % 3) as usize]),
        FormulaDesc::Not(inner) => Formula::not(build_concrete(inner)),
        FormulaDesc::Binary(op, lhs, rhs) => {
            Formula::binary(binary_op(*op), build_concrete(lhs), build_concrete(rhs))
        }
    }
}

proptest! {
    /// If match(S, F) succeeds with bindings, substituting them back into
    /// S reproduces F exactly.
    #[test]
    fn match_substitute_round_trip(
        schema_desc in arb_formula_desc(3),
        a in arb_formula_desc(2),
        b in arb_formula_desc(2),
        c in arb_formula_desc(2),
    ) {
        let schema = build_schema(&schema_desc);
        let mut bindings = Substitution::new();
        bindings.insert('A', build_concrete(&a));
        bindings.insert('B', build_concrete(&b));
        bindings.insert('C', build_concrete(&c));

        let target = substitute(&schema, &bindings);
        let mut recovered = Substitution::new();
        prop_assert!(
            match_schema(&schema, &target, &mut recovered),
            "schema must match its own instance"
        );
        prop_assert_eq!(
            substitute(&schema, &recovered),
            target,
            "recovered bindings must rebuild the instance"
        );
    }

    /// Matching never invents bindings for letters the schema lacks.
    #[test]
    fn match_binds_only_schema_letters(
        schema_desc in arb_formula_desc(3),
        target_desc in arb_formula_desc(3),
    ) {
        let schema = build_schema(&schema_desc);
        let target = build_concrete(&target_desc);
        let mut subst = Substitution::new();
        if match_schema(&schema, &target, &mut subst) {
            let letters = schema.atoms();
            for (letter, _) in subst.iter() {
                prop_assert!(letters.contains(&letter));
            }
        }
    }
}
