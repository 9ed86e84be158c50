//! One-way matching of axiom schemas against formulas

use super::formula::{Formula, FormulaKind};
use super::substitution::Substitution;
use std::rc::Rc;

/// One-way match: extend `subst` so that the schema pattern instantiates
/// to `target`. Only placeholder atoms in the pattern bind; a literal atom
/// never matches. The walk is deterministic with no backtracking, and any
/// node mismatch fails the whole match. On failure `subst` may hold
/// partial bindings; callers discard it.
pub fn match_schema(pattern: &Rc<Formula>, target: &Rc<Formula>, subst: &mut Substitution) -> bool {
    match pattern.kind() {
        FormulaKind::Atom { letter, literal } => {
            if *literal {
                return false;
            }
            match subst.get(*letter) {
                Some(bound) => bound == target,
                None => {
                    subst.insert(*letter, target.clone());
                    true
                }
            }
        }
        FormulaKind::Not(inner) => match target.kind() {
            FormulaKind::Not(target_inner) => match_schema(inner, target_inner, subst),
            _ => false,
        },
        FormulaKind::Binary(op, lhs, rhs) => match target.kind() {
            FormulaKind::Binary(target_op, target_lhs, target_rhs) if target_op == op => {
                match_schema(lhs, target_lhs, subst) && match_schema(rhs, target_rhs, subst)
            }
            _ => false,
        },
    }
}
