//! Sequent-calculus decision procedure
//!
//! Decides provability of an arbitrary two-sided sequent by systematic
//! backward rule application and renders the resulting proof tree. No
//! subgoal memoization: identical sub-sequents reached on different
//! branches are recomputed, keeping printed trees faithful.

mod engine;
mod render;

pub use engine::{ProofNode, Rule};
pub use render::render_tree;

use crate::logic::Sequent;
use std::fmt;

/// Outcome of a sequent decision: the verdict plus the full proof tree,
/// including any failed branches
#[derive(Debug)]
pub struct GentzenProof {
    pub provable: bool,
    pub root: ProofNode,
}

impl GentzenProof {
    /// The tree diagram without the verdict line
    pub fn rendered_tree(&self) -> String {
        render_tree(&self.root)
    }
}

impl fmt::Display for GentzenProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", if self.provable { "Provable" } else { "Unprovable" })?;
        write!(f, "{}", self.rendered_tree())
    }
}

/// Decide a sequent and build its proof tree
pub fn prove(sequent: Sequent) -> GentzenProof {
    let mut root = ProofNode::new(sequent);
    let provable = engine::decide(&mut root);
    GentzenProof { provable, root }
}
