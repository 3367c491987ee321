//! Per-language node-kind rules.
//!
//! Each grammar names the same concepts (a branch, a loop, a function) with
//! different node kinds. A [`NodeRules`] implementation maps those kinds onto
//! the categories the metrics visitor understands, so the visitor itself
//! never matches on language.

use crate::language::Language;

/// Structural category of a syntax node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClass {
    Function,
    Class,
    Import,
    Comment,
    Other,
}

/// Node-kind tables for one grammar.
#[derive(Debug)]
pub struct NodeKinds {
    /// Each occurrence adds one to cyclomatic complexity.
    pub decision: &'static [&'static str],
    /// Branches and loops: cognitive `1 + nesting level`, and they nest.
    pub control: &'static [&'static str],
    /// Flat cognitive increments (`+1`, no nesting penalty).
    pub exception: &'static [&'static str],
    pub function: &'static [&'static str],
    pub class: &'static [&'static str],
    /// Containers holding a class's members.
    pub class_body: &'static [&'static str],
    pub import: &'static [&'static str],
    pub comment: &'static [&'static str],
    /// Plain statement blocks; they only count towards nesting depth.
    pub block: &'static [&'static str],
}

/// Maps a grammar's node kinds onto metric categories.
///
/// Implementations only provide the tables; the classification logic is
/// shared.
pub trait NodeRules: Send + Sync {
    fn language(&self) -> Language;

    fn kinds(&self) -> &'static NodeKinds;

    fn classify_node(&self, kind: &str) -> NodeClass {
        let kinds = self.kinds();
        if kinds.function.contains(&kind) {
            NodeClass::Function
        } else if kinds.class.contains(&kind) {
            NodeClass::Class
        } else if kinds.import.contains(&kind) {
            NodeClass::Import
        } else if kinds.comment.contains(&kind) {
            NodeClass::Comment
        } else {
            NodeClass::Other
        }
    }

    fn is_decision_node(&self, kind: &str) -> bool {
        self.kinds().decision.contains(&kind)
    }

    fn is_comment_node(&self, kind: &str) -> bool {
        self.kinds().comment.contains(&kind)
    }

    fn is_control_node(&self, kind: &str) -> bool {
        self.kinds().control.contains(&kind)
    }

    fn is_exception_node(&self, kind: &str) -> bool {
        self.kinds().exception.contains(&kind)
    }

    fn is_class_body(&self, kind: &str) -> bool {
        self.kinds().class_body.contains(&kind)
    }

    /// Kinds counted by nesting depth: control flow, functions, classes and blocks.
    fn increases_nesting(&self, kind: &str) -> bool {
        let kinds = self.kinds();
        kinds.control.contains(&kind)
            || kinds.function.contains(&kind)
            || kinds.class.contains(&kind)
            || kinds.block.contains(&kind)
    }

    /// Kinds that raise the level used by cognitive complexity.
    fn increases_cognitive_nesting(&self, kind: &str) -> bool {
        let kinds = self.kinds();
        kinds.control.contains(&kind) || kinds.function.contains(&kind)
    }
}
