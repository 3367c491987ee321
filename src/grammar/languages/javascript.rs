//! JavaScript node kinds.

use crate::grammar::rules::{NodeKinds, NodeRules};
use crate::language::Language;

/// Statement kinds shared with the TypeScript grammar.
pub(super) const DECISION: &[&str] = &[
    "if_statement",
    "while_statement",
    "do_statement",
    "for_statement",
    "for_in_statement",
    "switch_statement",
    "switch_case",
    "catch_clause",
];

pub(super) const CONTROL: &[&str] = &[
    "if_statement",
    "while_statement",
    "do_statement",
    "for_statement",
    "for_in_statement",
];

/// Flat `+1` cognitive increments. `switch_statement` and `catch_clause` are
/// also in [`DECISION`]; each `switch_case` adds its own decision on top.
pub(super) const EXCEPTION: &[&str] = &["switch_statement", "catch_clause"];

static KINDS: NodeKinds = NodeKinds {
    decision: DECISION,
    control: CONTROL,
    exception: EXCEPTION,
    function: &[
        "function_declaration",
        "generator_function_declaration",
        "function_expression",
        "arrow_function",
        "method_definition",
    ],
    class: &["class_declaration", "class"],
    class_body: &["class_body"],
    import: &["import_statement"],
    comment: &["comment"],
    block: &["statement_block"],
};

#[derive(Debug, Default)]
pub struct JavaScriptRules;

impl NodeRules for JavaScriptRules {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn kinds(&self) -> &'static NodeKinds {
        &KINDS
    }
}

#[cfg(feature = "tree-sitter")]
pub fn grammar() -> tree_sitter::Language {
    tree_sitter_javascript::LANGUAGE.into()
}
