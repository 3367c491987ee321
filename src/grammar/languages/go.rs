//! Go node kinds.

use crate::grammar::rules::{NodeKinds, NodeRules};
use crate::language::Language;

static KINDS: NodeKinds = NodeKinds {
    decision: &[
        "if_statement",
        "for_statement",
        "expression_case",
        "type_case",
        "communication_case",
    ],
    control: &[
        "if_statement",
        "for_statement",
        "expression_switch_statement",
        "type_switch_statement",
        "select_statement",
    ],
    exception: &[],
    function: &["function_declaration", "method_declaration", "func_literal"],
    // Methods live outside their receiver type, so named types have no body.
    class: &["type_declaration"],
    class_body: &[],
    import: &["import_declaration"],
    comment: &["comment"],
    block: &["block"],
};

#[derive(Debug, Default)]
pub struct GoRules;

impl NodeRules for GoRules {
    fn language(&self) -> Language {
        Language::Go
    }

    fn kinds(&self) -> &'static NodeKinds {
        &KINDS
    }
}

#[cfg(feature = "tree-sitter")]
pub fn grammar() -> tree_sitter::Language {
    tree_sitter_go::LANGUAGE.into()
}
