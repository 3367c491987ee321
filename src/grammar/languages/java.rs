//! Java node kinds.

use crate::grammar::rules::{NodeKinds, NodeRules};
use crate::language::Language;

static KINDS: NodeKinds = NodeKinds {
    decision: &[
        "if_statement",
        "while_statement",
        "do_statement",
        "for_statement",
        "enhanced_for_statement",
        "switch_expression",
        "catch_clause",
    ],
    control: &[
        "if_statement",
        "while_statement",
        "do_statement",
        "for_statement",
        "enhanced_for_statement",
    ],
    // flat cognitive increments; both kinds are decisions as well
    exception: &["switch_expression", "catch_clause"],
    function: &["method_declaration", "constructor_declaration"],
    class: &["class_declaration", "interface_declaration", "enum_declaration"],
    class_body: &["class_body", "interface_body", "enum_body"],
    import: &["import_declaration"],
    comment: &["line_comment", "block_comment"],
    block: &["block"],
};

#[derive(Debug, Default)]
pub struct JavaRules;

impl NodeRules for JavaRules {
    fn language(&self) -> Language {
        Language::Java
    }

    fn kinds(&self) -> &'static NodeKinds {
        &KINDS
    }
}

#[cfg(feature = "tree-sitter")]
pub fn grammar() -> tree_sitter::Language {
    tree_sitter_java::LANGUAGE.into()
}
