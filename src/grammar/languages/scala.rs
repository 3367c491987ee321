//! Scala node kinds.

use crate::grammar::rules::{NodeKinds, NodeRules};
use crate::language::Language;

static KINDS: NodeKinds = NodeKinds {
    decision: &[
        "if_expression",
        "while_expression",
        "for_expression",
        "case_clause",
        "catch_clause",
    ],
    control: &[
        "if_expression",
        "while_expression",
        "for_expression",
        "match_expression",
    ],
    exception: &["try_expression", "catch_clause"],
    function: &["function_definition"],
    class: &["class_definition", "object_definition", "trait_definition"],
    class_body: &["template_body"],
    import: &["import_declaration"],
    comment: &["comment", "block_comment"],
    block: &["block"],
};

#[derive(Debug, Default)]
pub struct ScalaRules;

impl NodeRules for ScalaRules {
    fn language(&self) -> Language {
        Language::Scala
    }

    fn kinds(&self) -> &'static NodeKinds {
        &KINDS
    }
}

#[cfg(feature = "tree-sitter")]
pub fn grammar() -> tree_sitter::Language {
    tree_sitter_scala::LANGUAGE.into()
}
