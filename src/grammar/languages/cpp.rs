//! C++ node kinds.

use crate::grammar::rules::{NodeKinds, NodeRules};
use crate::language::Language;

static KINDS: NodeKinds = NodeKinds {
    decision: &[
        "if_statement",
        "while_statement",
        "do_statement",
        "for_statement",
        "for_range_loop",
        "case_statement",
        "catch_clause",
    ],
    control: &[
        "if_statement",
        "while_statement",
        "do_statement",
        "for_statement",
        "for_range_loop",
    ],
    exception: &["switch_statement", "catch_clause"],
    function: &["function_definition"],
    class: &["class_specifier"],
    class_body: &["field_declaration_list"],
    import: &["preproc_include"],
    comment: &["comment"],
    block: &["compound_statement"],
};

#[derive(Debug, Default)]
pub struct CppRules;

impl NodeRules for CppRules {
    fn language(&self) -> Language {
        Language::Cpp
    }

    fn kinds(&self) -> &'static NodeKinds {
        &KINDS
    }
}

#[cfg(feature = "tree-sitter")]
pub fn grammar() -> tree_sitter::Language {
    tree_sitter_cpp::LANGUAGE.into()
}
