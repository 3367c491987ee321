//! C node kinds.

use crate::grammar::rules::{NodeKinds, NodeRules};
use crate::language::Language;

static KINDS: NodeKinds = NodeKinds {
    decision: &[
        "if_statement",
        "while_statement",
        "do_statement",
        "for_statement",
        "case_statement",
    ],
    control: &["if_statement", "while_statement", "do_statement", "for_statement"],
    exception: &["switch_statement"],
    function: &["function_definition"],
    // struct_specifier also matches every `struct x` type reference.
    class: &[],
    class_body: &[],
    import: &["preproc_include"],
    comment: &["comment"],
    block: &["compound_statement"],
};

#[derive(Debug, Default)]
pub struct CRules;

impl NodeRules for CRules {
    fn language(&self) -> Language {
        Language::C
    }

    fn kinds(&self) -> &'static NodeKinds {
        &KINDS
    }
}

#[cfg(feature = "tree-sitter")]
pub fn grammar() -> tree_sitter::Language {
    tree_sitter_c::LANGUAGE.into()
}
