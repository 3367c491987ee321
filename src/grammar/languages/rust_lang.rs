//! Rust node kinds.

use crate::grammar::rules::{NodeKinds, NodeRules};
use crate::language::Language;

static KINDS: NodeKinds = NodeKinds {
    decision: &[
        "if_expression",
        "while_expression",
        "for_expression",
        "loop_expression",
        "match_arm",
    ],
    control: &[
        "if_expression",
        "while_expression",
        "for_expression",
        "loop_expression",
        "match_expression",
    ],
    // `?` is not a branch for cognitive purposes.
    exception: &[],
    function: &["function_item"],
    class: &["struct_item", "enum_item", "trait_item", "impl_item"],
    class_body: &["declaration_list"],
    import: &["use_declaration", "extern_crate_declaration"],
    comment: &["line_comment", "block_comment"],
    block: &["block"],
};

#[derive(Debug, Default)]
pub struct RustRules;

impl NodeRules for RustRules {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn kinds(&self) -> &'static NodeKinds {
        &KINDS
    }
}

#[cfg(feature = "tree-sitter")]
pub fn grammar() -> tree_sitter::Language {
    tree_sitter_rust::LANGUAGE.into()
}
