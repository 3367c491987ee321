//! Swift node kinds.

use crate::grammar::rules::{NodeKinds, NodeRules};
use crate::language::Language;

static KINDS: NodeKinds = NodeKinds {
    decision: &[
        "if_statement",
        "guard_statement",
        "for_statement",
        "while_statement",
        "repeat_while_statement",
        "switch_entry",
        "catch_block",
    ],
    control: &[
        "if_statement",
        "guard_statement",
        "for_statement",
        "while_statement",
        "repeat_while_statement",
        "switch_statement",
    ],
    exception: &["catch_block"],
    function: &["function_declaration", "init_declaration"],
    class: &["class_declaration", "protocol_declaration"],
    class_body: &["class_body", "protocol_body", "enum_class_body"],
    import: &["import_declaration"],
    comment: &["comment", "multiline_comment"],
    block: &["statements"],
};

#[derive(Debug, Default)]
pub struct SwiftRules;

impl NodeRules for SwiftRules {
    fn language(&self) -> Language {
        Language::Swift
    }

    fn kinds(&self) -> &'static NodeKinds {
        &KINDS
    }
}

#[cfg(feature = "tree-sitter")]
pub fn grammar() -> tree_sitter::Language {
    tree_sitter_swift::LANGUAGE.into()
}
