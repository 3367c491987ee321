//! TypeScript node kinds. `.tsx` files are parsed with the TSX dialect.

use super::javascript;
use crate::grammar::rules::{NodeKinds, NodeRules};
use crate::language::Language;

static KINDS: NodeKinds = NodeKinds {
    decision: javascript::DECISION,
    control: javascript::CONTROL,
    exception: javascript::EXCEPTION,
    function: &[
        "function_declaration",
        "generator_function_declaration",
        "function_expression",
        "arrow_function",
        "method_definition",
    ],
    class: &["class_declaration", "abstract_class_declaration", "class"],
    class_body: &["class_body"],
    import: &["import_statement"],
    comment: &["comment"],
    block: &["statement_block"],
};

#[derive(Debug, Default)]
pub struct TypeScriptRules;

impl NodeRules for TypeScriptRules {
    fn language(&self) -> Language {
        Language::TypeScript
    }

    fn kinds(&self) -> &'static NodeKinds {
        &KINDS
    }
}

#[cfg(feature = "tree-sitter")]
pub fn grammar() -> tree_sitter::Language {
    tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
}

#[cfg(feature = "tree-sitter")]
pub fn tsx_grammar() -> tree_sitter::Language {
    tree_sitter_typescript::LANGUAGE_TSX.into()
}
