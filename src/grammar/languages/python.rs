//! Python node kinds.

use crate::grammar::rules::{NodeKinds, NodeRules};
use crate::language::Language;

static KINDS: NodeKinds = NodeKinds {
    decision: &[
        "if_statement",
        "elif_clause",
        "while_statement",
        "for_statement",
        "try_statement",
        "except_clause",
    ],
    control: &["if_statement", "while_statement", "for_statement"],
    exception: &["try_statement", "except_clause"],
    function: &["function_definition"],
    class: &["class_definition"],
    class_body: &["block"],
    import: &[
        "import_statement",
        "import_from_statement",
        "future_import_statement",
    ],
    comment: &["comment"],
    block: &["block"],
};

#[derive(Debug, Default)]
pub struct PythonRules;

impl NodeRules for PythonRules {
    fn language(&self) -> Language {
        Language::Python
    }

    fn kinds(&self) -> &'static NodeKinds {
        &KINDS
    }
}

#[cfg(feature = "tree-sitter")]
pub fn grammar() -> tree_sitter::Language {
    tree_sitter_python::LANGUAGE.into()
}

#[cfg(all(test, feature = "tree-sitter"))]
mod tests {
    use super::*;
    use crate::grammar::rules::NodeClass;

    fn kinds_in(source: &str) -> Vec<String> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&grammar()).unwrap();
        let tree = parser.parse(source, None).unwrap();
        let mut out = Vec::new();
        let mut stack = vec![tree.root_node()];
        while let Some(node) = stack.pop() {
            out.push(node.kind().to_string());
            let mut cursor = node.walk();
            stack.extend(node.children(&mut cursor));
        }
        out
    }

    #[test]
    fn test_tables_match_grammar_kinds() {
        let kinds = kinds_in(
            "import os\nfrom a import b\n# note\nclass A:\n    def f(self):\n        if x:\n            pass\n        elif y:\n            pass\n        for i in z:\n            pass\n        while q:\n            pass\n        try:\n            pass\n        except E:\n            pass\n",
        );
        for expected in [
            "import_statement",
            "import_from_statement",
            "comment",
            "class_definition",
            "function_definition",
            "if_statement",
            "elif_clause",
            "for_statement",
            "while_statement",
            "try_statement",
            "except_clause",
            "block",
        ] {
            assert!(kinds.iter().any(|k| k == expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_classification() {
        let rules = PythonRules;
        assert_eq!(rules.classify_node("function_definition"), NodeClass::Function);
        assert_eq!(rules.classify_node("import_from_statement"), NodeClass::Import);
        assert!(rules.is_decision_node("elif_clause"));
        assert!(!rules.is_control_node("elif_clause"));
    }
}
