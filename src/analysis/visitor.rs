//! Single-pass syntax tree visitor.
//!
//! The visitor walks the tree with an explicit stack (deeply nested sources
//! would overflow a recursive walk) and folds every node into a
//! [`WalkState`]. All language knowledge comes from the grammar's
//! [`NodeRules`].

use tree_sitter::{Node, Tree};

use crate::detect::{ClassShape, FunctionSpan};
use crate::grammar::{NodeClass, NodeRules};

use super::StructureCounts;

/// Accumulated facts for one file.
#[derive(Debug, Default)]
pub struct WalkState {
    pub decisions: u32,
    pub cognitive: u32,
    pub max_nesting: u32,
    pub structure: StructureCounts,
    /// Trimmed text of top-level import nodes, in source order.
    pub imports: Vec<String>,
    pub functions: Vec<FunctionSpan>,
    pub classes: Vec<ClassShape>,
}

impl WalkState {
    pub fn cyclomatic(&self) -> u32 {
        1 + self.decisions
    }
}

struct Frame<'t> {
    node: Node<'t>,
    /// Cognitive nesting level: enclosing control-flow and function nodes.
    level: u32,
    /// Nesting depth: enclosing control, function, class and block nodes.
    depth: u32,
}

pub struct MetricsVisitor<'a> {
    rules: &'a dyn NodeRules,
    source: &'a [u8],
}

impl<'a> MetricsVisitor<'a> {
    pub fn new(rules: &'a dyn NodeRules, source: &'a str) -> Self {
        Self {
            rules,
            source: source.as_bytes(),
        }
    }

    pub fn walk(&self, tree: &Tree, state: &mut WalkState) {
        let mut stack = vec![Frame {
            node: tree.root_node(),
            level: 0,
            depth: 0,
        }];
        let mut children: Vec<Node> = Vec::new();

        while let Some(frame) = stack.pop() {
            if !self.visit(&frame, state) {
                continue;
            }

            let kind = frame.node.kind();
            let level = frame.level + u32::from(self.rules.increases_cognitive_nesting(kind));
            let depth = frame.depth + u32::from(self.rules.increases_nesting(kind));

            let mut cursor = frame.node.walk();
            children.clear();
            children.extend(frame.node.children(&mut cursor));
            // reversed so nodes pop in source order
            stack.extend(children.iter().rev().map(|&node| Frame { node, level, depth }));
        }
    }

    /// Fold one node into the state. Returns whether to descend into it.
    fn visit(&self, frame: &Frame, state: &mut WalkState) -> bool {
        let node = frame.node;
        let kind = node.kind();

        state.max_nesting = state.max_nesting.max(frame.depth);

        // keyword tokens can share a kind name with real nodes (`class`)
        if !node.is_named() {
            return false;
        }

        if self.rules.is_decision_node(kind) {
            state.decisions += 1;
        }
        if self.rules.is_control_node(kind) {
            state.cognitive += 1 + frame.level;
        } else if self.rules.is_exception_node(kind) {
            state.cognitive += 1;
        }

        match self.rules.classify_node(kind) {
            NodeClass::Function => {
                state.structure.functions += 1;
                state.functions.push(FunctionSpan {
                    start_line: node.start_position().row + 1,
                    end_line: node.end_position().row + 1,
                });
            }
            NodeClass::Class => {
                state.structure.classes += 1;
                state.classes.push(ClassShape {
                    line: node.start_position().row + 1,
                    methods: self.count_methods(node),
                });
            }
            NodeClass::Import => {
                state.structure.imports += 1;
                let text = node.utf8_text(self.source).unwrap_or("").trim();
                state.imports.push(text.to_string());
                return false;
            }
            NodeClass::Comment => state.structure.comments += 1,
            NodeClass::Other => {}
        }

        true
    }

    /// Function children of a class, directly or inside its body container.
    fn count_methods(&self, class: Node) -> usize {
        let is_function =
            |n: &Node| n.is_named() && self.rules.classify_node(n.kind()) == NodeClass::Function;

        let mut count = 0;
        let mut cursor = class.walk();
        for child in class.children(&mut cursor) {
            if is_function(&child) {
                count += 1;
            } else if self.rules.is_class_body(child.kind()) {
                let mut inner = child.walk();
                count += child.children(&mut inner).filter(|n| is_function(n)).count();
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::languages::{JavaScriptRules, PythonRules, RustRules};
    use crate::grammar::GrammarRegistry;
    use crate::language::Language;

    fn walk(language: Language, rules: &dyn NodeRules, source: &str) -> WalkState {
        let registry = GrammarRegistry::new();
        let tree = registry.get(language).unwrap().parse(source, None).unwrap();
        let mut state = WalkState::default();
        MetricsVisitor::new(rules, source).walk(&tree, &mut state);
        state
    }

    #[test]
    fn test_single_branch_function() {
        let state = walk(
            Language::Python,
            &PythonRules,
            "def f():\n    if True:\n        pass\n",
        );
        assert_eq!(state.cyclomatic(), 2);
        // if at level 1 (inside the function)
        assert_eq!(state.cognitive, 2);
        assert_eq!(state.structure.functions, 1);
        assert_eq!(state.functions, vec![FunctionSpan { start_line: 1, end_line: 3 }]);
    }

    #[test]
    fn test_flat_module_has_no_nesting() {
        let state = walk(Language::Python, &PythonRules, "x = 1\ny = x + 2\n");
        assert_eq!(state.cyclomatic(), 1);
        assert_eq!(state.cognitive, 0);
        assert_eq!(state.max_nesting, 0);
    }

    #[test]
    fn test_nested_control_flow() {
        let src = "def f(xs):\n    for x in xs:\n        if x:\n            while x:\n                x -= 1\n    try:\n        pass\n    except ValueError:\n        pass\n";
        let state = walk(Language::Python, &PythonRules, src);
        // for, if, while, try, except
        assert_eq!(state.cyclomatic(), 6);
        // for: 1+1, if: 1+2, while: 1+3, try: 1, except: 1
        assert_eq!(state.cognitive, 11);
        // function, block, for, block, if, block, while, block, then leaves
        assert!(state.max_nesting >= 8);
    }

    #[test]
    fn test_imports_are_collected_in_order() {
        let src = "import os\nfrom .models import User\n# comment\nimport sys\n";
        let state = walk(Language::Python, &PythonRules, src);
        assert_eq!(state.imports, vec!["import os", "from .models import User", "import sys"]);
        assert_eq!(state.structure.imports, 3);
        assert_eq!(state.structure.comments, 1);
    }

    #[test]
    fn test_class_methods_counted_through_body() {
        let src = "class A:\n    def a(self):\n        pass\n    def b(self):\n        pass\n";
        let state = walk(Language::Python, &PythonRules, src);
        assert_eq!(state.classes, vec![ClassShape { line: 1, methods: 2 }]);

        let js = "class Store {\n  get(k) { return this.m[k]; }\n  set(k, v) { this.m[k] = v; }\n}\n";
        let state = walk(Language::JavaScript, &JavaScriptRules, js);
        assert_eq!(state.classes, vec![ClassShape { line: 1, methods: 2 }]);
    }

    #[test]
    fn test_rust_match_arms_are_decisions() {
        let src = "fn f(x: u8) -> u8 {\n    match x {\n        0 => 1,\n        1 => 2,\n        _ => 3,\n    }\n}\n";
        let state = walk(Language::Rust, &RustRules, src);
        assert_eq!(state.cyclomatic(), 4);
        assert_eq!(state.structure.functions, 1);
    }

    #[test]
    fn test_switch_scores_once_plus_each_case() {
        let src = "switch (x) {\n  case 1:\n    a();\n    break;\n  case 2:\n    b();\n    break;\n  default:\n    c();\n}\n";
        let state = walk(Language::JavaScript, &JavaScriptRules, src);
        // switch + two cases; default is not a decision
        assert_eq!(state.cyclomatic(), 4);
        // flat increment, no nesting weight
        assert_eq!(state.cognitive, 1);
    }
}
