//! God Class and Long Method over syntax-tree facts.

use super::rules::{self, confidence};
use super::{CodePattern, PatternKind};

/// Line extent of a function node (1-based, inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSpan {
    pub start_line: usize,
    pub end_line: usize,
}

/// A class node and the number of methods it owns directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassShape {
    pub line: usize,
    pub methods: usize,
}

pub fn detect(file: &str, functions: &[FunctionSpan], classes: &[ClassShape]) -> Vec<CodePattern> {
    let mut patterns = Vec::new();

    for class in classes {
        if class.methods > rules::GOD_CLASS_MAX_METHODS {
            patterns.push(CodePattern::new(
                PatternKind::AntiPattern,
                rules::GOD_CLASS,
                confidence::GOD_CLASS_TREE,
                file,
                class.line,
            ));
        }
    }

    for func in functions {
        if func.end_line.saturating_sub(func.start_line) > rules::LONG_METHOD_MAX_LINES {
            patterns.push(CodePattern::new(
                PatternKind::AntiPattern,
                rules::LONG_METHOD,
                confidence::LONG_METHOD_TREE,
                file,
                func.start_line,
            ));
        }
    }

    patterns
}
