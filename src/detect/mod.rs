//! Heuristic design-pattern and anti-pattern detection.
//!
//! Detection runs inside the extractor. With a syntax tree, God Class and
//! Long Method come from tree facts ([`tree`]); without one they come from
//! indentation extents ([`lines`]). The textual rules (Singleton, Factory,
//! Observer, Dead Code) always run over raw lines. False positives are
//! expected; every finding carries a confidence.

pub mod lines;
pub mod rules;
pub mod tree;

pub use lines::{detect_structural, detect_textual, Evidence};
pub use tree::{ClassShape, FunctionSpan};

use serde::{Deserialize, Serialize};

/// Category of a detected pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    DesignPattern,
    AntiPattern,
    CodeSmell,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::DesignPattern => "design_pattern",
            PatternKind::AntiPattern => "anti_pattern",
            PatternKind::CodeSmell => "code_smell",
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodePattern {
    pub kind: PatternKind,
    pub name: String,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub file: String,
    /// 1-based.
    pub line: usize,
}

impl CodePattern {
    pub fn new(kind: PatternKind, name: &str, confidence: f64, file: &str, line: usize) -> Self {
        Self {
            kind,
            name: name.to_string(),
            confidence: confidence.clamp(0.0, 1.0),
            file: file.to_string(),
            line,
        }
    }
}

/// Order findings by line. Stable, so same-line findings keep detection order.
pub fn sort_by_line(patterns: &mut [CodePattern]) {
    patterns.sort_by_key(|p| p.line);
}
