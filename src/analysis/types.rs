//! Per-file metric records.

use serde::{Deserialize, Serialize};

use crate::detect::CodePattern;
use crate::language::{self, Language};

/// How a file's metrics were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Full syntax-tree traversal.
    Ast,
    /// Known language without a usable grammar: line tables only.
    Heuristic,
    /// Unrecognized file: line counts only.
    Basic,
}

impl std::fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisMode::Ast => write!(f, "ast"),
            AnalysisMode::Heuristic => write!(f, "heuristic"),
            AnalysisMode::Basic => write!(f, "basic"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexityMetrics {
    /// Base 1 plus one per decision point.
    pub cyclomatic_complexity: u32,
    pub cognitive_complexity: u32,
    pub nesting_depth: u32,
    pub size_lines: usize,
}

impl ComplexityMetrics {
    /// Baseline used when no syntax tree is available.
    pub fn baseline() -> Self {
        Self {
            cyclomatic_complexity: 1,
            cognitive_complexity: 0,
            nesting_depth: 0,
            size_lines: 0,
        }
    }
}

/// Quality estimates. None of these are measured; they are derived from size
/// and complexity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub maintainability_index: f64,
    pub technical_debt_ratio: f64,
    pub duplication_estimate: f64,
    pub test_coverage_estimate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyInfo {
    /// Raw import text in source order.
    pub imports: Vec<String>,
    pub internal_deps: Vec<String>,
    pub external_deps: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureCounts {
    pub functions: usize,
    pub classes: usize,
    pub imports: usize,
    pub comments: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    pub total: usize,
    pub non_blank: usize,
    pub blank: usize,
}

impl LineCounts {
    pub fn of(content: &str) -> Self {
        let mut counts = LineCounts::default();
        for line in content.lines() {
            counts.total += 1;
            if line.trim().is_empty() {
                counts.blank += 1;
            } else {
                counts.non_blank += 1;
            }
        }
        counts
    }
}

/// Everything known about one file after extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMetrics {
    pub file_path: String,
    #[serde(with = "language::serde_tag")]
    pub language: Option<Language>,
    /// Non-blank line count.
    pub lines_of_code: usize,
    pub lines: LineCounts,
    pub structure: StructureCounts,
    pub mode: AnalysisMode,
    pub complexity: ComplexityMetrics,
    pub quality: QualityMetrics,
    pub dependencies: DependencyInfo,
    pub patterns: Vec<CodePattern>,
}

impl FileMetrics {
    pub fn language_tag(&self) -> &'static str {
        language::tag(self.language)
    }
}
