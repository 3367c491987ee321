//! Repository-level records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::{FileMetrics, QualityMetrics};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    pub files: usize,
    pub lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LargestFile {
    pub path: String,
    pub lines: usize,
    pub language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotspotKind {
    LargeFile,
    HighComplexity,
    Monolith,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HotspotSeverity {
    Medium,
    High,
}

impl std::fmt::Display for HotspotSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HotspotSeverity::Medium => write!(f, "medium"),
            HotspotSeverity::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub kind: HotspotKind,
    pub file: String,
    pub lines: usize,
    pub severity: HotspotSeverity,
    pub description: String,
}

/// Pattern counts across the repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSummary {
    pub design_patterns: usize,
    pub anti_patterns: usize,
    pub code_smells: usize,
    pub by_name: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryMetrics {
    pub total_files: usize,
    pub total_lines: usize,
    /// Language tag (including `unknown`) to file and line totals.
    pub languages: BTreeMap<String, LanguageStats>,
    /// Lowercased extension (with dot) to file count.
    pub file_types: BTreeMap<String, usize>,
    pub largest_files: Vec<LargestFile>,
    /// Mean cyclomatic complexity over syntax-tree files.
    pub avg_complexity: f64,
    /// Mean maintainability index over syntax-tree files.
    pub avg_maintainability: f64,
    pub complexity_score: f64,
    pub quality: QualityMetrics,
    pub patterns: PatternSummary,
    pub hotspots: Vec<Hotspot>,
    pub architecture_score: f64,
}

/// Result of one aggregation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryReport {
    pub root: String,
    pub metrics: RepositoryMetrics,
    /// Per-file results in walk order.
    pub files: Vec<FileMetrics>,
}
