//! Repolens - static code metrics for source trees.
//!
//! Repolens analyzes a checked-out source tree and produces quantitative
//! code-quality signals: per-file complexity and maintainability metrics,
//! heuristic design/anti-pattern findings, dependency classification, and a
//! repository-wide aggregate (language mix, hotspots, architecture score).
//!
//! # Architecture
//!
//! - `language`: path to language tag classification
//! - `grammar`: tree-sitter grammars and per-language node rules
//! - `analysis`: per-file metrics extraction (syntax tree or line heuristics)
//! - `detect`: pattern detection run by the extractor
//! - `aggregate`: directory walk and repository-level fold
//! - `report`: output formatting (pretty, JSON, YAML)
//!
//! # Adding a New Language
//!
//! Add the extension to `language.rs`. For syntax-tree analysis, add a
//! `NodeRules` implementation under `src/grammar/languages/` and register it
//! in `languages/mod.rs`; otherwise add a line table in
//! `analysis/heuristic.rs`.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = repolens::analyze_repository(Path::new(".")).unwrap();
//! println!("{} files, {} lines", report.metrics.total_files, report.metrics.total_lines);
//! ```

pub mod aggregate;
pub mod analysis;
pub mod cli;
pub mod detect;
pub mod error;
pub mod grammar;
pub mod language;
pub mod report;

pub use aggregate::{Aggregator, RepositoryMetrics, RepositoryReport};
pub use analysis::{Extractor, FileMetrics};
pub use detect::{CodePattern, PatternKind};
pub use error::AnalysisError;
pub use grammar::GrammarRegistry;
pub use language::Language;

/// Analyze `root` with every compiled-in grammar on the rayon pool.
pub fn analyze_repository(root: &std::path::Path) -> error::Result<RepositoryReport> {
    let extractor = Extractor::new();
    Aggregator::new(&extractor).aggregate(root)
}
