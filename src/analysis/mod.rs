//! Per-file metrics extraction.
//!
//! [`Extractor`] picks one of three modes per file:
//!
//! - **ast**: the language has a loaded grammar; a single visitor pass over
//!   the syntax tree computes complexity, structure and imports.
//! - **heuristic**: known language, no grammar (or the parse failed); line
//!   tables count structure and complexity falls back to a baseline.
//! - **basic**: unrecognized file; only line counts.

mod deps;
mod extractor;
pub mod heuristic;
pub mod quality;
mod types;
#[cfg(feature = "tree-sitter")]
pub mod visitor;

pub use deps::is_internal;
pub use extractor::Extractor;
pub use types::{
    AnalysisMode, ComplexityMetrics, DependencyInfo, FileMetrics, LineCounts, QualityMetrics,
    StructureCounts,
};
