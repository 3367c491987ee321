//! File metrics extraction.

use std::path::Path;

use tracing::debug;
#[cfg(feature = "tree-sitter")]
use tracing::warn;

use crate::detect::{self, Evidence};
use crate::grammar::GrammarRegistry;
use crate::language::Language;

use super::heuristic;
use super::quality;
use super::{AnalysisMode, ComplexityMetrics, DependencyInfo, FileMetrics, LineCounts, StructureCounts};

#[cfg(feature = "tree-sitter")]
use super::visitor::{MetricsVisitor, WalkState};
#[cfg(feature = "tree-sitter")]
use crate::grammar::Grammar;

/// Turns `(path, content)` into [`FileMetrics`].
///
/// Extraction never fails: a file without a usable grammar is analyzed with
/// line tables, and an unrecognized file only gets line counts.
pub struct Extractor {
    registry: GrammarRegistry,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// An extractor with every compiled-in grammar loaded.
    pub fn new() -> Self {
        Self::with_registry(GrammarRegistry::new())
    }

    pub fn with_registry(registry: GrammarRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &GrammarRegistry {
        &self.registry
    }

    /// Extract metrics for one file. `path` is reported verbatim in the
    /// result, so pass it relative to the repository root.
    pub fn extract(&self, path: &Path, content: &str) -> FileMetrics {
        let lines = LineCounts::of(content);

        let Some(language) = Language::from_path(path) else {
            debug!("No language for {}, counting lines only", path.display());
            return basic(path, lines);
        };

        #[cfg(feature = "tree-sitter")]
        if let Some(grammar) = self.registry.get(language) {
            match extract_tree(path, content, language, grammar, lines) {
                Ok(metrics) => return metrics,
                Err(e) => warn!(
                    "Parse failed for {}, falling back to heuristics: {:#}",
                    path.display(),
                    e
                ),
            }
        }

        heuristic_metrics(path, content, language, lines)
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

#[cfg(feature = "tree-sitter")]
fn extract_tree(
    path: &Path,
    content: &str,
    language: Language,
    grammar: &Grammar,
    lines: LineCounts,
) -> anyhow::Result<FileMetrics> {
    let extension = path.extension().and_then(|e| e.to_str());
    let tree = grammar.parse(content, extension)?;
    if tree.root_node().has_error() {
        debug!("{} has syntax errors, metrics cover the recovered tree", path.display());
    }

    let mut state = WalkState::default();
    MetricsVisitor::new(grammar.rules(), content).walk(&tree, &mut state);

    let file = display_path(path);
    let loc = lines.non_blank;
    let cyclomatic = state.cyclomatic();

    let mut patterns = detect::tree::detect(&file, &state.functions, &state.classes);
    patterns.extend(detect::detect_textual(&file, language, content, Evidence::SyntaxTree));
    detect::sort_by_line(&mut patterns);

    Ok(FileMetrics {
        file_path: file,
        language: Some(language),
        lines_of_code: loc,
        lines,
        structure: state.structure,
        mode: AnalysisMode::Ast,
        complexity: ComplexityMetrics {
            cyclomatic_complexity: cyclomatic,
            cognitive_complexity: state.cognitive,
            nesting_depth: state.max_nesting,
            size_lines: loc,
        },
        quality: quality::from_tree_metrics(cyclomatic, loc),
        dependencies: DependencyInfo::from_imports(state.imports),
        patterns,
    })
}

fn heuristic_metrics(path: &Path, content: &str, language: Language, lines: LineCounts) -> FileMetrics {
    let table = heuristic::rules_for(language);
    let scan = heuristic::scan(table, content);
    let file = display_path(path);

    let mut patterns = detect::detect_structural(&file, table, content);
    patterns.extend(detect::detect_textual(&file, language, content, Evidence::LinesOnly));
    detect::sort_by_line(&mut patterns);

    FileMetrics {
        file_path: file,
        language: Some(language),
        lines_of_code: lines.non_blank,
        lines,
        structure: scan.structure,
        mode: AnalysisMode::Heuristic,
        complexity: ComplexityMetrics::baseline(),
        quality: quality::degraded(),
        dependencies: DependencyInfo::from_imports(scan.imports),
        patterns,
    }
}

fn basic(path: &Path, lines: LineCounts) -> FileMetrics {
    FileMetrics {
        file_path: display_path(path),
        language: None,
        lines_of_code: lines.non_blank,
        lines,
        structure: StructureCounts::default(),
        mode: AnalysisMode::Basic,
        complexity: ComplexityMetrics::baseline(),
        quality: quality::degraded(),
        dependencies: DependencyInfo::default(),
        patterns: Vec::new(),
    }
}
