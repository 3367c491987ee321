//! Repository aggregation.
//!
//! The [`Aggregator`] walks a directory, extracts metrics for every candidate
//! file (in parallel with rayon by default) and folds the results into
//! [`RepositoryMetrics`] at a single point. Per-file failures are logged and
//! skipped; only problems with the root are returned as errors.

pub mod score;
mod types;
pub mod walk;

pub use types::{
    Hotspot, HotspotKind, HotspotSeverity, LanguageStats, LargestFile, PatternSummary,
    RepositoryMetrics, RepositoryReport,
};

use std::collections::BTreeMap;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::analysis::{AnalysisMode, Extractor, FileMetrics};
use crate::detect::PatternKind;
use crate::error::{AnalysisError, Result};

/// Drives extraction over a source tree.
pub struct Aggregator<'a> {
    extractor: &'a Extractor,
    parallel: bool,
}

impl<'a> Aggregator<'a> {
    pub fn new(extractor: &'a Extractor) -> Self {
        Self {
            extractor,
            parallel: true,
        }
    }

    /// Extract files on the rayon pool (default) or on the calling thread.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Analyze every candidate file under `root`.
    pub fn aggregate(&self, root: &Path) -> Result<RepositoryReport> {
        check_root(root)?;

        let files = walk::collect_files(root);
        info!("Analyzing {} files under {}", files.len(), root.display());

        let metrics: Vec<FileMetrics> = if self.parallel {
            files
                .par_iter()
                .filter_map(|path| self.analyze_file(root, path))
                .collect()
        } else {
            files
                .iter()
                .filter_map(|path| self.analyze_file(root, path))
                .collect()
        };

        Ok(RepositoryReport {
            root: root.to_string_lossy().to_string(),
            metrics: fold(&metrics),
            files: metrics,
        })
    }

    fn analyze_file(&self, root: &Path, path: &Path) -> Option<FileMetrics> {
        let content = match walk::read_source(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Skipping {}: {:#}", path.display(), e);
                return None;
            }
        };
        let relative = path.strip_prefix(root).unwrap_or(path);
        let metrics = self.extractor.extract(relative, &content);
        debug!(
            "{}: {} ({}, {} lines)",
            relative.display(),
            metrics.language_tag(),
            metrics.mode,
            metrics.lines_of_code
        );
        Some(metrics)
    }
}

fn check_root(root: &Path) -> Result<()> {
    let meta = match std::fs::metadata(root) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AnalysisError::RootNotFound(root.to_path_buf()))
        }
        Err(source) => {
            return Err(AnalysisError::RootUnreadable {
                path: root.to_path_buf(),
                source,
            })
        }
    };
    if !meta.is_dir() {
        return Err(AnalysisError::NotADirectory(root.to_path_buf()));
    }
    std::fs::read_dir(root).map_err(|source| AnalysisError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Fold per-file results into repository metrics.
pub fn fold(files: &[FileMetrics]) -> RepositoryMetrics {
    let mut total_lines = 0;
    let mut languages: BTreeMap<String, LanguageStats> = BTreeMap::new();
    let mut file_types: BTreeMap<String, usize> = BTreeMap::new();
    let mut patterns = PatternSummary::default();
    let mut tree_files = 0usize;
    let mut complexity_sum = 0f64;
    let mut maintainability_sum = 0f64;

    for file in files {
        total_lines += file.lines_of_code;

        let stats = languages.entry(file.language_tag().to_string()).or_default();
        stats.files += 1;
        stats.lines += file.lines_of_code;

        *file_types.entry(extension_key(&file.file_path)).or_default() += 1;

        if file.mode == AnalysisMode::Ast {
            tree_files += 1;
            complexity_sum += f64::from(file.complexity.cyclomatic_complexity);
            maintainability_sum += file.quality.maintainability_index;
        }

        for pattern in &file.patterns {
            match pattern.kind {
                PatternKind::DesignPattern => patterns.design_patterns += 1,
                PatternKind::AntiPattern => patterns.anti_patterns += 1,
                PatternKind::CodeSmell => patterns.code_smells += 1,
            }
            *patterns.by_name.entry(pattern.name.clone()).or_default() += 1;
        }
    }

    let total_files = files.len();
    let language_count = languages.len();
    let (avg_complexity, avg_maintainability) = if tree_files == 0 {
        (0.0, 0.0)
    } else {
        (
            complexity_sum / tree_files as f64,
            maintainability_sum / tree_files as f64,
        )
    };

    let complexity_score = score::complexity_score(total_files, total_lines, language_count);
    let largest_files = score::largest_files(files);
    let largest_lines = largest_files.first().map(|f| f.lines).unwrap_or(0);

    RepositoryMetrics {
        total_files,
        total_lines,
        hotspots: score::hotspots(&largest_files, &languages, complexity_score, total_lines),
        architecture_score: score::architecture_score(
            total_files,
            language_count,
            largest_lines,
            complexity_score,
        ),
        quality: score::repository_quality(total_files, total_lines, complexity_score),
        languages,
        file_types,
        largest_files,
        avg_complexity,
        avg_maintainability,
        complexity_score,
        patterns,
    }
}

/// `.ext` lowercased, or `(none)` for extensionless files.
fn extension_key(path: &str) -> String {
    Path::new(path)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_else(|| "(none)".to_string())
}
