//! Repository-level estimates: complexity score, architecture score,
//! hotspots and quality.
//!
//! These are coarse signals derived from size and language mix, not
//! measurements.

use std::collections::BTreeMap;

use crate::analysis::{FileMetrics, QualityMetrics};
use crate::language::UNKNOWN;

use super::{Hotspot, HotspotKind, HotspotSeverity, LanguageStats, LargestFile};

pub mod thresholds {
    /// Files above this many lines are hotspots.
    pub const LARGE_FILE_LINES: usize = 500;
    /// Files above this many lines are high-severity hotspots and lower the
    /// architecture score.
    pub const VERY_LARGE_FILE_LINES: usize = 1000;
    pub const HIGH_COMPLEXITY_SCORE: f64 = 0.8;
    pub const MONOLITH_FILES: usize = 100;
    pub const MAX_HOTSPOTS: usize = 10;
    pub const MAX_LARGEST_FILES: usize = 10;
    /// More languages than this lowers the architecture score.
    pub const MANY_LANGUAGES: usize = 5;
    /// Complexity score above which the architecture score is penalized.
    pub const COMPLEX_REPOSITORY: f64 = 0.7;
}

/// Blend of average file size, language count and total size, in `[0, 1]`.
pub fn complexity_score(total_files: usize, total_lines: usize, language_count: usize) -> f64 {
    if total_files == 0 {
        return 0.0;
    }
    let avg_lines = total_lines as f64 / total_files as f64;
    let size = (avg_lines / 200.0).min(1.0);
    let diversity = (language_count as f64 / 3.0).min(1.0);
    let volume = (total_lines as f64 / 5000.0).min(1.0);
    size * 0.5 + diversity * 0.3 + volume * 0.2
}

/// Starts from file count and is discounted for sprawl, giant files and
/// overall complexity. `[0, 100]`.
pub fn architecture_score(
    total_files: usize,
    language_count: usize,
    largest_file_lines: usize,
    complexity_score: f64,
) -> f64 {
    if total_files == 0 {
        return 0.0;
    }
    let mut score = (total_files as f64 * 2.0).min(100.0);
    if language_count > thresholds::MANY_LANGUAGES {
        score *= 0.8;
    }
    if largest_file_lines > thresholds::VERY_LARGE_FILE_LINES {
        score *= 0.7;
    }
    if complexity_score > thresholds::COMPLEX_REPOSITORY {
        score *= 0.6;
    }
    score.clamp(0.0, 100.0)
}

/// Top files by `lines_of_code`. Ties keep walk order.
pub fn largest_files(files: &[FileMetrics]) -> Vec<LargestFile> {
    let mut ranked: Vec<&FileMetrics> = files.iter().collect();
    ranked.sort_by(|a, b| b.lines_of_code.cmp(&a.lines_of_code));
    ranked
        .into_iter()
        .take(thresholds::MAX_LARGEST_FILES)
        .map(|f| LargestFile {
            path: f.file_path.clone(),
            lines: f.lines_of_code,
            language: f.language_tag().to_string(),
        })
        .collect()
}

pub fn hotspots(
    largest: &[LargestFile],
    languages: &BTreeMap<String, LanguageStats>,
    complexity_score: f64,
    total_lines: usize,
) -> Vec<Hotspot> {
    let mut spots = Vec::new();

    for file in largest {
        if file.lines > thresholds::LARGE_FILE_LINES {
            let severity = if file.lines > thresholds::VERY_LARGE_FILE_LINES {
                HotspotSeverity::High
            } else {
                HotspotSeverity::Medium
            };
            spots.push(Hotspot {
                kind: HotspotKind::LargeFile,
                file: file.path.clone(),
                lines: file.lines,
                severity,
                description: format!("Large file with {} lines", file.lines),
            });
        }
    }

    if complexity_score > thresholds::HIGH_COMPLEXITY_SCORE {
        spots.push(Hotspot {
            kind: HotspotKind::HighComplexity,
            file: "repository".to_string(),
            lines: total_lines,
            severity: HotspotSeverity::High,
            description: format!("High overall complexity: {:.2}", complexity_score),
        });
    }

    for (lang, stats) in languages {
        if lang != UNKNOWN && stats.files > thresholds::MONOLITH_FILES {
            spots.push(Hotspot {
                kind: HotspotKind::Monolith,
                file: format!("{} files", lang),
                lines: stats.lines,
                severity: HotspotSeverity::Medium,
                description: format!("Many {} files: {} files", lang, stats.files),
            });
        }
    }

    spots.truncate(thresholds::MAX_HOTSPOTS);
    spots
}

/// Repository-wide quality estimates.
pub fn repository_quality(total_files: usize, total_lines: usize, complexity_score: f64) -> QualityMetrics {
    if total_files == 0 {
        return QualityMetrics {
            maintainability_index: 0.0,
            technical_debt_ratio: 1.0,
            duplication_estimate: 0.0,
            test_coverage_estimate: 0.0,
        };
    }
    let lines = total_lines as f64;
    let files = total_files as f64;
    QualityMetrics {
        maintainability_index: (100.0 - complexity_score * 20.0 - lines / 1000.0).clamp(0.0, 100.0),
        technical_debt_ratio: (complexity_score * 0.1 + lines / 10000.0).min(1.0),
        duplication_estimate: (files / 1000.0).min(0.5),
        test_coverage_estimate: (files / 100.0).min(0.9),
    }
}
