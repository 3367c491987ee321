//! Output formatting for analysis results.
//!
//! Supports three output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption
//! - YAML: the same structure as JSON

use colored::*;
use serde::{Deserialize, Serialize};

use crate::aggregate::{Hotspot, HotspotSeverity, RepositoryMetrics, RepositoryReport};
use crate::analysis::{AnalysisMode, FileMetrics};

/// Output formats accepted by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(OutputFormat::Pretty),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "invalid format {:?}, must be 'pretty', 'json', or 'yaml'",
                s
            )),
        }
    }
}

// =============================================================================
// JSON / YAML
// =============================================================================

/// Serialized report envelope.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub metrics: RepositoryMetrics,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileMetrics>,
}

impl JsonReport {
    pub fn new(report: &RepositoryReport, include_files: bool) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            path: report.root.clone(),
            metrics: report.metrics.clone(),
            files: if include_files {
                report.files.clone()
            } else {
                Vec::new()
            },
        }
    }
}

pub fn render_json(report: &RepositoryReport, include_files: bool) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(report, include_files))?)
}

pub fn render_yaml(report: &RepositoryReport, include_files: bool) -> anyhow::Result<String> {
    Ok(serde_yaml::to_string(&JsonReport::new(report, include_files))?)
}

/// Write a repository report in the requested format to stdout.
pub fn write_report(
    report: &RepositoryReport,
    format: OutputFormat,
    include_files: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", render_json(report, include_files)?),
        OutputFormat::Yaml => print!("{}", render_yaml(report, include_files)?),
        OutputFormat::Pretty => write_pretty(report, include_files),
    }
    Ok(())
}

/// Write a single file's metrics in the requested format to stdout.
pub fn write_file(metrics: &FileMetrics, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(metrics)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(metrics)?),
        OutputFormat::Pretty => {
            write_header(&metrics.file_path);
            write_file_detail(metrics);
            println!();
        }
    }
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

pub fn write_pretty(report: &RepositoryReport, show_files: bool) {
    let m = &report.metrics;

    write_header(&report.root);

    println!(
        "  Files: {}  Lines: {}  Languages: {}",
        m.total_files.to_string().bold(),
        m.total_lines.to_string().bold(),
        m.languages.len().to_string().bold()
    );
    print!("  Architecture: ");
    write_colored_score(m.architecture_score);
    print!("  Maintainability: ");
    write_colored_score(m.avg_maintainability);
    println!(
        "  {}",
        format!(
            "(complexity score {:.2}, avg cyclomatic {:.2})",
            m.complexity_score, m.avg_complexity
        )
        .dimmed()
    );
    println!();

    if !m.languages.is_empty() {
        println!("  {}", "Languages:".bold());
        for (lang, stats) in &m.languages {
            println!(
                "    {:<14} {:>6} files {:>9} lines",
                lang, stats.files, stats.lines
            );
        }
        println!();
    }

    if !m.largest_files.is_empty() {
        println!("  {}", "Largest files:".bold());
        for f in &m.largest_files {
            println!(
                "    {:>7}  {} {}",
                f.lines,
                f.path.blue(),
                format!("({})", f.language).dimmed()
            );
        }
        println!();
    }

    if !m.hotspots.is_empty() {
        write_hotspots(&m.hotspots);
        println!();
    }

    let p = &m.patterns;
    if !p.by_name.is_empty() {
        println!(
            "  {} {}",
            "Patterns:".bold(),
            format!(
                "({} design, {} anti-pattern, {} smell)",
                p.design_patterns, p.anti_patterns, p.code_smells
            )
            .dimmed()
        );
        let mut names: Vec<(&String, &usize)> = p.by_name.iter().collect();
        names.sort_by(|a, b| b.1.cmp(a.1));
        for (name, count) in names {
            println!("    {:<14} {:>6}", name, count);
        }
        println!();
    }

    let q = &m.quality;
    println!("  {}", "Estimates:".bold());
    println!(
        "    maintainability {:.1}  debt {:.2}  duplication {:.2}  coverage {:.2}",
        q.maintainability_index,
        q.technical_debt_ratio,
        q.duplication_estimate,
        q.test_coverage_estimate
    );
    println!();

    if show_files {
        println!("  {} ({}):", "Files".bold(), report.files.len());
        println!();
        for f in &report.files {
            write_file_detail(f);
        }
    }
}

fn write_header(path: &str) {
    println!();
    print!("  ");
    print!("{}", "repolens".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();
    print!("  {}", "Analyzing: ".dimmed());
    println!("{}", path);
    println!();
}

fn write_colored_score(s: f64) {
    let text = format!("{:.1}", s);
    match s {
        s if s >= 80.0 => print!("{}", text.green().bold()),
        s if s >= 60.0 => print!("{}", text.green()),
        s if s >= 40.0 => print!("{}", text.yellow()),
        _ => print!("{}", text.red()),
    }
}

fn write_hotspots(hotspots: &[Hotspot]) {
    println!("  {} ({}):", "Hotspots".bold(), hotspots.len());
    for h in hotspots {
        match h.severity {
            HotspotSeverity::High => print!("    {} ", "HIGH".red()),
            HotspotSeverity::Medium => print!("    {} ", "MED ".yellow()),
        }
        println!("{}  {}", h.file.blue(), h.description.dimmed());
    }
}

fn write_file_detail(f: &FileMetrics) {
    print!("    {}", f.file_path.blue());
    print!("  {}", f.language_tag());
    if f.mode != AnalysisMode::Ast {
        print!(" {}", format!("[{}]", f.mode).dimmed());
    }
    println!();
    println!(
        "        lines {}  cyclomatic {}  cognitive {}  nesting {}  MI {:.1}",
        f.lines_of_code,
        f.complexity.cyclomatic_complexity,
        f.complexity.cognitive_complexity,
        f.complexity.nesting_depth,
        f.quality.maintainability_index
    );
    println!(
        "        {}",
        format!(
            "{} functions, {} classes, {} imports ({} internal)",
            f.structure.functions,
            f.structure.classes,
            f.structure.imports,
            f.dependencies.internal_deps.len()
        )
        .dimmed()
    );
    for p in &f.patterns {
        println!(
            "        {} {} {}",
            format!(":{}", p.line).dimmed(),
            p.name,
            format!("({}, {:.1})", p.kind, p.confidence).dimmed()
        );
    }
}
