//! Command-line interface for repolens.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::aggregate::{walk, Aggregator};
use crate::analysis::Extractor;
use crate::grammar::GrammarRegistry;
use crate::language::Language;
use crate::report::{self, OutputFormat};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Static code metrics for source trees.
///
/// Repolens walks a checked-out repository and reports per-file complexity,
/// maintainability and dependency metrics, heuristic design- and
/// anti-pattern findings, and repository-wide aggregates such as language
/// mix, hotspots and an architecture score.
#[derive(Parser)]
#[command(name = "repolens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze every source file under a directory
    Analyze(AnalyzeArgs),
    /// Analyze a single file
    File(FileArgs),
    /// List recognized languages and how each is analyzed
    Languages(LanguagesArgs),
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Repository root
    pub path: PathBuf,

    /// Output format: pretty, json, or yaml
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Include per-file metrics in the output
    #[arg(long)]
    pub files: bool,

    /// Extract files on one thread instead of the worker pool
    #[arg(long)]
    pub sequential: bool,

    /// Skip tree-sitter grammars and analyze every file with line heuristics
    #[arg(long)]
    pub heuristic_only: bool,
}

/// Arguments for the file command.
#[derive(Parser)]
pub struct FileArgs {
    /// File to analyze
    pub path: PathBuf,

    /// Output format: pretty, json, or yaml
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

/// Arguments for the languages command.
#[derive(Parser)]
pub struct LanguagesArgs {
    /// Only list languages with a syntax-tree grammar
    #[arg(long)]
    pub ast_only: bool,
}

fn parse_format(raw: &str) -> Option<OutputFormat> {
    match raw.parse() {
        Ok(format) => Some(format),
        Err(e) => {
            eprintln!("Error: {}", e);
            None
        }
    }
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    let Some(format) = parse_format(&args.format) else {
        return Ok(EXIT_ERROR);
    };

    let extractor = if args.heuristic_only {
        Extractor::with_registry(GrammarRegistry::heuristic_only())
    } else {
        Extractor::new()
    };

    let report = match Aggregator::new(&extractor)
        .parallel(!args.sequential)
        .aggregate(&args.path)
    {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };

    if report.metrics.total_files == 0 {
        eprintln!("Warning: no files to analyze");
    }

    report::write_report(&report, format, args.files)?;
    Ok(EXIT_SUCCESS)
}

/// Run the file command.
pub fn run_file(args: &FileArgs) -> anyhow::Result<i32> {
    let Some(format) = parse_format(&args.format) else {
        return Ok(EXIT_ERROR);
    };

    let content = match walk::read_source(&args.path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return Ok(EXIT_ERROR);
        }
    };

    let metrics = Extractor::new().extract(&args.path, &content);
    report::write_file(&metrics, format)?;
    Ok(EXIT_SUCCESS)
}

/// Run the languages command.
pub fn run_languages(args: &LanguagesArgs) -> anyhow::Result<i32> {
    let registry = GrammarRegistry::new();

    println!("Recognized languages:");
    println!();
    for lang in Language::ALL {
        let supported = registry.supports(lang);
        if args.ast_only && !supported {
            continue;
        }
        let mode = if supported { "ast" } else { "heuristic" };
        println!("  {:<14} {}", lang.as_str(), mode);
    }
    println!();
    println!("Files not matching any language get line counts only.");

    Ok(EXIT_SUCCESS)
}
