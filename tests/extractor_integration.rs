//! Integration tests for per-file extraction.
//!
//! These exercise the public `Extractor` against inline sources and the
//! fixture repository under `testdata/sample`.

use std::path::{Path, PathBuf};

use repolens::analysis::AnalysisMode;
use repolens::{Extractor, FileMetrics, GrammarRegistry, Language, PatternKind};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn fixture(rel: &str) -> String {
    std::fs::read_to_string(testdata_path().join("sample").join(rel)).expect("fixture should exist")
}

fn heuristic_extractor() -> Extractor {
    Extractor::with_registry(GrammarRegistry::heuristic_only())
}

fn god_class_source(methods: usize) -> String {
    let mut src = String::from("class Service:\n");
    for i in 0..methods {
        src.push_str(&format!("    def m{}(self):\n        pass\n", i));
    }
    src
}

fn pattern_lines(metrics: &FileMetrics, name: &str) -> Vec<usize> {
    metrics
        .patterns
        .iter()
        .filter(|p| p.name == name)
        .map(|p| p.line)
        .collect()
}

fn assert_invariants(metrics: &FileMetrics) {
    assert!(metrics.complexity.cyclomatic_complexity >= 1, "{}", metrics.file_path);
    let mi = metrics.quality.maintainability_index;
    assert!((0.0..=100.0).contains(&mi), "{}: MI {}", metrics.file_path, mi);
    let debt = metrics.quality.technical_debt_ratio;
    assert!((0.0..=1.0).contains(&debt), "{}: debt {}", metrics.file_path, debt);
    for p in &metrics.patterns {
        assert!((0.0..=1.0).contains(&p.confidence));
        assert!(p.line >= 1);
        assert_eq!(p.file, metrics.file_path);
    }
    let lines: Vec<usize> = metrics.patterns.iter().map(|p| p.line).collect();
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted, "patterns ordered by line");
    assert_eq!(
        metrics.dependencies.internal_deps.len() + metrics.dependencies.external_deps.len(),
        metrics.dependencies.imports.len()
    );
}

// =============================================================================
// Syntax-tree mode
// =============================================================================

#[test]
#[cfg(feature = "tree-sitter")]
fn test_single_branch_function() {
    let metrics = Extractor::new().extract(
        Path::new("f.py"),
        "def f():\n    if True:\n        pass\n",
    );

    assert_eq!(metrics.mode, AnalysisMode::Ast);
    assert_eq!(metrics.language, Some(Language::Python));
    assert_eq!(metrics.structure.functions, 1);
    assert_eq!(metrics.complexity.cyclomatic_complexity, 2);
    assert_eq!(metrics.complexity.cognitive_complexity, 2);
    assert_eq!(metrics.lines_of_code, 3);
    assert!(metrics.patterns.is_empty());
    assert_invariants(&metrics);
}

#[test]
#[cfg(feature = "tree-sitter")]
fn test_god_class_from_tree() {
    let extractor = Extractor::new();

    let ok = extractor.extract(Path::new("svc.py"), &god_class_source(20));
    assert!(pattern_lines(&ok, "God Class").is_empty());

    let god = extractor.extract(Path::new("svc.py"), &god_class_source(21));
    assert_eq!(god.mode, AnalysisMode::Ast);
    assert_eq!(god.structure.classes, 1);
    assert_eq!(god.structure.functions, 21);

    let found: Vec<_> = god.patterns.iter().filter(|p| p.name == "God Class").collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].kind, PatternKind::AntiPattern);
    assert_eq!(found[0].confidence, 0.7);
    assert_eq!(found[0].line, 1);
}

#[test]
#[cfg(feature = "tree-sitter")]
fn test_long_method_from_tree() {
    let mut src = String::from("def long():\n");
    for i in 0..51 {
        src.push_str(&format!("    v{} = {}\n", i, i));
    }
    src.push_str("\ndef short():\n    return 1\n");

    let metrics = Extractor::new().extract(Path::new("long.py"), &src);
    let found: Vec<_> = metrics.patterns.iter().filter(|p| p.name == "Long Method").collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].line, 1);
    assert_eq!(found[0].confidence, 0.8);
}

#[test]
#[cfg(feature = "tree-sitter")]
fn test_python_fixture() {
    let metrics = Extractor::new().extract(Path::new("pkg/service.py"), &fixture("pkg/service.py"));

    assert_eq!(metrics.mode, AnalysisMode::Ast);
    assert_eq!(metrics.file_path, "pkg/service.py");
    assert_eq!(metrics.structure.classes, 1);
    assert_eq!(metrics.structure.functions, 3);
    assert_eq!(
        metrics.dependencies.imports,
        vec!["import os", "import json", "from .models import Account"]
    );
    assert_eq!(metrics.dependencies.internal_deps, vec!["from .models import Account"]);
    assert!(metrics.complexity.cyclomatic_complexity > 3);
    assert!(metrics.complexity.nesting_depth >= 3);

    let singleton = pattern_lines(&metrics, "Singleton");
    assert!(singleton.contains(&9), "singleton lines: {:?}", singleton);
    assert!(metrics
        .patterns
        .iter()
        .filter(|p| p.name == "Singleton")
        .all(|p| p.confidence == 0.6));
    assert_invariants(&metrics);
}

#[test]
#[cfg(feature = "tree-sitter")]
fn test_javascript_fixture() {
    let metrics = Extractor::new().extract(Path::new("web/app.js"), &fixture("web/app.js"));

    assert_eq!(metrics.mode, AnalysisMode::Ast);
    assert_eq!(metrics.language_tag(), "javascript");
    assert_eq!(metrics.structure.imports, 2);
    assert!(metrics.structure.comments >= 1);
    assert_eq!(metrics.dependencies.internal_deps.len(), 1);
    assert!(metrics.dependencies.internal_deps[0].contains("./format.js"));
    assert_eq!(metrics.dependencies.external_deps.len(), 1);
    assert_eq!(pattern_lines(&metrics, "Observer"), vec![4, 7]);
    assert_invariants(&metrics);
}

// =============================================================================
// Line-heuristic mode
// =============================================================================

#[test]
fn test_god_class_from_lines() {
    let metrics = heuristic_extractor().extract(Path::new("svc.py"), &god_class_source(21));

    assert_eq!(metrics.mode, AnalysisMode::Heuristic);
    assert_eq!(metrics.structure.functions, 21);
    assert_eq!(metrics.complexity.cyclomatic_complexity, 1);
    assert_eq!(metrics.quality.maintainability_index, 50.0);

    let found: Vec<_> = metrics.patterns.iter().filter(|p| p.name == "God Class").collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].confidence, 0.8);
    assert_eq!(found[0].line, 1);
}

#[test]
fn test_heuristic_python_fixture() {
    let metrics = heuristic_extractor().extract(Path::new("pkg/service.py"), &fixture("pkg/service.py"));

    assert_eq!(metrics.mode, AnalysisMode::Heuristic);
    assert_eq!(metrics.structure.classes, 1);
    assert_eq!(metrics.structure.functions, 3);
    assert_eq!(metrics.structure.imports, 3);
    assert_eq!(metrics.dependencies.external_deps, vec!["import os", "import json"]);
    assert!(pattern_lines(&metrics, "Singleton").contains(&9));
    assert!(metrics
        .patterns
        .iter()
        .filter(|p| p.name == "Singleton")
        .all(|p| p.confidence == 0.7));
    assert_invariants(&metrics);
}

#[test]
fn test_language_without_grammar() {
    let src = "package Greeter;\nuse strict;\nsub hello {\n    print \"hi\";\n}\n1;\n";
    let metrics = Extractor::new().extract(Path::new("bin/greeter.pl"), src);

    assert_eq!(metrics.language, Some(Language::Perl));
    assert_eq!(metrics.mode, AnalysisMode::Heuristic);
    assert_eq!(metrics.structure.functions, 1);
    assert_eq!(metrics.dependencies.imports, vec!["use strict;"]);
    assert_invariants(&metrics);
}

// =============================================================================
// Unrecognized files
// =============================================================================

#[test]
fn test_unknown_extension_gets_line_counts_only() {
    let line = "def maybe_code():  # class import singleton\n";
    let content = line.repeat(10 * 1024 / line.len() + 1);
    assert!(content.len() >= 10 * 1024);

    let metrics = Extractor::new().extract(Path::new("blob.xyz"), &content);

    assert_eq!(metrics.language_tag(), "unknown");
    assert_eq!(metrics.mode, AnalysisMode::Basic);
    assert_eq!(metrics.structure.functions, 0);
    assert_eq!(metrics.structure.classes, 0);
    assert_eq!(metrics.structure.imports, 0);
    assert_eq!(metrics.structure.comments, 0);
    assert!(metrics.patterns.is_empty());
    assert_eq!(metrics.lines.total, content.lines().count());
    assert_invariants(&metrics);
}

#[test]
fn test_empty_file() {
    for extractor in [Extractor::new(), heuristic_extractor()] {
        let metrics = extractor.extract(Path::new("empty.py"), "");
        assert_eq!(metrics.lines.total, 0);
        assert_eq!(metrics.lines_of_code, 0);
        assert_invariants(&metrics);
    }
}

#[test]
fn test_file_metrics_serialization() {
    let metrics = heuristic_extractor().extract(Path::new("pkg/models.py"), &fixture("pkg/models.py"));
    let json: serde_json::Value = serde_json::to_value(&metrics).unwrap();

    assert_eq!(json["file_path"], "pkg/models.py");
    assert_eq!(json["language"], "python");
    assert_eq!(json["mode"], "heuristic");
    assert_eq!(json["complexity"]["cyclomatic_complexity"], 1);
    assert_eq!(json["quality"]["technical_debt_ratio"], 0.5);
    assert!(json["dependencies"]["imports"].as_array().unwrap().is_empty());

    let unknown = heuristic_extractor().extract(Path::new("notes.xyz"), "x\n");
    let json: serde_json::Value = serde_json::to_value(&unknown).unwrap();
    assert_eq!(json["language"], "unknown");
    assert_eq!(json["mode"], "basic");
}
