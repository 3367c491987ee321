//! Line-oriented pattern rules.

use crate::analysis::heuristic::HeuristicRules;
use crate::language::Language;

use super::rules::{self, confidence};
use super::{CodePattern, PatternKind};

/// What backs a file's analysis; textual findings are weighted accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    SyntaxTree,
    LinesOnly,
}

/// Singleton, Factory, Observer and Dead Code by case-insensitive keyword.
pub fn detect_textual(
    file: &str,
    language: Language,
    content: &str,
    evidence: Evidence,
) -> Vec<CodePattern> {
    let singleton_confidence = match evidence {
        Evidence::SyntaxTree => confidence::SINGLETON_TREE,
        Evidence::LinesOnly => confidence::SINGLETON_LINES,
    };

    let mut patterns = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let lower = line.to_lowercase();

        let python_new = language == Language::Python && line.contains("__new__") && line.contains("cls");
        if python_new || lower.contains("singleton") {
            patterns.push(CodePattern::new(
                PatternKind::DesignPattern,
                rules::SINGLETON,
                singleton_confidence,
                file,
                line_no,
            ));
        }

        if lower.contains("factory") && lower.contains("create") {
            patterns.push(CodePattern::new(
                PatternKind::DesignPattern,
                rules::FACTORY,
                confidence::FACTORY,
                file,
                line_no,
            ));
        }

        if lower.contains("observer") || lower.contains("subscribe") {
            patterns.push(CodePattern::new(
                PatternKind::DesignPattern,
                rules::OBSERVER,
                confidence::OBSERVER,
                file,
                line_no,
            ));
        }

        if lower.contains("unused") || lower.contains("deprecated") {
            patterns.push(CodePattern::new(
                PatternKind::CodeSmell,
                rules::DEAD_CODE,
                confidence::DEAD_CODE,
                file,
                line_no,
            ));
        }
    }
    patterns
}

/// God Class and Long Method from indentation when there is no tree.
///
/// A class or function line owns every following line that is blank or
/// indented deeper than it.
pub fn detect_structural(file: &str, table: &HeuristicRules, content: &str) -> Vec<CodePattern> {
    let lines: Vec<&str> = content.lines().collect();
    let mut patterns = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        if table.is_class(line) {
            let extent = block_extent(&lines, idx);
            let methods = lines[idx + 1..idx + 1 + extent]
                .iter()
                .filter(|l| table.is_function(l))
                .count();
            if methods > rules::GOD_CLASS_MAX_METHODS {
                patterns.push(CodePattern::new(
                    PatternKind::AntiPattern,
                    rules::GOD_CLASS,
                    confidence::GOD_CLASS_LINES,
                    file,
                    idx + 1,
                ));
            }
        }

        if table.is_function(line) && block_extent(&lines, idx) > rules::LONG_METHOD_MAX_LINES {
            patterns.push(CodePattern::new(
                PatternKind::AntiPattern,
                rules::LONG_METHOD,
                confidence::LONG_METHOD_LINES,
                file,
                idx + 1,
            ));
        }
    }

    patterns
}

fn indentation(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Number of lines after `start` belonging to its indented block.
fn block_extent(lines: &[&str], start: usize) -> usize {
    let base = indentation(lines[start]);
    lines[start + 1..]
        .iter()
        .take_while(|l| l.trim().is_empty() || indentation(l) > base)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::heuristic;

    fn god_class_source(methods: usize) -> String {
        let mut src = String::from("class Service:\n");
        for i in 0..methods {
            src.push_str(&format!("    def m{}(self):\n        pass\n\n", i));
        }
        src.push_str("x = 1\n");
        src
    }

    #[test]
    fn test_textual_keywords() {
        let src = "class ConfigSingleton:\n    def __new__(cls):\n        pass\nwidget_factory.create()\nbus.subscribe(handler)\n# deprecated helper\nplain = 1\n";
        let found = detect_textual("cfg.py", Language::Python, src, Evidence::LinesOnly);
        let names: Vec<(&str, usize)> = found.iter().map(|p| (p.name.as_str(), p.line)).collect();
        assert_eq!(
            names,
            vec![
                ("Singleton", 1),
                ("Singleton", 2),
                ("Factory", 4),
                ("Observer", 5),
                ("Dead Code", 6),
            ]
        );
        assert_eq!(found[0].confidence, 0.7);
        assert_eq!(found[3].kind, PatternKind::DesignPattern);
        assert_eq!(found[4].kind, PatternKind::CodeSmell);
    }

    #[test]
    fn test_singleton_confidence_depends_on_evidence() {
        let found = detect_textual("a.js", Language::JavaScript, "const singleton = {};", Evidence::SyntaxTree);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].confidence, 0.6);
    }

    #[test]
    fn test_dunder_new_only_counts_for_python() {
        let found = detect_textual("a.rb", Language::Ruby, "def __new__(cls)", Evidence::LinesOnly);
        assert!(found.is_empty());
    }

    #[test]
    fn test_structural_god_class() {
        let table = heuristic::rules_for(Language::Python);
        assert!(detect_structural("s.py", table, &god_class_source(20)).is_empty());

        let found = detect_structural("s.py", table, &god_class_source(21));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "God Class");
        assert_eq!(found[0].line, 1);
        assert_eq!(found[0].confidence, 0.8);
    }

    #[test]
    fn test_structural_long_method() {
        let table = heuristic::rules_for(Language::Python);
        let mut src = String::from("def long():\n");
        for i in 0..51 {
            src.push_str(&format!("    v{} = {}\n", i, i));
        }
        src.push_str("def short():\n    return 1\n");

        let found = detect_structural("l.py", table, &src);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Long Method");
        assert_eq!(found[0].line, 1);
        assert_eq!(found[0].confidence, 0.7);
    }

    #[test]
    fn test_block_extent() {
        let lines = ["def f():", "    a", "", "    b", "c"];
        assert_eq!(block_extent(&lines, 0), 3);
        assert_eq!(block_extent(&lines, 4), 0);
    }
}
