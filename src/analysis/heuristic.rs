//! Line-table structure counting for languages without a grammar.
//!
//! Each language gets a small table of prefix and substring matchers. Lines
//! are trimmed before matching; comment lines are never counted as functions
//! or classes.

use crate::language::Language;

use super::StructureCounts;

/// A predicate over one trimmed source line.
#[derive(Debug)]
pub enum LineMatch {
    Never,
    StartsWith(&'static [&'static str]),
    /// Any of the needles occurs.
    Contains(&'static [&'static str]),
    /// Every needle occurs.
    ContainsAll(&'static [&'static str]),
    Any(&'static [LineMatch]),
}

impl LineMatch {
    pub fn matches(&self, line: &str) -> bool {
        match self {
            LineMatch::Never => false,
            LineMatch::StartsWith(prefixes) => prefixes.iter().any(|p| line.starts_with(p)),
            LineMatch::Contains(needles) => needles.iter().any(|n| line.contains(n)),
            LineMatch::ContainsAll(needles) => needles.iter().all(|n| line.contains(n)),
            LineMatch::Any(matchers) => matchers.iter().any(|m| m.matches(line)),
        }
    }
}

/// Line tables for one language.
#[derive(Debug)]
pub struct HeuristicRules {
    pub functions: LineMatch,
    pub classes: LineMatch,
    pub imports: LineMatch,
    pub comments: LineMatch,
    /// Match against the uppercased line (SQL keywords).
    pub upper_case: bool,
}

impl HeuristicRules {
    fn normalize<'a>(&self, line: &'a str) -> std::borrow::Cow<'a, str> {
        let trimmed = line.trim();
        if self.upper_case {
            std::borrow::Cow::Owned(trimmed.to_uppercase())
        } else {
            std::borrow::Cow::Borrowed(trimmed)
        }
    }

    pub fn is_comment(&self, line: &str) -> bool {
        self.comments.matches(&self.normalize(line))
    }

    pub fn is_function(&self, line: &str) -> bool {
        let line = self.normalize(line);
        !self.comments.matches(&line) && self.functions.matches(&line)
    }

    pub fn is_class(&self, line: &str) -> bool {
        let line = self.normalize(line);
        !self.comments.matches(&line) && self.classes.matches(&line)
    }

    pub fn is_import(&self, line: &str) -> bool {
        self.imports.matches(&self.normalize(line))
    }
}

/// Result of a heuristic scan.
#[derive(Debug, Default)]
pub struct HeuristicScan {
    pub structure: StructureCounts,
    /// Trimmed import lines in source order.
    pub imports: Vec<String>,
}

/// Count structure with the language's line tables.
pub fn scan(rules: &HeuristicRules, content: &str) -> HeuristicScan {
    let mut out = HeuristicScan::default();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let normalized = rules.normalize(trimmed);
        if rules.comments.matches(&normalized) {
            out.structure.comments += 1;
            continue;
        }
        if rules.functions.matches(&normalized) {
            out.structure.functions += 1;
        }
        if rules.classes.matches(&normalized) {
            out.structure.classes += 1;
        }
        if rules.imports.matches(&normalized) {
            out.structure.imports += 1;
            out.imports.push(trimmed.to_string());
        }
    }
    out
}

const HASH_COMMENT: LineMatch = LineMatch::StartsWith(&["#"]);
const C_COMMENT: LineMatch = LineMatch::StartsWith(&["//", "/*"]);

static PYTHON: HeuristicRules = HeuristicRules {
    functions: LineMatch::StartsWith(&["def ", "async def "]),
    classes: LineMatch::StartsWith(&["class "]),
    imports: LineMatch::StartsWith(&["import ", "from "]),
    comments: HASH_COMMENT,
    upper_case: false,
};

static JAVASCRIPT: HeuristicRules = HeuristicRules {
    functions: LineMatch::Any(&[
        LineMatch::Contains(&["function ", "=>"]),
        LineMatch::ContainsAll(&["(", ")", "{"]),
    ]),
    classes: LineMatch::Contains(&["class "]),
    imports: LineMatch::Any(&[
        LineMatch::StartsWith(&["import "]),
        LineMatch::Contains(&["require("]),
    ]),
    comments: C_COMMENT,
    upper_case: false,
};

static JAVA: HeuristicRules = HeuristicRules {
    functions: LineMatch::ContainsAll(&["public ", "(", ")"]),
    classes: LineMatch::Contains(&["class "]),
    imports: LineMatch::StartsWith(&["import "]),
    comments: C_COMMENT,
    upper_case: false,
};

static CPP: HeuristicRules = HeuristicRules {
    functions: LineMatch::ContainsAll(&["{", "(", ")"]),
    classes: LineMatch::Contains(&["class "]),
    imports: LineMatch::StartsWith(&["#include"]),
    comments: C_COMMENT,
    upper_case: false,
};

static C: HeuristicRules = HeuristicRules {
    functions: LineMatch::ContainsAll(&["{", "(", ")"]),
    classes: LineMatch::Never,
    imports: LineMatch::StartsWith(&["#include"]),
    comments: C_COMMENT,
    upper_case: false,
};

static RUST: HeuristicRules = HeuristicRules {
    functions: LineMatch::Contains(&["fn "]),
    classes: LineMatch::Contains(&["struct "]),
    imports: LineMatch::StartsWith(&["use "]),
    comments: LineMatch::StartsWith(&["//"]),
    upper_case: false,
};

static GO: HeuristicRules = HeuristicRules {
    functions: LineMatch::StartsWith(&["func "]),
    classes: LineMatch::StartsWith(&["type "]),
    imports: LineMatch::StartsWith(&["import "]),
    comments: LineMatch::StartsWith(&["//"]),
    upper_case: false,
};

static PHP: HeuristicRules = HeuristicRules {
    functions: LineMatch::Contains(&["function "]),
    classes: LineMatch::Contains(&["class "]),
    imports: LineMatch::StartsWith(&["use ", "require", "include"]),
    comments: LineMatch::StartsWith(&["//", "/*", "#"]),
    upper_case: false,
};

static RUBY: HeuristicRules = HeuristicRules {
    functions: LineMatch::StartsWith(&["def "]),
    classes: LineMatch::StartsWith(&["class ", "module "]),
    imports: LineMatch::StartsWith(&["require", "load "]),
    comments: HASH_COMMENT,
    upper_case: false,
};

static CSHARP: HeuristicRules = HeuristicRules {
    functions: LineMatch::Any(&[
        LineMatch::ContainsAll(&["public ", "(", ")"]),
        LineMatch::ContainsAll(&["private ", "(", ")"]),
        LineMatch::ContainsAll(&["protected ", "(", ")"]),
    ]),
    classes: LineMatch::Contains(&["class ", "interface "]),
    imports: LineMatch::StartsWith(&["using "]),
    comments: C_COMMENT,
    upper_case: false,
};

static SWIFT: HeuristicRules = HeuristicRules {
    functions: LineMatch::Contains(&["func "]),
    classes: LineMatch::Contains(&["class ", "struct ", "protocol "]),
    imports: LineMatch::StartsWith(&["import "]),
    comments: C_COMMENT,
    upper_case: false,
};

static KOTLIN: HeuristicRules = HeuristicRules {
    functions: LineMatch::Contains(&["fun "]),
    classes: LineMatch::Contains(&["class ", "object "]),
    imports: LineMatch::StartsWith(&["import "]),
    comments: C_COMMENT,
    upper_case: false,
};

static SCALA: HeuristicRules = HeuristicRules {
    functions: LineMatch::Contains(&["def "]),
    classes: LineMatch::Contains(&["class ", "object ", "trait "]),
    imports: LineMatch::StartsWith(&["import "]),
    comments: C_COMMENT,
    upper_case: false,
};

static SHELL: HeuristicRules = HeuristicRules {
    functions: LineMatch::Any(&[
        LineMatch::StartsWith(&["function "]),
        LineMatch::Contains(&["() {", "(){"]),
    ]),
    classes: LineMatch::Never,
    imports: LineMatch::StartsWith(&["source ", ". "]),
    comments: HASH_COMMENT,
    upper_case: false,
};

static CMAKE: HeuristicRules = HeuristicRules {
    functions: LineMatch::ContainsAll(&["(", ")"]),
    classes: LineMatch::Never,
    imports: LineMatch::StartsWith(&["find_package", "include", "add_subdirectory"]),
    comments: HASH_COMMENT,
    upper_case: false,
};

static MAKEFILE: HeuristicRules = HeuristicRules {
    functions: LineMatch::Contains(&[":"]),
    classes: LineMatch::Never,
    imports: LineMatch::StartsWith(&["include "]),
    comments: HASH_COMMENT,
    upper_case: false,
};

static DOCKERFILE: HeuristicRules = HeuristicRules {
    functions: LineMatch::StartsWith(&["RUN", "CMD", "ENTRYPOINT"]),
    classes: LineMatch::Never,
    imports: LineMatch::StartsWith(&["FROM", "COPY", "ADD"]),
    comments: HASH_COMMENT,
    upper_case: false,
};

static HTML: HeuristicRules = HeuristicRules {
    functions: LineMatch::Contains(&["<script", "function"]),
    classes: LineMatch::Contains(&["class="]),
    imports: LineMatch::Contains(&["<link", "<script", "<style"]),
    comments: LineMatch::StartsWith(&["<!--", "//"]),
    upper_case: false,
};

static XML: HeuristicRules = HeuristicRules {
    functions: LineMatch::Never,
    classes: LineMatch::Never,
    imports: LineMatch::Never,
    comments: LineMatch::StartsWith(&["<!--"]),
    upper_case: false,
};

static SQL: HeuristicRules = HeuristicRules {
    functions: LineMatch::Contains(&["CREATE FUNCTION", "CREATE PROCEDURE"]),
    classes: LineMatch::Never,
    imports: LineMatch::StartsWith(&["USE ", "IMPORT ", "INCLUDE "]),
    comments: LineMatch::StartsWith(&["--", "/*"]),
    upper_case: true,
};

static R: HeuristicRules = HeuristicRules {
    functions: LineMatch::Contains(&["<- function", "= function"]),
    classes: LineMatch::Contains(&["setClass(", "R6Class("]),
    imports: LineMatch::StartsWith(&["library(", "require(", "source("]),
    comments: HASH_COMMENT,
    upper_case: false,
};

static MATLAB: HeuristicRules = HeuristicRules {
    functions: LineMatch::StartsWith(&["function "]),
    classes: LineMatch::StartsWith(&["classdef "]),
    imports: LineMatch::StartsWith(&["import "]),
    comments: LineMatch::StartsWith(&["%"]),
    upper_case: false,
};

static PERL: HeuristicRules = HeuristicRules {
    functions: LineMatch::StartsWith(&["sub "]),
    classes: LineMatch::StartsWith(&["package "]),
    imports: LineMatch::StartsWith(&["use ", "require "]),
    comments: HASH_COMMENT,
    upper_case: false,
};

static LUA: HeuristicRules = HeuristicRules {
    functions: LineMatch::Contains(&["function "]),
    classes: LineMatch::Never,
    imports: LineMatch::Contains(&["require"]),
    comments: LineMatch::StartsWith(&["--"]),
    upper_case: false,
};

static VIM: HeuristicRules = HeuristicRules {
    functions: LineMatch::StartsWith(&["function", "fun "]),
    classes: LineMatch::Never,
    imports: LineMatch::StartsWith(&["source ", "runtime "]),
    comments: LineMatch::StartsWith(&["\""]),
    upper_case: false,
};

static ELISP: HeuristicRules = HeuristicRules {
    functions: LineMatch::StartsWith(&["(defun ", "(defmacro "]),
    classes: LineMatch::StartsWith(&["(defclass "]),
    imports: LineMatch::StartsWith(&["(require "]),
    comments: LineMatch::StartsWith(&[";"]),
    upper_case: false,
};

/// Line tables for a language. Every classified language has one.
pub fn rules_for(language: Language) -> &'static HeuristicRules {
    match language {
        Language::Python => &PYTHON,
        Language::JavaScript | Language::TypeScript => &JAVASCRIPT,
        Language::Java => &JAVA,
        Language::Cpp => &CPP,
        Language::C => &C,
        Language::Rust => &RUST,
        Language::Go => &GO,
        Language::Php => &PHP,
        Language::Ruby => &RUBY,
        Language::CSharp => &CSHARP,
        Language::Swift => &SWIFT,
        Language::Kotlin => &KOTLIN,
        Language::Scala => &SCALA,
        Language::Shell => &SHELL,
        Language::CMake => &CMAKE,
        Language::Makefile => &MAKEFILE,
        Language::Dockerfile => &DOCKERFILE,
        Language::Html => &HTML,
        Language::Xml => &XML,
        Language::Sql => &SQL,
        Language::R => &R,
        Language::Matlab => &MATLAB,
        Language::Perl => &PERL,
        Language::Lua => &LUA,
        Language::Vim => &VIM,
        Language::Elisp => &ELISP,
    }
}
