//! Node rules and grammar loaders for each tree-sitter language.

mod c;
mod cpp;
mod go;
mod java;
mod javascript;
mod python;
mod rust_lang;
mod scala;
mod swift;
mod typescript;

pub use c::CRules;
pub use cpp::CppRules;
pub use go::GoRules;
pub use java::JavaRules;
pub use javascript::JavaScriptRules;
pub use python::PythonRules;
pub use rust_lang::RustRules;
pub use scala::ScalaRules;
pub use swift::SwiftRules;
pub use typescript::TypeScriptRules;

use super::rules::NodeRules;
use crate::language::Language;

/// Node rules for a language, if it has a tree-sitter grammar.
pub fn rules_for(language: Language) -> Option<&'static dyn NodeRules> {
    let rules: &'static dyn NodeRules = match language {
        Language::Python => &PythonRules,
        Language::JavaScript => &JavaScriptRules,
        Language::TypeScript => &TypeScriptRules,
        Language::Java => &JavaRules,
        Language::C => &CRules,
        Language::Cpp => &CppRules,
        Language::Rust => &RustRules,
        Language::Go => &GoRules,
        Language::Scala => &ScalaRules,
        Language::Swift => &SwiftRules,
        _ => return None,
    };
    Some(rules)
}

/// The compiled-in grammar for a language.
#[cfg(feature = "tree-sitter")]
pub fn load(language: Language) -> Option<tree_sitter::Language> {
    let grammar = match language {
        Language::Python => python::grammar(),
        Language::JavaScript => javascript::grammar(),
        Language::TypeScript => typescript::grammar(),
        Language::Java => java::grammar(),
        Language::C => c::grammar(),
        Language::Cpp => cpp::grammar(),
        Language::Rust => rust_lang::grammar(),
        Language::Go => go::grammar(),
        Language::Scala => scala::grammar(),
        Language::Swift => swift::grammar(),
        _ => return None,
    };
    Some(grammar)
}

/// Alternate dialect selected by file extension.
#[cfg(feature = "tree-sitter")]
pub fn load_dialect(language: Language, extension: &str) -> Option<tree_sitter::Language> {
    match (language, extension) {
        (Language::TypeScript, "tsx") => Some(typescript::tsx_grammar()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_report_their_language() {
        for lang in Language::ALL {
            if let Some(rules) = rules_for(lang) {
                assert_eq!(rules.language(), lang);
            }
        }
        assert!(rules_for(Language::Kotlin).is_none());
        assert!(rules_for(Language::CMake).is_none());
    }

    #[test]
    fn test_every_table_has_functions_and_decisions() {
        for lang in Language::ALL {
            if let Some(rules) = rules_for(lang) {
                assert!(!rules.kinds().function.is_empty(), "{}", lang);
                assert!(!rules.kinds().decision.is_empty(), "{}", lang);
                assert!(!rules.kinds().comment.is_empty(), "{}", lang);
            }
        }
    }
}
