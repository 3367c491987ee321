//! Tree-sitter grammar registry.
//!
//! The registry owns one [`Grammar`] per language that has a compiled-in
//! tree-sitter parser. Languages without one (or whose grammar fails to
//! load) are simply absent, and the extractor falls back to line heuristics
//! for them.
//!
//! Parsers are created per parse call: `tree_sitter::Parser` is not `Sync`,
//! while the registry is shared across the rayon worker pool.

pub mod languages;
pub mod rules;

pub use rules::{NodeClass, NodeKinds, NodeRules};

#[cfg(feature = "tree-sitter")]
use std::collections::HashMap;

#[cfg(feature = "tree-sitter")]
use anyhow::Context;

use crate::language::Language;

/// Alternate grammars picked by file extension.
#[cfg(feature = "tree-sitter")]
const DIALECTS: &[(Language, &str)] = &[(Language::TypeScript, "tsx")];

/// A loaded grammar with its node rules.
#[cfg(feature = "tree-sitter")]
pub struct Grammar {
    language: Language,
    ts_language: tree_sitter::Language,
    dialects: Vec<(&'static str, tree_sitter::Language)>,
    rules: &'static dyn NodeRules,
}

#[cfg(feature = "tree-sitter")]
impl Grammar {
    /// Load and validate the grammar for `language`.
    ///
    /// Returns `None` when there is no grammar or it cannot be bound to a
    /// parser (ABI mismatch).
    fn load(language: Language) -> Option<Grammar> {
        let rules = languages::rules_for(language)?;
        let ts_language = languages::load(language)?;

        if let Err(e) = tree_sitter::Parser::new().set_language(&ts_language) {
            tracing::warn!(
                "Grammar for {} failed to load, using heuristics: {}",
                language,
                e
            );
            return None;
        }

        let dialects = DIALECTS
            .iter()
            .filter(|(lang, _)| *lang == language)
            .filter_map(|(_, ext)| languages::load_dialect(language, ext).map(|g| (*ext, g)))
            .collect();

        Some(Grammar {
            language,
            ts_language,
            dialects,
            rules,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn rules(&self) -> &'static dyn NodeRules {
        self.rules
    }

    /// Parse `source`, choosing a dialect by `extension` when one exists.
    ///
    /// Syntax errors still produce a tree (with ERROR nodes); only a parser
    /// that cannot bind or returns no tree is an error.
    pub fn parse(&self, source: &str, extension: Option<&str>) -> anyhow::Result<tree_sitter::Tree> {
        let ts_language = extension
            .and_then(|ext| {
                self.dialects
                    .iter()
                    .find(|(dialect, _)| dialect.eq_ignore_ascii_case(ext))
            })
            .map(|(_, grammar)| grammar)
            .unwrap_or(&self.ts_language);

        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(ts_language)
            .with_context(|| format!("cannot bind {} grammar", self.language))?;

        parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("{} parser returned no tree", self.language))
    }
}

/// The set of grammars available to the extractor.
#[derive(Default)]
pub struct GrammarRegistry {
    #[cfg(feature = "tree-sitter")]
    grammars: HashMap<Language, Grammar>,
}

impl GrammarRegistry {
    /// Load every compiled-in grammar. Failures are logged, never fatal.
    #[cfg(feature = "tree-sitter")]
    pub fn new() -> Self {
        let grammars: HashMap<Language, Grammar> = Language::ALL
            .iter()
            .filter_map(|lang| Grammar::load(*lang))
            .map(|g| (g.language, g))
            .collect();
        tracing::debug!("Loaded {} tree-sitter grammars", grammars.len());
        Self { grammars }
    }

    #[cfg(not(feature = "tree-sitter"))]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with no grammars; every file is analyzed heuristically.
    pub fn heuristic_only() -> Self {
        Self::default()
    }

    #[cfg(feature = "tree-sitter")]
    pub fn get(&self, language: Language) -> Option<&Grammar> {
        self.grammars.get(&language)
    }

    #[cfg(feature = "tree-sitter")]
    pub fn supports(&self, language: Language) -> bool {
        self.grammars.contains_key(&language)
    }

    #[cfg(not(feature = "tree-sitter"))]
    pub fn supports(&self, _language: Language) -> bool {
        false
    }

    /// Languages with a loaded grammar, in tag order.
    pub fn languages(&self) -> Vec<Language> {
        let mut langs: Vec<Language> = Language::ALL
            .iter()
            .copied()
            .filter(|l| self.supports(*l))
            .collect();
        langs.sort_by_key(|l| l.as_str());
        langs
    }
}
