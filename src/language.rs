//! Language classification by file name and extension.

use std::fmt;
use std::path::Path;

use phf::phf_map;
use serde::{Deserialize, Serialize};

/// Tag rendered for files the classifier does not recognize.
pub const UNKNOWN: &str = "unknown";

/// Every language tag the classifier can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    Cpp,
    C,
    Rust,
    Go,
    Php,
    Ruby,
    CSharp,
    Swift,
    Kotlin,
    Scala,
    Shell,
    CMake,
    Makefile,
    Dockerfile,
    Html,
    Xml,
    Sql,
    R,
    Matlab,
    Perl,
    Lua,
    Vim,
    Elisp,
}

/// Build files recognized by their whole (lowercased) file name.
static SPECIAL_FILENAMES: phf::Map<&'static str, Language> = phf_map! {
    "cmakelists.txt" => Language::CMake,
    "makefile" => Language::Makefile,
    "makefile.am" => Language::Makefile,
    "makefile.in" => Language::Makefile,
    "dockerfile" => Language::Dockerfile,
};

/// Lowercased extension (without dot) to language.
static EXTENSIONS: phf::Map<&'static str, Language> = phf_map! {
    "py" => Language::Python,
    "js" => Language::JavaScript,
    "jsx" => Language::JavaScript,
    "ts" => Language::TypeScript,
    "tsx" => Language::TypeScript,
    "java" => Language::Java,
    "cpp" => Language::Cpp,
    "cc" => Language::Cpp,
    "cxx" => Language::Cpp,
    "hpp" => Language::Cpp,
    "h" => Language::Cpp,
    "c" => Language::C,
    "rs" => Language::Rust,
    "go" => Language::Go,
    "php" => Language::Php,
    "rb" => Language::Ruby,
    "cs" => Language::CSharp,
    "swift" => Language::Swift,
    "kt" => Language::Kotlin,
    "scala" => Language::Scala,
    "sh" => Language::Shell,
    "bash" => Language::Shell,
    "zsh" => Language::Shell,
    "fish" => Language::Shell,
    "cmake" => Language::CMake,
    "dockerfile" => Language::Dockerfile,
    "html" => Language::Html,
    "xml" => Language::Xml,
    "sql" => Language::Sql,
    "r" => Language::R,
    "m" => Language::Matlab,
    "pl" => Language::Perl,
    "lua" => Language::Lua,
    "vim" => Language::Vim,
    "el" => Language::Elisp,
};

impl Language {
    pub const ALL: [Language; 27] = [
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Java,
        Language::Cpp,
        Language::C,
        Language::Rust,
        Language::Go,
        Language::Php,
        Language::Ruby,
        Language::CSharp,
        Language::Swift,
        Language::Kotlin,
        Language::Scala,
        Language::Shell,
        Language::CMake,
        Language::Makefile,
        Language::Dockerfile,
        Language::Html,
        Language::Xml,
        Language::Sql,
        Language::R,
        Language::Matlab,
        Language::Perl,
        Language::Lua,
        Language::Vim,
        Language::Elisp,
    ];

    /// Classify a path. Special build-file names win over extensions.
    ///
    /// Returns `None` for anything unrecognized; callers render that as
    /// [`UNKNOWN`].
    pub fn from_path(path: &Path) -> Option<Language> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        if let Some(lang) = SPECIAL_FILENAMES.get(name.as_str()) {
            return Some(*lang);
        }

        let ext = path.extension()?.to_string_lossy().to_lowercase();
        EXTENSIONS.get(ext.as_str()).copied()
    }

    /// Whether the path is a build file recognized by name alone.
    pub fn is_special_filename(path: &Path) -> bool {
        path.file_name()
            .map(|n| SPECIAL_FILENAMES.contains_key(n.to_string_lossy().to_lowercase().as_str()))
            .unwrap_or(false)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::Rust => "rust",
            Language::Go => "go",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::CSharp => "csharp",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Scala => "scala",
            Language::Shell => "shell",
            Language::CMake => "cmake",
            Language::Makefile => "makefile",
            Language::Dockerfile => "dockerfile",
            Language::Html => "html",
            Language::Xml => "xml",
            Language::Sql => "sql",
            Language::R => "r",
            Language::Matlab => "matlab",
            Language::Perl => "perl",
            Language::Lua => "lua",
            Language::Vim => "vim",
            Language::Elisp => "elisp",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.as_str() == tag)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag for an optional classification result.
pub fn tag(language: Option<Language>) -> &'static str {
    language.map(|l| l.as_str()).unwrap_or(UNKNOWN)
}

/// Serde adapter rendering `Option<Language>` as a plain tag, `"unknown"` for `None`.
pub mod serde_tag {
    use super::{tag, Language, UNKNOWN};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Language>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(tag(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Language>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw == UNKNOWN {
            return Ok(None);
        }
        Language::from_tag(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown language tag: {}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn classify(p: &str) -> Option<Language> {
        Language::from_path(&PathBuf::from(p))
    }

    #[test]
    fn test_extension_table() {
        assert_eq!(classify("src/app.py"), Some(Language::Python));
        assert_eq!(classify("ui/App.jsx"), Some(Language::JavaScript));
        assert_eq!(classify("ui/App.tsx"), Some(Language::TypeScript));
        assert_eq!(classify("include/vec.h"), Some(Language::Cpp));
        assert_eq!(classify("main.c"), Some(Language::C));
        assert_eq!(classify("build.zsh"), Some(Language::Shell));
        assert_eq!(classify("init.el"), Some(Language::Elisp));
        assert_eq!(classify("solver.m"), Some(Language::Matlab));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(classify("LEGACY.PY"), Some(Language::Python));
        assert_eq!(classify("Main.Java"), Some(Language::Java));
    }

    #[test]
    fn test_special_filenames_take_precedence() {
        assert_eq!(classify("CMakeLists.txt"), Some(Language::CMake));
        assert_eq!(classify("sub/Makefile"), Some(Language::Makefile));
        assert_eq!(classify("Makefile.am"), Some(Language::Makefile));
        assert_eq!(classify("makefile.in"), Some(Language::Makefile));
        assert_eq!(classify("Dockerfile"), Some(Language::Dockerfile));
        assert_eq!(classify("api.dockerfile"), Some(Language::Dockerfile));
        assert!(Language::is_special_filename(Path::new("x/CMakeLists.txt")));
        assert!(!Language::is_special_filename(Path::new("notes.txt")));
    }

    #[test]
    fn test_unknown_files() {
        assert_eq!(classify("data.xyz"), None);
        assert_eq!(classify("README"), None);
        assert_eq!(classify("notes.txt"), None);
        assert_eq!(tag(None), UNKNOWN);
    }

    #[test]
    fn test_tag_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_tag(lang.as_str()), Some(lang));
        }
        assert_eq!(Language::from_tag("cobol"), None);
    }

    #[test]
    fn test_serde_uses_tags() {
        assert_eq!(serde_json::to_string(&Language::CSharp).unwrap(), "\"csharp\"");
        assert_eq!(serde_json::to_string(&Language::CMake).unwrap(), "\"cmake\"");
        assert_eq!(serde_json::to_string(&Language::JavaScript).unwrap(), "\"javascript\"");
    }
}
