//! Source file discovery and bounded reads.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::warn;
use walkdir::WalkDir;

use crate::language::Language;

/// Directories never descended into (hidden directories are skipped too).
const IGNORED_DIRS: &[&str] = &["node_modules", "__pycache__", "venv", "env"];

/// Extensions of documentation, data, media and archive files.
const DENYLISTED_EXTENSIONS: &[&str] = &[
    "md", "txt", "rst", "adoc", "json", "yaml", "yml", "toml", "ini", "cfg", "conf", "css", "scss",
    "sass", "less", "png", "jpg", "jpeg", "gif", "svg", "ico", "pdf", "doc", "docx", "xls", "xlsx",
    "zip", "tar", "gz", "rar", "log", "tmp", "cache",
];

/// Files larger than this are truncated before analysis.
pub const MAX_FILE_BYTES: u64 = 8 * 1024 * 1024;

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Whether a file should be analyzed at all.
pub fn is_candidate(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    if is_hidden(&name) {
        return false;
    }
    if Language::is_special_filename(path) {
        return true;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    !DENYLISTED_EXTENSIONS.contains(&ext.as_str())
}

/// Collect candidate files under `root`, sorted by path.
///
/// Walk errors (permission denied, broken links) are logged and skipped.
pub fn collect_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // the root itself may live in a hidden directory (temp dirs)
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !is_hidden(&name) && !IGNORED_DIRS.contains(&&*name)
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if is_file_like(&entry) && is_candidate(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files
}

/// Regular files, and symlinks that do not resolve to a directory.
///
/// Dangling links are kept; the read fails later and is skipped there.
fn is_file_like(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

/// Read at most [`MAX_FILE_BYTES`], decoding invalid UTF-8 lossily.
pub fn read_source(path: &Path) -> anyhow::Result<String> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let mut bytes = Vec::new();
    file.take(MAX_FILE_BYTES + 1)
        .read_to_end(&mut bytes)
        .with_context(|| format!("cannot read {}", path.display()))?;

    if bytes.len() as u64 > MAX_FILE_BYTES {
        warn!(
            "{} exceeds {} bytes, analyzing the first {} only",
            path.display(),
            MAX_FILE_BYTES,
            MAX_FILE_BYTES
        );
        bytes.truncate(MAX_FILE_BYTES as usize);
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
