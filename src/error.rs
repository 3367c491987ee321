//! Errors surfaced by repository analysis.
//!
//! Only problems with the analysis root are fatal. Everything that goes wrong
//! for an individual file (unreadable, unparseable, missing grammar) is logged
//! and degrades that file's result instead of failing the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors returned by [`crate::Aggregator::aggregate`].
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("analysis root does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("analysis root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read analysis root {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_path() {
        let err = AnalysisError::RootNotFound(PathBuf::from("/no/such/dir"));
        assert_eq!(err.to_string(), "analysis root does not exist: /no/such/dir");

        let err = AnalysisError::RootUnreadable {
            path: PathBuf::from("/locked"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("cannot read analysis root /locked"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
