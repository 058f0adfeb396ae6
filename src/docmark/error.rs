//! Error types for compiling documents
//!
//! Only two things can stop a document from compiling: a construct with no token or node
//! for it in the current context, and the source file not being readable. Unresolved
//! references are not errors, see [diagnostics](super::diagnostics).

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised by [`Compiler`](super::compiler::Compiler).
#[derive(Debug, Error)]
pub enum CompileError {
    /// The parsed markdown or the token tree contained a kind with no mapping in its context.
    #[error("unsupported token kind `{kind}` inside {context}")]
    UnsupportedTokenKind {
        kind: &'static str,
        context: &'static str,
    },

    /// The source file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CompileError {
    pub fn unsupported(kind: &'static str, context: &'static str) -> Self {
        CompileError::UnsupportedTokenKind { kind, context }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompileError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the compiler.
pub type CompileResult<T> = Result<T, CompileError>;
