//! Error types for NBT decoding.

use std::str::Utf8Error;

/// Errors that can occur while decoding a tag tree.
#[derive(Debug, thiserror::Error)]
pub enum NbtError {
    #[error("incomplete input: needed {needed} more bytes")]
    Incomplete { needed: usize },

    #[error("invalid tag id {0}: expected 0 (End) through 12 (LongArray)")]
    InvalidTagId(u8),

    #[error("invalid UTF-8: {0}")]
    InvalidEncoding(#[source] Utf8Error),

    #[error("negative length {0}")]
    NegativeLength(i32),

    #[error("invalid length {0}")]
    InvalidLength(i32),

    #[error("nesting depth exceeds limit of {0}")]
    DepthLimitExceeded(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<NbtError>,
    },
}

/// The root cause of an [`NbtError`], with all context layers stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Incomplete,
    InvalidTagId,
    InvalidEncoding,
    NegativeLength,
    InvalidLength,
    DepthLimitExceeded,
    Io,
}

impl NbtError {
    /// Wraps this error with a description of what was being read.
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error beneath any context layers.
    pub fn root(&self) -> &NbtError {
        let mut err = self;
        while let Self::Context { source, .. } = err {
            err = source;
        }
        err
    }

    /// Classifies the root cause of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Incomplete { .. } => ErrorKind::Incomplete,
            Self::InvalidTagId(_) => ErrorKind::InvalidTagId,
            Self::InvalidEncoding(_) => ErrorKind::InvalidEncoding,
            Self::NegativeLength(_) => ErrorKind::NegativeLength,
            Self::InvalidLength(_) => ErrorKind::InvalidLength,
            Self::DepthLimitExceeded(_) => ErrorKind::DepthLimitExceeded,
            Self::Io(_) => ErrorKind::Io,
            Self::Context { source, .. } => source.kind(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NbtError>;

/// Attaches context to the error side of a [`Result`].
pub(crate) trait ResultExt<T> {
    fn context_with<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context_with<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| e.context(f()))
    }
}
