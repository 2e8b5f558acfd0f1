// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Error type shared by the fallible operations of this crate.
//!
//! Most algorithms in `tandem-core` are total or treat bad input as a
//! caller precondition (and panic on it). The few operations that touch the
//! outside world or offer a checked variant report failures through
//! [`Error`], which follows the usual `Display` + `std::error::Error` +
//! `From` pattern so it composes with `?`.

use crate::algorithm::permutation::PermutationError;
use std::path::PathBuf;

/// The error type for fallible `tandem-core` operations.
#[derive(Debug)]
pub enum Error {
    /// An I/O error occurred while reading the directory at `path`.
    Io {
        /// The directory that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// A reference was requested from an absent (null) handle.
    NullReference,
    /// An index permutation failed validation.
    Permutation(PermutationError),
}

/// A specialized `Result` type for `tandem-core` operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps an I/O error together with the path that caused it.
    #[inline]
    pub fn io<P>(path: P, source: std::io::Error) -> Self
    where
        P: Into<PathBuf>,
    {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "I/O error while reading '{}': {}", path.display(), source)
            }
            Self::NullReference => write!(f, "Attempted to dereference a null reference"),
            Self::Permutation(e) => write!(f, "Invalid permutation: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::NullReference => None,
            Self::Permutation(e) => Some(e),
        }
    }
}

impl From<PermutationError> for Error {
    fn from(e: PermutationError) -> Self {
        Self::Permutation(e)
    }
}
