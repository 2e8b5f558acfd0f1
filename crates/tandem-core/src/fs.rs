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

//! # Directory Listing
//!
//! Collects the entries of a single directory (non-recursively) into any
//! container. Containers only need `Extend<PathBuf>`, so vectors, sets and
//! deques all work without choosing between "push" and "insert" flavors.
//!
//! Entry order is whatever the operating system reports; sort the result if
//! a stable order matters. Every I/O failure is returned as [`Error::Io`]
//! together with the directory path.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::collections::BTreeSet;
//! use std::path::PathBuf;
//! use tandem_core::fs::{read_directory, read_directory_into};
//!
//! let all = read_directory("/etc")?;
//! let configs: BTreeSet<PathBuf> =
//!     read_directory_into("/etc", |p| p.extension().is_some_and(|e| e == "conf"))?;
//! # Ok::<(), tandem_core::error::Error>(())
//! ```

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Appends the entries of the directory at `path` that satisfy `predicate`
/// to `sink`.
///
/// Returns the number of entries appended. On error, entries read before the
/// failure may already have been appended.
pub fn read_directory_to<P, E, F>(path: P, sink: &mut E, mut predicate: F) -> Result<usize>
where
    P: AsRef<Path>,
    E: Extend<PathBuf> + ?Sized,
    F: FnMut(&Path) -> bool,
{
    let path = path.as_ref();
    debug_log!(path = %path.display(), "reading directory");

    let entries = std::fs::read_dir(path).map_err(|e| Error::io(path, e))?;
    let mut appended = 0;
    for entry in entries {
        let entry_path = entry.map_err(|e| Error::io(path, e))?.path();
        if predicate(&entry_path) {
            sink.extend(std::iter::once(entry_path));
            appended += 1;
        }
    }

    trace_log!(path = %path.display(), appended, "directory read");
    Ok(appended)
}

/// Collects the entries of the directory at `path` that satisfy `predicate`
/// into a new container of type `C`.
pub fn read_directory_into<C, P, F>(path: P, predicate: F) -> Result<C>
where
    C: Default + Extend<PathBuf>,
    P: AsRef<Path>,
    F: FnMut(&Path) -> bool,
{
    let mut container = C::default();
    read_directory_to(path, &mut container, predicate)?;
    Ok(container)
}

/// Returns all entries of the directory at `path`.
#[inline]
pub fn read_directory<P>(path: P) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
{
    read_directory_into(path, |_| true)
}

/// Returns the entries of the directory at `path` that satisfy `predicate`.
#[inline]
pub fn read_directory_if<P, F>(path: P, predicate: F) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    F: FnMut(&Path) -> bool,
{
    read_directory_into(path, predicate)
}
