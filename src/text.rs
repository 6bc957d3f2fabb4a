//! Source text ownership and line views.
//!
//! [`SourceText`] is the sole owner of the raw bytes, either memory-mapped
//! from a file or held in an owned buffer. [`Line`] values are borrowed
//! views into that buffer; the borrow checker pins them to the owner's
//! lifetime, so a `Line` can never outlive the text it points into.

use crate::alphabet::first_letter;
use crate::error::{SortContext, SortError, SortResult};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// One logical line: a view starting at the line's first letter byte and
/// running to the end of the line (line break excluded).
///
/// `Line` is a small `Copy` record, which is what the sort engine shuffles;
/// the underlying bytes are never moved or copied during a sort pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    bytes: &'a [u8],
}

impl<'a> Line<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// The line content as raw bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

enum TextData {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

/// Owner of the text buffer that every [`Line`] borrows from.
pub struct SourceText {
    data: TextData,
}

impl SourceText {
    /// Memory-maps `path` read-only.
    pub fn open(path: &Path) -> SortResult<Self> {
        if path.is_dir() {
            return Err(SortError::is_directory(&path.display().to_string()));
        }
        let file = File::open(path).with_file_context(&path.display().to_string())?;
        // SAFETY: the mapping is read-only and lives inside this SourceText;
        // all Line views borrow from it and cannot outlive it.
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("mapping {}", path.display()))?;
        Ok(Self {
            data: TextData::Mapped(mmap),
        })
    }

    /// Wraps an in-memory buffer. Used by tests and callers that already
    /// hold the text.
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            data: TextData::Owned(bytes),
        }
    }

    /// The whole text, byte for byte as read from the source.
    pub fn bytes(&self) -> &[u8] {
        match &self.data {
            TextData::Mapped(mmap) => mmap,
            TextData::Owned(vec) => vec,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }

    /// Scans the text into sortable line views.
    ///
    /// Splits on `\n`, strips a trailing `\r`, and keeps only lines that
    /// contain at least one letter, each view starting at its first letter
    /// byte. Lines with no letters carry nothing the comparator can see, so
    /// they are dropped here rather than sorted as all-equal records.
    pub fn lines(&self) -> Vec<Line<'_>> {
        self.bytes()
            .split(|&b| b == b'\n')
            .filter_map(|raw| {
                let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
                first_letter(raw).map(|start| Line::new(&raw[start..]))
            })
            .collect()
    }
}
