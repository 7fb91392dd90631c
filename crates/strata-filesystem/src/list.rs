use std::ops::Range;

use crate::entry::FileContentsEntry;

/// Parts of a concatenated file, in the order in which they are
/// concatenated.
///
/// Lists are only produced by [`FileContentsListParser`], which guarantees
/// that there are at least two entries and that `end_bytes` is strictly
/// increasing. Lookups by offset rely on the latter.
///
/// [`FileContentsListParser`]: crate::parser::FileContentsListParser
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileContentsList<R> {
    entries: Vec<FileContentsEntry<R>>,
}

impl<R> FileContentsList<R> {
    pub(crate) fn from_validated(entries: Vec<FileContentsEntry<R>>) -> Self {
        debug_assert!(entries.len() >= 2);
        debug_assert!(entries.windows(2).all(|w| w[0].end_bytes < w[1].end_bytes));
        Self { entries }
    }

    pub fn entries(&self) -> &[FileContentsEntry<R>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileContentsEntry<R>> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<FileContentsEntry<R>> {
        self.entries
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for lists produced by the parser.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the file described by the list.
    pub fn total_size_bytes(&self) -> u64 {
        self.entries.last().map_or(0, |e| e.end_bytes)
    }

    /// Offset at which the part at `index` starts, or `None` if there is no
    /// such part.
    pub fn start_bytes(&self, index: usize) -> Option<u64> {
        self.part_range(index).map(|range| range.start)
    }

    /// Byte range covered by the part at `index`.
    pub fn part_range(&self, index: usize) -> Option<Range<u64>> {
        let end = self.entries.get(index)?.end_bytes;
        let start = match index {
            0 => 0,
            _ => self.entries[index - 1].end_bytes,
        };
        Some(start..end)
    }

    /// Index of the part containing `offset`, or `None` if the offset lies
    /// at or past the end of the file.
    pub fn find(&self, offset: u64) -> Option<usize> {
        if offset >= self.total_size_bytes() {
            return None;
        }
        Some(self.entries.partition_point(|e| e.end_bytes <= offset))
    }
}

impl<'a, R> IntoIterator for &'a FileContentsList<R> {
    type Item = &'a FileContentsEntry<R>;
    type IntoIter = std::slice::Iter<'a, FileContentsEntry<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
