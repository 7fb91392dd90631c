use std::ops::Range;

use crate::entry::FileContentsEntry;
use crate::error::{ReadError, ReadResult};
use crate::list::FileContentsList;

/// The part an iterator is positioned at.
#[derive(Debug, PartialEq, Eq)]
pub struct CurrentPart<'a, R> {
    pub entry: &'a FileContentsEntry<R>,
    /// Offset within the part at which reading should start.
    pub offset_bytes: u64,
    /// Size of the part.
    pub size_bytes: u64,
}

/// Walks the parts of a [`FileContentsList`], starting at an arbitrary
/// offset within the file.
#[derive(Debug)]
pub struct FileContentsIterator<'a, R> {
    list: &'a FileContentsList<R>,
    index: usize,
    range: Range<u64>,
    offset_bytes: u64,
}

impl<'a, R> FileContentsIterator<'a, R> {
    /// Position an iterator at the part containing `offset`.
    pub fn new(list: &'a FileContentsList<R>, offset: u64) -> ReadResult<Self> {
        let (index, range) = list
            .find(offset)
            .and_then(|index| Some((index, list.part_range(index)?)))
            .ok_or(ReadError::PastEndOfFile {
                offset,
                size: list.total_size_bytes(),
            })?;
        Ok(Self {
            list,
            index,
            offset_bytes: offset - range.start,
            range,
        })
    }

    pub fn current_part(&self) -> CurrentPart<'a, R> {
        CurrentPart {
            entry: &self.list.entries()[self.index],
            offset_bytes: self.offset_bytes,
            size_bytes: self.range.end - self.range.start,
        }
    }

    /// Move to the start of the next part. Returns `false` if the iterator
    /// was positioned at the last part, in which case it stays there.
    pub fn advance(&mut self) -> bool {
        match self.list.part_range(self.index + 1) {
            Some(range) => {
                self.index += 1;
                self.range = range;
                self.offset_bytes = 0;
                true
            }
            None => false,
        }
    }
}
