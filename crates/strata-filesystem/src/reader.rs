use strata_store::{ObjectKind, ObjectStore};
use strata_types::{ObjectReference, Reference};
use tracing::debug;

use crate::config::ReaderConfig;
use crate::entry::FileContentsEntry;
use crate::error::{ReadError, ReadResult};
use crate::iterator::FileContentsIterator;
use crate::list::FileContentsList;
use crate::parser::{FileContentsListParser, ObjectParser};

/// Loaded contents of the object backing a part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentsNode<R> {
    /// Raw file data.
    Data(Vec<u8>),
    /// Nested list of parts.
    List(FileContentsList<R>),
}

/// Loads the objects backing file parts.
///
/// Whether a reference denotes raw data or a nested list is decided by the
/// source, not by the reference.
pub trait ContentsSource<R> {
    fn load(&self, reference: &R) -> ReadResult<ContentsNode<R>>;
}

/// [`ContentsSource`] backed by an [`ObjectStore`].
///
/// Blobs are returned as data. File contents list objects are decoded with
/// the configured parser. The sentinel reference is never fetched and loads
/// as empty data.
#[derive(Debug)]
pub struct StoreContentsSource<'a, S, P = FileContentsListParser> {
    store: &'a S,
    parser: P,
}

impl<'a, S: ObjectStore> StoreContentsSource<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self::with_parser(store, FileContentsListParser::new())
    }
}

impl<'a, S: ObjectStore, P> StoreContentsSource<'a, S, P> {
    pub fn with_parser(store: &'a S, parser: P) -> Self {
        Self { store, parser }
    }
}

impl<S, P> ContentsSource<ObjectReference> for StoreContentsSource<'_, S, P>
where
    S: ObjectStore,
    P: ObjectParser<ObjectReference, Output = FileContentsList<ObjectReference>>,
{
    fn load(&self, reference: &ObjectReference) -> ReadResult<ContentsNode<ObjectReference>> {
        if reference.is_sentinel() {
            return Ok(ContentsNode::Data(Vec::new()));
        }
        let object = self
            .store
            .read(reference)?
            .ok_or(ReadError::NotFound(*reference))?;
        match object.kind {
            ObjectKind::Blob => Ok(ContentsNode::Data(object.data)),
            ObjectKind::FileContentsList => {
                let (list, _) = self
                    .parser
                    .parse_object(reference, &object.outgoing, &object.data)?;
                Ok(ContentsNode::List(list))
            }
        }
    }
}

/// Performs ranged reads of files described by a [`FileContentsEntry`].
///
/// Nested lists are descended recursively. The size of every loaded object
/// is checked against the size its parent declared for it.
#[derive(Debug)]
pub struct FileReader<C> {
    source: C,
    config: ReaderConfig,
}

impl<C> FileReader<C> {
    pub fn new(source: C) -> Self {
        Self::with_config(source, ReaderConfig::default())
    }

    pub fn with_config(source: C, config: ReaderConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read up to `len` bytes of the file starting at `offset`.
    ///
    /// Reads extending past the end of the file are truncated. Reading at
    /// exactly the end of the file yields no data; reading beyond it fails.
    /// Empty files are never loaded from the source.
    pub fn read_at<R>(
        &self,
        entry: &FileContentsEntry<R>,
        offset: u64,
        len: usize,
    ) -> ReadResult<Vec<u8>>
    where
        R: Reference,
        C: ContentsSource<R>,
    {
        let size = entry.end_bytes;
        if offset > size {
            return Err(ReadError::PastEndOfFile { offset, size });
        }
        let end = offset.saturating_add(len as u64).min(size);
        // Declared sizes are untrusted until the backing objects are loaded.
        let mut out = Vec::new();
        if offset < end {
            self.read_part(&entry.reference, size, offset, end, 0, &mut out)?;
        }
        Ok(out)
    }

    /// Read the whole file.
    pub fn read_all<R>(&self, entry: &FileContentsEntry<R>) -> ReadResult<Vec<u8>>
    where
        R: Reference,
        C: ContentsSource<R>,
    {
        let len = usize::try_from(entry.end_bytes).unwrap_or(usize::MAX);
        self.read_at(entry, 0, len)
    }

    /// Append bytes `start..end` of the part backed by `reference` to `out`.
    /// `depth` is the number of lists above this part.
    fn read_part<R>(
        &self,
        reference: &R,
        size_bytes: u64,
        start: u64,
        end: u64,
        depth: u32,
        out: &mut Vec<u8>,
    ) -> ReadResult<()>
    where
        R: Reference,
        C: ContentsSource<R>,
    {
        match self.source.load(reference)? {
            ContentsNode::Data(data) => {
                if data.len() as u64 != size_bytes {
                    return Err(ReadError::SizeMismatch {
                        expected: size_bytes,
                        actual: data.len() as u64,
                    });
                }
                out.extend_from_slice(&data[start as usize..end as usize]);
                Ok(())
            }
            ContentsNode::List(list) => {
                if depth >= self.config.max_depth {
                    return Err(ReadError::DepthExceeded {
                        max_depth: self.config.max_depth,
                    });
                }
                if list.total_size_bytes() != size_bytes {
                    return Err(ReadError::SizeMismatch {
                        expected: size_bytes,
                        actual: list.total_size_bytes(),
                    });
                }
                debug!(
                    parts = list.len(),
                    depth = depth + 1,
                    start,
                    end,
                    "descending into file contents list"
                );

                let mut iter = FileContentsIterator::new(&list, start)?;
                let mut position = start;
                loop {
                    let part = iter.current_part();
                    let part_start = position - part.offset_bytes;
                    let part_end = part_start + part.size_bytes;
                    let read_end = end.min(part_end);
                    self.read_part(
                        &part.entry.reference,
                        part.size_bytes,
                        part.offset_bytes,
                        read_end - part_start,
                        depth + 1,
                        out,
                    )?;
                    position = read_end;
                    if position >= end || !iter.advance() {
                        return Ok(());
                    }
                }
            }
        }
    }
}
