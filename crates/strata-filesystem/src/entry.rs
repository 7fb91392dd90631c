use strata_types::{OutgoingReferences, Reference, ReferenceFormat};

use crate::codec::FileContents;
use crate::error::FlattenError;
use crate::flatten::ReferenceFlattener;

/// A part of a concatenated file.
///
/// Covers the bytes between the previous entry's `end_bytes` (or zero) and
/// this entry's `end_bytes`, backed by the object at `reference`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileContentsEntry<R> {
    pub end_bytes: u64,
    pub reference: R,
}

impl<R: Reference> FileContentsEntry<R> {
    /// Construct an entry referring to a file as a whole.
    ///
    /// An absent descriptor denotes an empty file, which is not backed by any
    /// object and maps to the sentinel reference. A size of zero is accepted
    /// here, unlike for parts of a list.
    pub fn from_file_contents<F, T>(
        file_contents: Option<&FileContents>,
        outgoing: &OutgoingReferences<R>,
        flattener: &F,
        format: &T,
    ) -> Result<Self, FlattenError>
    where
        F: ReferenceFlattener<R>,
        T: ReferenceFormat<R>,
    {
        let Some(file_contents) = file_contents else {
            return Ok(Self {
                end_bytes: 0,
                reference: format.sentinel_reference(),
            });
        };
        let reference = flattener.flatten(&file_contents.reference, outgoing)?;
        Ok(Self {
            end_bytes: file_contents.total_size_bytes,
            reference,
        })
    }

    /// Returns `true` if the entry covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.end_bytes == 0
    }
}
