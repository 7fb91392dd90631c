use strata_types::{OutgoingReferences, Reference};
use tracing::{debug, warn};

use crate::codec::{FileContents, MessageListDecoder, VarintMessageListDecoder};
use crate::entry::FileContentsEntry;
use crate::error::ContentsError;
use crate::flatten::{IndexFlattener, ReferenceFlattener};
use crate::list::FileContentsList;

/// Parses the raw bytes of a stored object into a typed representation.
///
/// Implementations are pure: parsing the same bytes and outgoing references
/// twice yields equal results. Returns the parsed value and the number of
/// bytes of `data` it accounts for.
pub trait ObjectParser<R> {
    type Output;

    fn parse_object(
        &self,
        reference: &R,
        outgoing: &OutgoingReferences<R>,
        data: &[u8],
    ) -> Result<(Self::Output, usize), ContentsError>;
}

/// [`ObjectParser`] for file contents lists.
///
/// Converts the per-part sizes stored in the object into cumulative end
/// offsets, so that readers can binary search for the part containing a
/// given offset.
#[derive(Clone, Debug, Default)]
pub struct FileContentsListParser<F = IndexFlattener, D = VarintMessageListDecoder> {
    flattener: F,
    decoder: D,
}

impl FileContentsListParser {
    /// Parser using the default flattener and wire format.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F, D> FileContentsListParser<F, D> {
    /// Parser with a custom flattener and message decoder.
    pub fn with_parts(flattener: F, decoder: D) -> Self {
        Self { flattener, decoder }
    }

    fn build_list<R>(
        &self,
        parts: &[FileContents],
        outgoing: &OutgoingReferences<R>,
    ) -> Result<FileContentsList<R>, ContentsError>
    where
        R: Reference,
        F: ReferenceFlattener<R>,
    {
        if parts.len() < 2 {
            return Err(ContentsError::TooFewParts { count: parts.len() });
        }

        let mut end_bytes: u64 = 0;
        let mut entries = Vec::with_capacity(parts.len());
        for (index, part) in parts.iter().enumerate() {
            if part.total_size_bytes == 0 {
                return Err(ContentsError::EmptyPart { index });
            }
            if part.total_size_bytes > u64::MAX - end_bytes {
                return Err(ContentsError::SizeOverflow {
                    index,
                    max: u64::MAX,
                });
            }
            end_bytes += part.total_size_bytes;

            let reference = self
                .flattener
                .flatten(&part.reference, outgoing)
                .map_err(|source| ContentsError::InvalidPartReference { index, source })?;

            entries.push(FileContentsEntry {
                end_bytes,
                reference,
            });
        }
        Ok(FileContentsList::from_validated(entries))
    }
}

impl<R, F, D> ObjectParser<R> for FileContentsListParser<F, D>
where
    R: Reference,
    F: ReferenceFlattener<R>,
    D: MessageListDecoder<Message = FileContents>,
{
    type Output = FileContentsList<R>;

    fn parse_object(
        &self,
        reference: &R,
        outgoing: &OutgoingReferences<R>,
        data: &[u8],
    ) -> Result<(FileContentsList<R>, usize), ContentsError> {
        let result = self
            .decoder
            .decode(data)
            .map_err(ContentsError::from)
            .and_then(|(parts, size_bytes)| {
                self.build_list(&parts, outgoing).map(|list| (list, size_bytes))
            });
        match &result {
            Ok((list, size_bytes)) => debug!(
                reference = ?reference,
                parts = list.len(),
                total_size_bytes = list.total_size_bytes(),
                size_bytes,
                "decoded file contents list"
            ),
            Err(e) => warn!(reference = ?reference, error = %e, "rejected file contents list"),
        }
        result
    }
}
