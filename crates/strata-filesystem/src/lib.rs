//! File contents lists for Strata.
//!
//! Large files are stored as trees of immutable, content-addressed parts.
//! A file contents list is a stored object enumerating the parts of a file
//! in concatenation order; each part is either a raw blob or another list.
//! This crate turns the raw bytes of such an object into a validated
//! [`FileContentsList`] with cumulative end offsets, and performs ranged
//! reads over the resulting tree.
//!
//! # Architecture
//!
//! - **Codec** ([`codec`]): decodes the repeated [`FileContents`] descriptors
//! - **Flattener** ([`flatten`]): resolves descriptor-local references
//!   against the object's outgoing reference table
//! - **Parser** ([`FileContentsListParser`]): validates descriptors and
//!   accumulates end offsets
//! - **Entry** ([`FileContentsEntry::from_file_contents`]): single entry for
//!   files without a list layer, including empty files
//! - **Iterator / Reader** ([`FileContentsIterator`], [`FileReader`]):
//!   offset lookup and ranged reads with recursive descent
//!
//! # Invariants
//!
//! Every successfully decoded list has at least two entries, strictly
//! increasing `end_bytes`, and a total size that fits in a `u64`.

pub mod codec;
pub mod config;
pub mod entry;
pub mod error;
pub mod flatten;
pub mod iterator;
pub mod list;
pub mod parser;
pub mod reader;

pub use codec::{
    encode_file_contents, FileContents, LocalReference, MessageListDecoder,
    VarintMessageListDecoder,
};
pub use config::ReaderConfig;
pub use entry::FileContentsEntry;
pub use error::{ContentsError, DecodeError, FlattenError, ReadError, ReadResult};
pub use flatten::{IndexFlattener, ReferenceFlattener};
pub use iterator::{CurrentPart, FileContentsIterator};
pub use list::FileContentsList;
pub use parser::{FileContentsListParser, ObjectParser};
pub use reader::{ContentsNode, ContentsSource, FileReader, StoreContentsSource};
