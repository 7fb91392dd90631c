//! Content-addressed object storage for Strata.
//!
//! Every object is an immutable byte blob plus the ordered table of
//! references it embeds, identified by an [`ObjectReference`] computed from
//! its contents. This crate defines the storage boundary consumed by the
//! file contents layer; it does not interpret object payloads.
//!
//! # Object Types
//!
//! - [`ObjectKind::Blob`] -- raw file data
//! - [`ObjectKind::FileContentsList`] -- encoded list of file parts
//!
//! # Storage Backends
//!
//! All backends implement the [`ObjectStore`] trait:
//!
//! - [`InMemoryObjectStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Objects are immutable once written (content-addressing guarantees this).
//! 2. Concurrent reads are always safe (objects are immutable).
//! 3. The sentinel reference is never stored and never fetched.
//! 4. Content hashes are computed on write only; reads trust the backend.
//!
//! [`ObjectReference`]: strata_types::ObjectReference

pub mod error;
pub mod memory;
pub mod object;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryObjectStore;
pub use object::{ObjectKind, StoredObject};
pub use traits::ObjectStore;
