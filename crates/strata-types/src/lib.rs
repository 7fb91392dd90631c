//! Foundation types for Strata.
//!
//! Strata stores large files as trees of immutable, content-addressed
//! objects. This crate defines how those objects are referred to. Every
//! other Strata crate depends on `strata-types`.
//!
//! # Key Types
//!
//! - [`Reference`] — Capability interface implemented by reference types
//! - [`ReferenceFormat`] — Constructs the sentinel ("no object") reference
//! - [`ObjectReference`] — BLAKE3 content hash plus object size
//! - [`OutgoingReferences`] — Ordered table of references embedded in an object

pub mod error;
pub mod outgoing;
pub mod reference;

pub use error::TypeError;
pub use outgoing::OutgoingReferences;
pub use reference::{ObjectReference, ObjectReferenceFormat, Reference, ReferenceFormat};
