use serde::{Deserialize, Serialize};
use strata_types::{ObjectReference, OutgoingReferences, Reference};

use crate::error::{StoreError, StoreResult};

/// The kind of object stored.
///
/// This is what distinguishes an entry that backs raw file data from one
/// that backs a nested file contents list. References themselves carry no
/// such discriminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Raw file data.
    Blob,
    /// Encoded list of file parts, each referring to a blob or another list.
    FileContentsList,
}

impl ObjectKind {
    /// Tag byte used in the canonical object encoding.
    pub fn tag(&self) -> u8 {
        match self {
            Self::Blob => 1,
            Self::FileContentsList => 2,
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blob => write!(f, "blob"),
            Self::FileContentsList => write!(f, "file contents list"),
        }
    }
}

/// A stored object: kind tag, payload bytes and outgoing reference table.
///
/// `StoredObject` is the unit of storage. The store never interprets the
/// payload; the outgoing table is recorded alongside it so that payloads can
/// refer to other objects by position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredObject {
    /// The type of this object.
    pub kind: ObjectKind,
    /// The payload bytes of the object.
    pub data: Vec<u8>,
    /// References embedded in the payload, addressed by position.
    pub outgoing: OutgoingReferences<ObjectReference>,
}

impl StoredObject {
    /// Create a new stored object.
    pub fn new(
        kind: ObjectKind,
        data: Vec<u8>,
        outgoing: OutgoingReferences<ObjectReference>,
    ) -> Self {
        Self {
            kind,
            data,
            outgoing,
        }
    }

    /// Create a blob without outgoing references.
    pub fn blob(data: Vec<u8>) -> Self {
        Self::new(ObjectKind::Blob, data, OutgoingReferences::empty())
    }

    /// Canonical encoding used for content addressing.
    ///
    /// Layout: `[kind:1][degree:4 BE][degree * (hash:32, size:4 BE)][data]`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(5 + self.outgoing.degree() * 36 + self.data.len());
        buf.push(self.kind.tag());
        buf.extend_from_slice(&(self.outgoing.degree() as u32).to_be_bytes());
        for reference in &self.outgoing {
            buf.extend_from_slice(reference.digest());
            buf.extend_from_slice(&(reference.size_bytes() as u32).to_be_bytes());
        }
        buf.extend_from_slice(&self.data);
        buf
    }

    /// Compute the content-addressed reference for this object.
    pub fn reference(&self) -> StoreResult<ObjectReference> {
        Ok(ObjectReference::for_contents(&self.to_bytes())?)
    }

    /// Reject objects embedding the sentinel reference.
    pub(crate) fn validate(&self) -> StoreResult<()> {
        match self.outgoing.iter().position(|r| r.is_sentinel()) {
            Some(index) => Err(StoreError::SentinelOutgoingReference { index }),
            None => Ok(()),
        }
    }
}
