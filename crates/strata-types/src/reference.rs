use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Domain tag prepended to object contents before hashing.
const OBJECT_DOMAIN: &str = "strata-object-v1";

/// Capabilities every reference type must provide.
///
/// Decoders in higher layers are generic over this trait, so that the same
/// validation logic applies regardless of the hash function or encoding
/// used by a particular store.
pub trait Reference: Clone + Eq + Hash + fmt::Debug + Send + Sync {
    /// Size in bytes of the object this reference points to.
    fn size_bytes(&self) -> usize;

    /// Returns `true` if this is the reserved "no object" value.
    ///
    /// Sentinel references must never be fetched from storage.
    fn is_sentinel(&self) -> bool;
}

/// Provides the sentinel reference for a reference type.
pub trait ReferenceFormat<R: Reference> {
    /// The reserved reference denoting "no backing object".
    fn sentinel_reference(&self) -> R;
}

/// Content-addressed reference to a stored object.
///
/// Consists of the domain-separated BLAKE3 hash of the object's contents and
/// the object's size. Identical contents always produce the same reference.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectReference {
    hash: [u8; 32],
    size_bytes: u32,
}

impl ObjectReference {
    /// Compute the reference of an object from its raw contents.
    pub fn for_contents(data: &[u8]) -> Result<Self, TypeError> {
        let size_bytes = u32::try_from(data.len()).map_err(|_| TypeError::ObjectTooLarge {
            size: data.len(),
            max: u32::MAX as usize,
        })?;
        let mut hasher = blake3::Hasher::new();
        hasher.update(OBJECT_DOMAIN.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        Ok(Self {
            hash: *hasher.finalize().as_bytes(),
            size_bytes,
        })
    }

    /// Create a reference from a pre-computed hash and size.
    pub fn from_parts(hash: [u8; 32], size_bytes: u32) -> Self {
        Self { hash, size_bytes }
    }

    /// The sentinel reference (all-zero hash, zero size).
    pub const fn sentinel() -> Self {
        Self {
            hash: [0u8; 32],
            size_bytes: 0,
        }
    }

    /// The raw 32-byte hash.
    pub fn digest(&self) -> &[u8; 32] {
        &self.hash
    }

    /// Hex-encoded hash.
    pub fn to_hex(&self) -> String {
        hex::encode(self.hash)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.hash[..4])
    }

    /// Parse a hex-encoded hash, pairing it with a known object size.
    pub fn from_hex(s: &str, size_bytes: u32) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        let hash: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            })?;
        Ok(Self { hash, size_bytes })
    }
}

impl Reference for ObjectReference {
    fn size_bytes(&self) -> usize {
        self.size_bytes as usize
    }

    fn is_sentinel(&self) -> bool {
        *self == Self::sentinel()
    }
}

impl fmt::Debug for ObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectReference({}, {}B)", self.short_hex(), self.size_bytes)
    }
}

impl fmt::Display for ObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.to_hex(), self.size_bytes)
    }
}

/// [`ReferenceFormat`] for [`ObjectReference`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObjectReferenceFormat;

impl ReferenceFormat<ObjectReference> for ObjectReferenceFormat {
    fn sentinel_reference(&self) -> ObjectReference {
        ObjectReference::sentinel()
    }
}
