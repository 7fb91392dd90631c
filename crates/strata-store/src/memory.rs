use std::collections::HashMap;
use std::sync::RwLock;

use strata_types::{ObjectReference, Reference};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::object::StoredObject;
use crate::traits::ObjectStore;

/// In-memory, HashMap-based object store.
///
/// Intended for tests and embedding. All objects are held in memory behind a
/// `RwLock` for safe concurrent access. Objects are cloned on read/write.
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<ObjectReference, StoredObject>>,
}

impl InMemoryObjectStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn read(&self, reference: &ObjectReference) -> StoreResult<Option<StoredObject>> {
        if reference.is_sentinel() {
            return Err(StoreError::SentinelReference);
        }
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.get(reference).cloned())
    }

    fn write(&self, object: &StoredObject) -> StoreResult<ObjectReference> {
        object.validate()?;
        let reference = object.reference()?;
        let mut map = self.objects.write().expect("lock poisoned");
        // Idempotent: the same reference always maps to the same object.
        map.entry(reference).or_insert_with(|| {
            debug!(reference = %reference.short_hex(), kind = %object.kind, "stored object");
            object.clone()
        });
        Ok(reference)
    }

    fn exists(&self, reference: &ObjectReference) -> StoreResult<bool> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.contains_key(reference))
    }

    fn delete(&self, reference: &ObjectReference) -> StoreResult<bool> {
        let mut map = self.objects.write().expect("lock poisoned");
        Ok(map.remove(reference).is_some())
    }
}

impl std::fmt::Debug for InMemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryObjectStore")
            .field("object_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectKind;
    use strata_types::OutgoingReferences;

    fn make_blob(content: &[u8]) -> StoredObject {
        StoredObject::blob(content.to_vec())
    }

    // -----------------------------------------------------------------------
    // Core CRUD
    // -----------------------------------------------------------------------

    #[test]
    fn write_and_read_blob() {
        let store = InMemoryObjectStore::new();
        let obj = make_blob(b"hello world");
        let reference = store.write(&obj).unwrap();
        assert!(!reference.is_sentinel());

        let read_back = store.read(&reference).unwrap().expect("should exist");
        assert_eq!(read_back, obj);
    }

    #[test]
    fn write_and_read_list_with_outgoing_references() {
        let store = InMemoryObjectStore::new();
        let a = store.write(&make_blob(b"aaa")).unwrap();
        let b = store.write(&make_blob(b"bbb")).unwrap();
        let list = StoredObject::new(
            ObjectKind::FileContentsList,
            vec![3, 1, 3, 2],
            OutgoingReferences::from(vec![a, b]),
        );
        let reference = store.write(&list).unwrap();

        let read_back = store.read(&reference).unwrap().expect("should exist");
        assert_eq!(read_back.kind, ObjectKind::FileContentsList);
        assert_eq!(read_back.outgoing.as_slice(), &[a, b]);
    }

    #[test]
    fn same_content_produces_same_reference() {
        let store = InMemoryObjectStore::new();
        let r1 = store.write(&make_blob(b"identical content")).unwrap();
        let r2 = store.write(&make_blob(b"identical content")).unwrap();
        assert_eq!(r1, r2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn different_content_produces_different_references() {
        let store = InMemoryObjectStore::new();
        let r1 = store.write(&make_blob(b"aaa")).unwrap();
        let r2 = store.write(&make_blob(b"bbb")).unwrap();
        assert_ne!(r1, r2);
        assert_eq!(store.len(), 2);
    }

    // -----------------------------------------------------------------------
    // Sentinel handling
    // -----------------------------------------------------------------------

    #[test]
    fn reading_sentinel_is_rejected() {
        let store = InMemoryObjectStore::new();
        let err = store.read(&ObjectReference::sentinel()).unwrap_err();
        assert!(matches!(err, StoreError::SentinelReference));
    }

    #[test]
    fn writing_object_embedding_sentinel_is_rejected() {
        let store = InMemoryObjectStore::new();
        let obj = StoredObject::new(
            ObjectKind::FileContentsList,
            vec![],
            OutgoingReferences::from(vec![ObjectReference::sentinel()]),
        );
        let err = store.write(&obj).unwrap_err();
        assert!(matches!(err, StoreError::SentinelOutgoingReference { index: 0 }));
        assert!(store.is_empty());
    }

    // -----------------------------------------------------------------------
    // Exists / Delete
    // -----------------------------------------------------------------------

    #[test]
    fn exists_for_missing_and_present_objects() {
        let store = InMemoryObjectStore::new();
        let missing = make_blob(b"nonexistent").reference().unwrap();
        assert!(!store.exists(&missing).unwrap());

        let present = store.write(&make_blob(b"present")).unwrap();
        assert!(store.exists(&present).unwrap());
    }

    #[test]
    fn delete_present_object() {
        let store = InMemoryObjectStore::new();
        let reference = store.write(&make_blob(b"to-delete")).unwrap();
        assert!(store.delete(&reference).unwrap());
        assert!(!store.exists(&reference).unwrap());
        assert!(!store.delete(&reference).unwrap());
    }

    #[test]
    fn read_missing_object_returns_none() {
        let store = InMemoryObjectStore::new();
        let reference = make_blob(b"missing").reference().unwrap();
        assert!(store.read(&reference).unwrap().is_none());
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_tracks_distinct_objects() {
        let store = InMemoryObjectStore::new();
        assert!(store.is_empty());

        store.write(&make_blob(b"12345")).unwrap();
        store.write(&make_blob(b"123456789")).unwrap();
        store.write(&make_blob(b"12345")).unwrap();
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryObjectStore::new());
        let reference = store.write(&make_blob(b"shared data")).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let obj = store.read(&reference).unwrap().expect("should exist");
                    assert_eq!(obj.reference().unwrap(), reference);
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn debug_format() {
        let store = InMemoryObjectStore::new();
        store.write(&make_blob(b"x")).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryObjectStore"));
        assert!(debug.contains("object_count"));
    }
}
