use strata_types::ObjectReference;

use crate::error::StoreResult;
use crate::object::StoredObject;

/// Content-addressed object store.
///
/// All implementations must satisfy these invariants:
/// - Objects are immutable once written. Content-addressing guarantees this:
///   the same object always produces the same reference.
/// - Concurrent reads are always safe (objects are immutable).
/// - The sentinel reference is never fetched: reading it is an error.
/// - All backend errors are propagated, never silently ignored.
pub trait ObjectStore: Send + Sync {
    /// Read an object by its content-addressed reference.
    ///
    /// Returns `Ok(None)` if the object does not exist.
    fn read(&self, reference: &ObjectReference) -> StoreResult<Option<StoredObject>>;

    /// Write an object and return its content-addressed reference.
    ///
    /// If the object already exists, this is a no-op (idempotent).
    fn write(&self, object: &StoredObject) -> StoreResult<ObjectReference>;

    /// Check whether an object exists in the store.
    fn exists(&self, reference: &ObjectReference) -> StoreResult<bool>;

    /// Delete an object. Returns `true` if the object existed.
    ///
    /// Intended for garbage collection only. Deleting objects that are still
    /// referenced leaves dangling parts in file contents lists.
    fn delete(&self, reference: &ObjectReference) -> StoreResult<bool>;
}
