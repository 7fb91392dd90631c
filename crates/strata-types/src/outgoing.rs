use crate::reference::Reference;

/// Ordered table of references embedded in a stored object.
///
/// The table is recorded by the store alongside the object's raw bytes.
/// Entries are addressed by position; the object's payload refers to them
/// indirectly, which keeps payloads independent of the hash function.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OutgoingReferences<R> {
    references: Vec<R>,
}

impl<R: Reference> OutgoingReferences<R> {
    /// A table without any references.
    pub fn empty() -> Self {
        Self {
            references: Vec::new(),
        }
    }

    /// Number of references in the table.
    pub fn degree(&self) -> usize {
        self.references.len()
    }

    /// Returns `true` if the table has no references.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Reference at a 0-based position.
    pub fn get(&self, position: usize) -> Option<&R> {
        self.references.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.references.iter()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.references
    }
}

impl<R: Reference> Default for OutgoingReferences<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R> From<Vec<R>> for OutgoingReferences<R> {
    fn from(references: Vec<R>) -> Self {
        Self { references }
    }
}

impl<'a, R: Reference> IntoIterator for &'a OutgoingReferences<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
