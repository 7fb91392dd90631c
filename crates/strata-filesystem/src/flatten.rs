use strata_types::{OutgoingReferences, Reference};

use crate::codec::LocalReference;
use crate::error::FlattenError;

/// Resolves references embedded in an object's payload into absolute
/// references that can be used without the containing object.
pub trait ReferenceFlattener<R> {
    fn flatten(
        &self,
        reference: &LocalReference,
        outgoing: &OutgoingReferences<R>,
    ) -> Result<R, FlattenError>;
}

/// Flattener for 1-based indices into the outgoing reference table.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexFlattener;

impl<R: Reference> ReferenceFlattener<R> for IndexFlattener {
    fn flatten(
        &self,
        reference: &LocalReference,
        outgoing: &OutgoingReferences<R>,
    ) -> Result<R, FlattenError> {
        if reference.index == 0 {
            return Err(FlattenError::MissingReference);
        }
        outgoing
            .get(reference.index as usize - 1)
            .cloned()
            .ok_or(FlattenError::IndexOutOfRange {
                index: reference.index,
                degree: outgoing.degree(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_types::ObjectReference;

    fn table() -> OutgoingReferences<ObjectReference> {
        OutgoingReferences::from(vec![
            ObjectReference::for_contents(b"first").unwrap(),
            ObjectReference::for_contents(b"second").unwrap(),
        ])
    }

    #[test]
    fn resolves_one_based_index() {
        let outgoing = table();
        let first = IndexFlattener.flatten(&LocalReference::new(1), &outgoing).unwrap();
        let second = IndexFlattener.flatten(&LocalReference::new(2), &outgoing).unwrap();
        assert_eq!(Some(&first), outgoing.get(0));
        assert_eq!(Some(&second), outgoing.get(1));
    }

    #[test]
    fn zero_index_is_missing() {
        let err = IndexFlattener
            .flatten(&LocalReference::new(0), &table())
            .unwrap_err();
        assert_eq!(err, FlattenError::MissingReference);
    }

    #[test]
    fn index_past_degree_is_out_of_range() {
        let err = IndexFlattener
            .flatten(&LocalReference::new(3), &table())
            .unwrap_err();
        assert_eq!(err, FlattenError::IndexOutOfRange { index: 3, degree: 2 });
    }

    #[test]
    fn empty_table_rejects_everything() {
        let outgoing: OutgoingReferences<ObjectReference> = OutgoingReferences::empty();
        let err = IndexFlattener
            .flatten(&LocalReference::new(1), &outgoing)
            .unwrap_err();
        assert_eq!(err, FlattenError::IndexOutOfRange { index: 1, degree: 0 });
    }
}
