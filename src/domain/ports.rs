use crate::domain::model::{LabDraft, LabId, LabRecord};
use crate::utils::error::{LabError, Result};

/// The record store seam handed to the presentation boundary.
///
/// Mutations take `&mut self`, so a single writer is enforced by the borrow
/// checker rather than by convention.
pub trait LabStore {
    /// Current collection in insertion order.
    fn list(&self) -> &[LabRecord];

    fn get(&self, id: LabId) -> Option<&LabRecord>;

    /// Appends a record that already carries its id. Fails with
    /// `DuplicateId` if the id is taken.
    fn add(&mut self, record: LabRecord) -> Result<LabRecord>;

    /// Replaces the record with the same id wholesale, keeping its position.
    fn update(&mut self, record: LabRecord) -> Result<LabRecord>;

    /// `max(id) + 1`, or 1 for an empty store. Freed ids are not reused
    /// only because nothing can be removed. Fails with `IdSpaceExhausted`
    /// when the largest id is `u64::MAX`.
    fn next_id(&self) -> Result<LabId> {
        match self.list().iter().map(|lab| lab.id).max() {
            None => Ok(LabId::FIRST),
            Some(max) => max.next().ok_or(LabError::IdSpaceExhausted { last: max }),
        }
    }

    /// Assigns `next_id()` and appends within the same exclusive borrow.
    fn insert(&mut self, draft: LabDraft) -> Result<LabRecord> {
        let id = self.next_id()?;
        self.add(draft.into_record(id))
    }
}
