//! Two-step delete confirmation.

use crate::record::UserRecord;

/// Tracks which record, if any, is awaiting delete confirmation.
///
/// Opening a confirmation replaces any earlier pending target. Only
/// [`DeleteConfirmation::confirm`] hands the target over for deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    target: Option<UserRecord>,
}

impl DeleteConfirmation {
    /// Ask for confirmation before deleting `record`.
    pub fn open(&mut self, record: UserRecord) {
        self.target = Some(record);
    }

    /// Record awaiting confirmation.
    #[must_use]
    pub const fn pending(&self) -> Option<&UserRecord> {
        self.target.as_ref()
    }

    /// Dismiss the confirmation without deleting anything.
    pub fn cancel(&mut self) {
        self.target = None;
    }

    /// Accept the confirmation, yielding the record to delete.
    pub fn confirm(&mut self) -> Option<UserRecord> {
        self.target.take()
    }
}
