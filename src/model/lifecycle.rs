//! Reports returned by the view lifecycle operations.

use crate::model::view::ViewRecord;

/// Result of publishing a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    /// Message the new view is attached to.
    pub message_id: u64,
    /// Number of roles the new dropdown offers choices from.
    pub candidate_count: usize,
    /// The view that was replaced, if the kind was already published.
    pub replaced: Option<ReplacedView>,
}

/// A view superseded by a publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacedView {
    pub record: ViewRecord,
    pub message: RetiredMessage,
}

/// What happened to the message of a replaced view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetiredMessage {
    /// Deleted by the publish.
    Deleted,
    /// Someone had already deleted it.
    AlreadyGone,
    /// The delete was rejected; the old dropdown stays visible but inert.
    DeleteFailed,
}

/// Counts from a restore pass over the persisted views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreSummary {
    /// Views re-attached to their messages.
    pub restored: usize,
    /// Records deleted because their guild, channel or message is gone.
    pub removed: usize,
    /// Records kept but not restored this run.
    pub skipped: usize,
}
