use thiserror::Error;

use crate::error::transport::TransportError;

/// Precondition failures of a role selection.
///
/// These are reported to the member who used the dropdown, not logged as bugs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No candidates exist or the submitted values are not candidates.
    #[error("No valid roles available")]
    NoValidSelection,

    /// The component has no candidates and no role source to load them from.
    #[error("Role list is not loaded and cannot be refreshed")]
    RefreshUnavailable,

    /// Loading the guild's roles failed.
    #[error("Failed to load guild roles: {0}")]
    RefreshFailed(TransportError),
}
