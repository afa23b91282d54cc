use thiserror::Error;

/// Failure of a call to Discord made through the collaborator traits.
///
/// Discord errors are classified by HTTP status so callers can apply the cleanup policy:
/// `NotFound` means the resource is gone, `Forbidden` means it exists but the bot cannot
/// reach it, anything else is an outage or a rejected request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The guild, channel, message or member no longer exists.
    #[error("Discord resource not found")]
    NotFound,

    /// The bot lacks the permissions required for the request.
    #[error("Missing permissions for Discord resource")]
    Forbidden,

    /// Any other failure talking to Discord.
    #[error("Discord request failed: {0}")]
    Request(String),
}

impl From<serenity::Error> for TransportError {
    fn from(err: serenity::Error) -> Self {
        if let serenity::Error::Http(http_err) = &err {
            match http_err.status_code().map(|status| status.as_u16()) {
                Some(404) => return TransportError::NotFound,
                Some(403) => return TransportError::Forbidden,
                _ => {}
            }
        }

        TransportError::Request(err.to_string())
    }
}
