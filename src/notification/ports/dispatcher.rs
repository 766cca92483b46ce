//! Email dispatch port.

use crate::case::domain::{CaseId, LanguagePreference};
use crate::notification::domain::{NotificationTemplate, TemplateVars};
use std::sync::Arc;
use thiserror::Error;

/// Result type for notification dispatch.
pub type NotificationDispatchResult<T> = Result<T, NotificationDispatchError>;

/// Outbound email contract.
///
/// Calls are synchronous; any retry policy belongs to the implementation.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationDispatcher: Send + Sync {
    /// Sends one templated email.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationDispatchError::Rejected`] when the provider
    /// refuses the message and [`NotificationDispatchError::Transport`] when
    /// it cannot be reached.
    fn send_email(
        &self,
        address: &str,
        template: NotificationTemplate,
        vars: &TemplateVars,
        language: LanguagePreference,
        case_id: Option<CaseId>,
    ) -> NotificationDispatchResult<()>;
}

/// Errors returned by notification dispatchers.
#[derive(Debug, Clone, Error)]
pub enum NotificationDispatchError {
    /// The provider refused the message.
    #[error("email to {address} rejected: {reason}")]
    Rejected {
        /// Recipient address.
        address: String,
        /// Provider's reason.
        reason: String,
    },

    /// The provider could not be reached.
    #[error("notification transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotificationDispatchError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
