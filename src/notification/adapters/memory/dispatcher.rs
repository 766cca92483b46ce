//! Notification dispatcher that records every email instead of sending it.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use crate::case::domain::{CaseId, LanguagePreference};
use crate::notification::{
    domain::{NotificationTemplate, TemplateVars},
    ports::{NotificationDispatchError, NotificationDispatchResult, NotificationDispatcher},
};

/// An email captured by [`RecordingNotificationDispatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    /// Recipient address.
    pub address: String,
    /// Template used.
    pub template: NotificationTemplate,
    /// Flattened template values.
    pub vars: TemplateVars,
    /// Template language.
    pub language: LanguagePreference,
    /// Case the email concerns.
    pub case_id: Option<CaseId>,
}

#[derive(Debug, Default)]
struct DispatcherState {
    sent: Vec<SentEmail>,
    rejected_addresses: HashSet<String>,
}

/// Thread-safe recording dispatcher.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotificationDispatcher {
    state: Arc<RwLock<DispatcherState>>,
}

impl RecordingNotificationDispatcher {
    /// Creates a dispatcher that accepts every email.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later email to `address` fail with
    /// [`NotificationDispatchError::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn reject(&self, address: impl Into<String>) -> NotificationDispatchResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.rejected_addresses.insert(address.into());
        Ok(())
    }

    /// Returns the emails sent so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn sent(&self) -> NotificationDispatchResult<Vec<SentEmail>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.sent.clone())
    }
}

impl NotificationDispatcher for RecordingNotificationDispatcher {
    fn send_email(
        &self,
        address: &str,
        template: NotificationTemplate,
        vars: &TemplateVars,
        language: LanguagePreference,
        case_id: Option<CaseId>,
    ) -> NotificationDispatchResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        if state.rejected_addresses.contains(address) {
            return Err(NotificationDispatchError::Rejected {
                address: address.to_owned(),
                reason: "address is on the rejection list".to_owned(),
            });
        }
        state.sent.push(SentEmail {
            address: address.to_owned(),
            template,
            vars: vars.clone(),
            language,
            case_id,
        });
        Ok(())
    }
}

fn lock_error(err: &impl std::fmt::Display) -> NotificationDispatchError {
    NotificationDispatchError::transport(std::io::Error::other(err.to_string()))
}
