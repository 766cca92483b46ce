//! Bulk print port.

use crate::case::domain::DocumentReference;
use crate::document::domain::{LetterPackId, LetterRecipient};
use std::sync::Arc;
use thiserror::Error;

/// Result type for letter dispatch.
pub type LetterDispatchResult<T> = Result<T, LetterDispatchError>;

/// Sends printed document packs by post.
#[cfg_attr(test, mockall::automock)]
pub trait LetterDispatcher: Send + Sync {
    /// Queues `documents` for printing and posting to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns [`LetterDispatchError::EmptyPack`] when no documents are given
    /// and [`LetterDispatchError::Transport`] when the print service fails.
    fn send_letters(
        &self,
        recipient: &LetterRecipient,
        documents: &[DocumentReference],
        pack_id: LetterPackId,
    ) -> LetterDispatchResult<()>;
}

/// Errors returned by letter dispatchers.
#[derive(Debug, Clone, Error)]
pub enum LetterDispatchError {
    /// The pack has no documents.
    #[error("letter pack {0} has no documents")]
    EmptyPack(LetterPackId),

    /// The print service failed.
    #[error("print service error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl LetterDispatchError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
