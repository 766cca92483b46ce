//! Letter dispatcher that records print jobs instead of posting them.

use std::sync::{Arc, RwLock};

use crate::case::domain::DocumentReference;
use crate::document::{
    domain::{LetterPackId, LetterRecipient},
    ports::{LetterDispatchError, LetterDispatchResult, LetterDispatcher},
};

/// A print job captured by [`RecordingLetterDispatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentLetterPack {
    /// Print job identifier.
    pub pack_id: LetterPackId,
    /// Addressee.
    pub recipient: LetterRecipient,
    /// Documents in print order.
    pub documents: Vec<DocumentReference>,
}

/// Thread-safe recording letter dispatcher.
#[derive(Debug, Clone, Default)]
pub struct RecordingLetterDispatcher {
    sent: Arc<RwLock<Vec<SentLetterPack>>>,
}

impl RecordingLetterDispatcher {
    /// Creates an empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the packs sent so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn sent(&self) -> LetterDispatchResult<Vec<SentLetterPack>> {
        let sent = self
            .sent
            .read()
            .map_err(|err| LetterDispatchError::transport(std::io::Error::other(err.to_string())))?;
        Ok(sent.clone())
    }
}

impl LetterDispatcher for RecordingLetterDispatcher {
    fn send_letters(
        &self,
        recipient: &LetterRecipient,
        documents: &[DocumentReference],
        pack_id: LetterPackId,
    ) -> LetterDispatchResult<()> {
        if documents.is_empty() {
            return Err(LetterDispatchError::EmptyPack(pack_id));
        }
        let mut sent = self
            .sent
            .write()
            .map_err(|err| LetterDispatchError::transport(std::io::Error::other(err.to_string())))?;
        sent.push(SentLetterPack {
            pack_id,
            recipient: recipient.clone(),
            documents: documents.to_vec(),
        });
        tracing::info!(%pack_id, documents = documents.len(), "letter pack queued");
        Ok(())
    }
}
