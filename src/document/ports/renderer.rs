//! Document rendering port.

use crate::case::domain::{DocumentReference, DocumentType, LanguagePreference};
use crate::document::domain::DocumentContent;
use std::sync::Arc;
use thiserror::Error;

/// Result type for document rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// Renders typed content into a stored document.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentRenderer: Send + Sync {
    /// Renders `content` in `language` and returns a reference to the stored
    /// document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingTemplate`] when no template exists for
    /// the document type and language, [`RenderError::Template`] when the
    /// template fails, and [`RenderError::Storage`] when the output cannot be
    /// stored.
    fn render(
        &self,
        content: &DocumentContent,
        language: LanguagePreference,
    ) -> RenderResult<DocumentReference>;
}

/// Errors returned by document renderers.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// No template for the requested document and language.
    #[error("no {language:?} template for {document_type}")]
    MissingTemplate {
        /// Requested document type.
        document_type: DocumentType,
        /// Requested language.
        language: LanguagePreference,
    },

    /// The template engine reported an error.
    #[error("template for {document_type} failed: {reason}")]
    Template {
        /// Document type being rendered.
        document_type: DocumentType,
        /// Engine message.
        reason: String,
    },

    /// The rendered document could not be stored.
    #[error("document storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl RenderError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
