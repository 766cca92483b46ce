//! In-memory document adapters.

mod letters;
mod renderer;

pub use letters::{RecordingLetterDispatcher, SentLetterPack};
pub use renderer::{RenderedDocument, TemplateDocumentRenderer};
