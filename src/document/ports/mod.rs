//! Port contracts for document generation and printing.

pub mod letters;
pub mod renderer;

pub use letters::{LetterDispatchError, LetterDispatchResult, LetterDispatcher};
pub use renderer::{DocumentRenderer, RenderError, RenderResult};
