//! In-memory notification adapters.

mod dispatcher;

pub use dispatcher::{RecordingNotificationDispatcher, SentEmail};
