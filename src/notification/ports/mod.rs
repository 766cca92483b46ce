//! Port contracts for notification delivery.

pub mod dispatcher;

pub use dispatcher::{NotificationDispatchError, NotificationDispatchResult, NotificationDispatcher};
