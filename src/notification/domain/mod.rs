//! Notification domain: milestones, templates, content and eligibility.

mod content;
mod eligibility;
mod milestone;
mod template;

pub use content::{NotificationContent, TemplateVars, format_date};
pub use eligibility::NotificationEligibility;
pub use milestone::Milestone;
pub use template::{Audience, NotificationRequest, NotificationTemplate, Perspective, Recipient};
