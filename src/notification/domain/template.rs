//! Notification templates and recipients.

use super::Milestone;
use crate::case::domain::{ApplicantRole, LanguagePreference};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who reads the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Audience {
    /// An unrepresented party.
    Citizen,
    /// A party's legal representative.
    Solicitor,
}

impl Audience {
    /// Returns the identifier used in template ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::Solicitor => "solicitor",
        }
    }
}

/// The reader's position in the case, which selects the wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Perspective {
    /// Applicant 1 in a sole application.
    Applicant,
    /// Applicant 2 in a sole application.
    Respondent,
    /// Either applicant in a joint application.
    JointApplicant,
}

impl Perspective {
    /// Returns the identifier used in template ids.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applicant => "applicant",
            Self::Respondent => "respondent",
            Self::JointApplicant => "joint",
        }
    }
}

/// A notification template, identified by milestone, audience and
/// perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationTemplate {
    /// Milestone the template announces.
    pub milestone: Milestone,
    /// Intended reader.
    pub audience: Audience,
    /// Reader's position in the case.
    pub perspective: Perspective,
}

impl NotificationTemplate {
    /// Creates a template reference.
    #[must_use]
    pub const fn new(milestone: Milestone, audience: Audience, perspective: Perspective) -> Self {
        Self {
            milestone,
            audience,
            perspective,
        }
    }

    /// Returns the template identifier understood by the dispatcher, for
    /// example `citizen_final_order_granted_respondent`.
    #[must_use]
    pub fn id(&self) -> String {
        format!(
            "{}_{}_{}",
            self.audience.as_str(),
            self.milestone.as_str(),
            self.perspective.as_str()
        )
    }
}

impl fmt::Display for NotificationTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// Where a notification is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Recipient {
    /// Email to the given address.
    Email(String),
    /// Letter to the party's postal address.
    Post(ApplicantRole),
}

/// One notification the resolver decided should be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// Party the notification concerns.
    pub role: ApplicantRole,
    /// Delivery target.
    pub recipient: Recipient,
    /// Template to use.
    pub template: NotificationTemplate,
    /// Language of the template variant.
    pub language: LanguagePreference,
}

impl NotificationRequest {
    /// Returns the email address when delivered by email.
    #[must_use]
    pub fn email_address(&self) -> Option<&str> {
        match &self.recipient {
            Recipient::Email(address) => Some(address),
            Recipient::Post(_) => None,
        }
    }
}
