//! The respondent's acknowledgement of service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the respondent intends to respond to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HowToRespond {
    /// Continue without disputing.
    WithoutDispute,
    /// Dispute the application.
    DisputeApplication,
}

/// Acknowledgement of service answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcknowledgementOfService {
    /// Respondent confirms they have read the application.
    pub confirm_read_application: bool,
    /// Respondent agrees the court has jurisdiction; `None` until answered.
    pub jurisdiction_agree: Option<bool>,
    /// Reason given when jurisdiction is disputed.
    pub jurisdiction_disagree_reason: Option<String>,
    /// Respondent's intended response.
    pub how_to_respond: Option<HowToRespond>,
    /// Respondent has signed the statement of truth.
    pub statement_of_truth: bool,
    /// When the acknowledgement was submitted.
    pub date_submitted: Option<DateTime<Utc>>,
}

impl AcknowledgementOfService {
    /// Returns `true` when the respondent answered that jurisdiction is not
    /// agreed.
    #[must_use]
    pub const fn disputes_jurisdiction(&self) -> bool {
        matches!(self.jurisdiction_agree, Some(false))
    }

    /// Returns `true` when the respondent intends to dispute the application.
    #[must_use]
    pub const fn intends_to_dispute(&self) -> bool {
        matches!(self.how_to_respond, Some(HowToRespond::DisputeApplication))
    }

    /// Returns `true` once the acknowledgement has been submitted.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.date_submitted.is_some()
    }
}
