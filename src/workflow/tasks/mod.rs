//! Tasks composed into the case event pipelines.

mod documents;
mod guards;
mod issue;
mod notify;
mod orders;
mod service;

pub use documents::{CaseDocument, GenerateDocument};
pub use guards::{ProgressionDecision, RequireSoleApplication, RequireState, TimedProgression};
pub use issue::{GenerateAccessCode, IssueApplication, ReissueApplication, ValidateApplicationForIssue};
pub use notify::{Correspondence, SendNotifications};
pub use orders::{
    ApplyForFinalOrder, CompleteWelshTranslationReview, DeclareIntentionToSwitchToSole,
    GrantFinalOrder, PronounceConditionalOrder, SubmitConditionalOrder, SwitchToSoleFinalOrder,
};
pub use service::{ConfirmSolicitorService, SubmitAos, ValidateAosSubmission, ValidateSolicitorService};
