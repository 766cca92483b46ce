//! Decides who is told about a milestone, how, and in which language.

use super::{Audience, Milestone, NotificationRequest, NotificationTemplate, Perspective, Recipient};
use crate::case::domain::{ApplicantRole, CaseData, CaseRecord, LanguagePreference, ServiceMethod};
use crate::config::CaseConfig;
use crate::progression::due_date::{has_reached, is_past};
use crate::progression::SECOND_IN_TIME_THRESHOLD_DAYS;
use crate::progression::transition::threshold_elapsed;
use chrono::NaiveDate;

/// Stateless notification eligibility resolver.
///
/// Resolution never fails: missing contact details or unmet milestone
/// conditions simply yield fewer requests.
#[derive(Debug, Clone, Copy)]
pub struct NotificationEligibility<'a> {
    config: &'a CaseConfig,
}

impl<'a> NotificationEligibility<'a> {
    /// Creates a resolver reading feature flags from `config`.
    #[must_use]
    pub const fn new(config: &'a CaseConfig) -> Self {
        Self { config }
    }

    /// Resolves the notifications to send for `milestone` on `today`.
    ///
    /// Requests are ordered applicant 1 first. A recipient reached through
    /// more than one party is notified once, under the first party.
    #[must_use]
    pub fn resolve(
        &self,
        milestone: Milestone,
        record: &CaseRecord,
        today: NaiveDate,
    ) -> Vec<NotificationRequest> {
        let data = &record.data;
        let mut requests: Vec<NotificationRequest> = Vec::new();
        for (role, perspective) in parties_to_notify(milestone, data, today) {
            let Some(request) = self.request_for(milestone, data, role, perspective) else {
                tracing::debug!(%milestone, party = role.as_str(), "no eligible channel");
                continue;
            };
            if requests.iter().all(|seen| seen.recipient != request.recipient) {
                requests.push(request);
            }
        }
        requests
    }

    fn request_for(
        &self,
        milestone: Milestone,
        data: &CaseData,
        role: ApplicantRole,
        perspective: Perspective,
    ) -> Option<NotificationRequest> {
        let party = data.applicant(role);
        if let Some(solicitor) = &party.solicitor {
            return solicitor.email_address().map(|address| NotificationRequest {
                role,
                recipient: Recipient::Email(address.to_owned()),
                template: NotificationTemplate::new(milestone, Audience::Solicitor, perspective),
                language: LanguagePreference::English,
            });
        }

        let template = NotificationTemplate::new(milestone, Audience::Citizen, perspective);
        if let Some(address) = party.email_address().filter(|_| !party.offline) {
            return Some(NotificationRequest {
                role,
                recipient: Recipient::Email(address.to_owned()),
                template,
                language: party.language_preference,
            });
        }

        let postal = party.offline
            && milestone.has_postal_channel()
            && self.config.postal_notifications;
        postal.then_some(NotificationRequest {
            role,
            recipient: Recipient::Post(role),
            template,
            language: party.language_preference,
        })
    }
}

fn both_parties(data: &CaseData) -> Vec<(ApplicantRole, Perspective)> {
    if data.is_joint() {
        vec![
            (ApplicantRole::Applicant1, Perspective::JointApplicant),
            (ApplicantRole::Applicant2, Perspective::JointApplicant),
        ]
    } else {
        vec![
            (ApplicantRole::Applicant1, Perspective::Applicant),
            (ApplicantRole::Applicant2, Perspective::Respondent),
        ]
    }
}

const fn applicant_perspective(data: &CaseData) -> Perspective {
    if data.is_joint() {
        Perspective::JointApplicant
    } else {
        Perspective::Applicant
    }
}

/// Parties eligible for the milestone before contact details are considered.
fn parties_to_notify(
    milestone: Milestone,
    data: &CaseData,
    today: NaiveDate,
) -> Vec<(ApplicantRole, Perspective)> {
    let final_order = &data.final_order;
    match milestone {
        Milestone::ApplicationIssued => {
            let mut parties = both_parties(data);
            let court_serves_respondent = data.application.service_method == ServiceMethod::CourtService;
            if data.is_sole() && !court_serves_respondent {
                parties.retain(|(role, _)| *role == ApplicantRole::Applicant1);
            }
            parties
        }
        Milestone::AosSubmitted if data.is_sole() => both_parties(data),
        Milestone::PartnerNotResponded
            if data.is_sole()
                && !data.acknowledgement_of_service.is_submitted()
                && is_past(data.due_date, today) =>
        {
            vec![(ApplicantRole::Applicant1, Perspective::Applicant)]
        }
        Milestone::ConditionalOrderPronounced if data.conditional_order.is_granted() => {
            both_parties(data)
        }
        Milestone::FinalOrderCanBeApplied if has_reached(final_order.date_eligible_from, today) => {
            not_yet_applied(data)
        }
        Milestone::OtherPartyAppliedForFinalOrder if data.is_joint() => ApplicantRole::BOTH
            .into_iter()
            .filter(|role| final_order.applied_at(*role).is_none())
            .filter(|role| {
                final_order.applied_at(role.other()).is_some_and(|applied| {
                    threshold_elapsed(applied, today, SECOND_IN_TIME_THRESHOLD_DAYS)
                })
            })
            .map(|role| (role, Perspective::JointApplicant))
            .collect(),
        Milestone::PartnerIntendsToSwitchToSole if data.is_joint() => ApplicantRole::BOTH
            .into_iter()
            .filter(|role| final_order.intention_to_switch_declared_at(*role).is_none())
            .filter(|role| {
                final_order
                    .intention_to_switch_declared_at(role.other())
                    .is_some()
            })
            .map(|role| (role, Perspective::JointApplicant))
            .collect(),
        Milestone::FinalOrderOverdue
            if !final_order.is_granted() && has_reached(final_order.date_no_longer_eligible, today) =>
        {
            not_yet_applied(data)
        }
        Milestone::FinalOrderGranted if final_order.is_granted() => both_parties(data),
        Milestone::WelshTranslationReviewComplete => {
            let mut parties = vec![(ApplicantRole::Applicant1, applicant_perspective(data))];
            if data.is_joint() {
                parties.push((ApplicantRole::Applicant2, Perspective::JointApplicant));
            }
            parties
        }
        _ => Vec::new(),
    }
}

/// In a sole case only applicant 1 may apply; in a joint case each party
/// that has not yet applied.
fn not_yet_applied(data: &CaseData) -> Vec<(ApplicantRole, Perspective)> {
    if data.is_sole() {
        return vec![(ApplicantRole::Applicant1, Perspective::Applicant)];
    }
    ApplicantRole::BOTH
        .into_iter()
        .filter(|role| data.final_order.applied_at(*role).is_none())
        .map(|role| (role, Perspective::JointApplicant))
        .collect()
}
