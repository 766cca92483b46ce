//! Typed notification content.
//!
//! Content is assembled from the case as typed fields and only flattened to
//! [`TemplateVars`] at the dispatcher boundary.

use crate::case::domain::{
    ApplicantRole, CaseData, CaseId, DivorceOrDissolution, LanguagePreference,
};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Flat key-value map handed to template engines.
pub type TemplateVars = BTreeMap<String, String>;

const WELSH_MONTHS: [&str; 12] = [
    "Ionawr",
    "Chwefror",
    "Mawrth",
    "Ebrill",
    "Mai",
    "Mehefin",
    "Gorffennaf",
    "Awst",
    "Medi",
    "Hydref",
    "Tachwedd",
    "Rhagfyr",
];

/// Formats a date as it appears in correspondence, for example
/// `17 January 2024` or `17 Ionawr 2024`.
#[must_use]
pub fn format_date(date: NaiveDate, language: LanguagePreference) -> String {
    match language {
        LanguagePreference::English => date.format("%-d %B %Y").to_string(),
        LanguagePreference::Welsh => {
            let month = usize::try_from(date.month0())
                .ok()
                .and_then(|index| WELSH_MONTHS.get(index))
                .copied()
                .unwrap_or_default();
            format!("{} {month} {}", date.day(), date.year())
        }
    }
}

/// Values shared by every notification template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent {
    /// Case reference grouped for display.
    pub case_reference: Option<String>,
    /// Name of the party addressed.
    pub recipient_name: String,
    /// Name of the other party.
    pub partner_name: String,
    /// "spouse" or "civil partner".
    pub partner_term: &'static str,
    /// `true` for divorce, `false` for dissolution.
    pub is_divorce: bool,
    /// Solicitor name when writing to a representative.
    pub solicitor_name: Option<String>,
    /// Solicitor's own reference.
    pub solicitor_reference: Option<String>,
    /// Current deadline.
    pub due_date: Option<NaiveDate>,
    /// Date the final order may be applied for.
    pub final_order_eligible_from: Option<NaiveDate>,
    /// Date the final order application becomes overdue.
    pub final_order_no_longer_eligible: Option<NaiveDate>,
    /// Access code for the other party's invitation.
    pub access_code: Option<String>,
    /// Language used for dates.
    pub language: LanguagePreference,
}

impl NotificationContent {
    /// Builds content addressed to `role`.
    #[must_use]
    pub fn for_party(
        case_id: Option<CaseId>,
        data: &CaseData,
        role: ApplicantRole,
        language: LanguagePreference,
    ) -> Self {
        let party = data.applicant(role);
        let solicitor = party.solicitor.as_ref();
        Self {
            case_reference: case_id.map(CaseId::formatted),
            recipient_name: party.full_name(),
            partner_name: data.applicant(role.other()).full_name(),
            partner_term: data.divorce_or_dissolution.partner_term(),
            is_divorce: data.divorce_or_dissolution == DivorceOrDissolution::Divorce,
            solicitor_name: solicitor.map(|sol| sol.name.clone()),
            solicitor_reference: solicitor.and_then(|sol| sol.reference.clone()),
            due_date: data.due_date,
            final_order_eligible_from: data.final_order.date_eligible_from,
            final_order_no_longer_eligible: data.final_order.date_no_longer_eligible,
            access_code: data
                .case_invite
                .access_code
                .as_ref()
                .map(|code| code.as_str().to_owned()),
            language,
        }
    }

    /// Flattens the content for a template engine. Absent values are
    /// omitted.
    #[must_use]
    pub fn to_template_vars(&self) -> TemplateVars {
        let mut vars = TemplateVars::new();
        let mut put = |key: &str, value: Option<String>| {
            if let Some(present) = value {
                vars.insert(key.to_owned(), present);
            }
        };
        put("case_reference", self.case_reference.clone());
        put("recipient_name", Some(self.recipient_name.clone()));
        put("partner_name", Some(self.partner_name.clone()));
        put("partner_term", Some(self.partner_term.to_owned()));
        put("is_divorce", Some(self.is_divorce.to_string()));
        put("solicitor_name", self.solicitor_name.clone());
        put("solicitor_reference", self.solicitor_reference.clone());
        put("due_date", self.date(self.due_date));
        put(
            "final_order_eligible_from",
            self.date(self.final_order_eligible_from),
        );
        put(
            "final_order_no_longer_eligible",
            self.date(self.final_order_no_longer_eligible),
        );
        put("access_code", self.access_code.clone());
        vars
    }

    fn date(&self, date: Option<NaiveDate>) -> Option<String> {
        date.map(|value| format_date(value, self.language))
    }
}
