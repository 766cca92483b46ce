//! Parties to the case and their contact details.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which applicant a value refers to.
///
/// In a sole application applicant 2 is the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantRole {
    /// The applicant who started the case.
    Applicant1,
    /// The other party: joint applicant or respondent.
    Applicant2,
}

impl ApplicantRole {
    /// Both parties, applicant 1 first.
    pub const BOTH: [Self; 2] = [Self::Applicant1, Self::Applicant2];

    /// Returns the opposite party.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Applicant1 => Self::Applicant2,
            Self::Applicant2 => Self::Applicant1,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applicant1 => "applicant1",
            Self::Applicant2 => "applicant2",
        }
    }

    /// Returns the label used in validation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applicant1 => "Applicant 1",
            Self::Applicant2 => "Applicant 2",
        }
    }
}

impl fmt::Display for ApplicantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language an applicant wants to be contacted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguagePreference {
    /// English.
    #[default]
    English,
    /// Welsh.
    Welsh,
}

impl LanguagePreference {
    /// Returns `true` for Welsh.
    #[must_use]
    pub const fn is_welsh(self) -> bool {
        matches!(self, Self::Welsh)
    }

    /// Returns the ISO 639-1 code used in template names.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Welsh => "cy",
        }
    }
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// First address line.
    pub line1: String,
    /// Optional second address line.
    pub line2: Option<String>,
    /// Post town.
    pub town: String,
    /// Postcode.
    pub postcode: String,
    /// Country, when outside the United Kingdom.
    pub country: Option<String>,
}

impl Address {
    /// Creates an address from its mandatory lines.
    #[must_use]
    pub fn new(
        line1: impl Into<String>,
        town: impl Into<String>,
        postcode: impl Into<String>,
    ) -> Self {
        Self {
            line1: line1.into(),
            line2: None,
            town: town.into(),
            postcode: postcode.into(),
            country: None,
        }
    }

    /// Returns `true` when the address cannot be used to post a letter.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.line1.trim().is_empty() || (self.postcode.trim().is_empty() && self.country.is_none())
    }

    /// Returns the non-empty printable lines of the address.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        [
            Some(self.line1.as_str()),
            self.line2.as_deref(),
            Some(self.town.as_str()),
            Some(self.postcode.as_str()),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
    }
}

/// Legal representative acting for an applicant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solicitor {
    /// Solicitor name.
    pub name: String,
    /// Email address used for case correspondence.
    pub email: Option<String>,
    /// Firm name.
    pub firm_name: Option<String>,
    /// Firm's own reference for the case.
    pub reference: Option<String>,
    /// Firm postal address.
    pub address: Option<Address>,
}

impl Solicitor {
    /// Creates a solicitor with the given name and email.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Returns the email address when it is present and not blank.
    #[must_use]
    pub fn email_address(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }
}

/// An applicant (or respondent) on the case.
///
/// Representation is carried by [`Applicant::solicitor`]: an applicant is
/// represented exactly when a solicitor record is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Personal email address.
    pub email: Option<String>,
    /// Personal postal address.
    pub address: Option<Address>,
    /// Preferred correspondence language.
    pub language_preference: LanguagePreference,
    /// Applicant is not using the online service and is contacted by post.
    pub offline: bool,
    /// Postal address is outside the United Kingdom.
    pub address_overseas: bool,
    /// Legal representative, if any.
    pub solicitor: Option<Solicitor>,
    /// Applicant submitted answers in Welsh that need translating.
    pub used_welsh_translation_on_submission: bool,
}

impl Applicant {
    /// Creates an unrepresented, online, English-speaking applicant.
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    /// Sets the personal email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the postal address.
    #[must_use]
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Sets the legal representative.
    #[must_use]
    pub fn with_solicitor(mut self, solicitor: Solicitor) -> Self {
        self.solicitor = Some(solicitor);
        self
    }

    /// Sets the preferred correspondence language.
    #[must_use]
    pub fn with_language(mut self, language: LanguagePreference) -> Self {
        self.language_preference = language;
        self
    }

    /// Marks the applicant as contacted by post only.
    #[must_use]
    pub fn offline_only(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Returns `true` when a solicitor acts for this applicant.
    #[must_use]
    pub const fn is_represented(&self) -> bool {
        self.solicitor.is_some()
    }

    /// Returns the full name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_owned()
    }

    /// Returns the personal email address when it is present and not blank.
    #[must_use]
    pub fn email_address(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }

    /// Returns the postal address when it can be used to send a letter.
    #[must_use]
    pub fn postal_address(&self) -> Option<&Address> {
        self.address.as_ref().filter(|address| !address.is_blank())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}
