//! Template-backed document renderer keeping rendered output in memory.

use std::sync::{Arc, RwLock};

use minijinja::{Environment, UndefinedBehavior, Value};

use crate::case::domain::{DocumentId, DocumentReference, DocumentType, LanguagePreference};
use crate::document::{
    domain::{DocumentContent, digest_uuid},
    ports::{DocumentRenderer, RenderError, RenderResult},
};

const NOTICE_OF_PROCEEDINGS_EN: &str = "\
Case reference: {{ case_reference }}
Dear {{ recipient_name }},
{% if is_joint %}Your joint application with your {{ partner_term }} {{ partner_name }} was issued on {{ issue_date }}.\
{% else %}An application involving your {{ partner_term }} {{ partner_name }} was issued on {{ issue_date }}.{% endif %}
{% if due_date %}You must respond by {{ due_date }}.{% endif %}
{% if access_code %}Your access code is {{ access_code }}.{% endif %}";

const NOTICE_OF_PROCEEDINGS_CY: &str = "\
Cyfeirnod yr achos: {{ case_reference }}
Annwyl {{ recipient_name }},
{% if is_joint %}Cyhoeddwyd eich cais ar y cyd gyda {{ partner_name }} ar {{ issue_date }}.\
{% else %}Cyhoeddwyd cais yn ymwneud â {{ partner_name }} ar {{ issue_date }}.{% endif %}
{% if due_date %}Rhaid i chi ymateb erbyn {{ due_date }}.{% endif %}
{% if access_code %}Eich cod mynediad yw {{ access_code }}.{% endif %}";

const CONDITIONAL_ORDER_CERTIFICATE_EN: &str = "\
Case reference: {{ case_reference }}
Certificate of entitlement to a conditional order
{{ applicant1_name }} and {{ applicant2_name }}
Pronounced on {{ granted_date }}{% if court %} at {{ court }}{% endif %}.
A final order may be applied for from {{ final_order_eligible_from }}.";

const CONDITIONAL_ORDER_CERTIFICATE_CY: &str = "\
Cyfeirnod yr achos: {{ case_reference }}
Tystysgrif hawl i orchymyn amodol
{{ applicant1_name }} a {{ applicant2_name }}
Cyhoeddwyd ar {{ granted_date }}{% if court %} yn {{ court }}{% endif %}.
Gellir gwneud cais am orchymyn terfynol o {{ final_order_eligible_from }}.";

const FINAL_ORDER_GRANT_EN: &str = "\
Case reference: {{ case_reference }}
Final order
{% if is_divorce %}The marriage{% else %}The civil partnership{% endif %} of {{ applicant1_name }} and {{ applicant2_name }}\
{% if marriage_date %} formed on {{ marriage_date }}{% endif %} was ended on {{ granted_date }}.";

const FINAL_ORDER_GRANT_CY: &str = "\
Cyfeirnod yr achos: {{ case_reference }}
Gorchymyn terfynol
{% if is_divorce %}Daeth priodas{% else %}Daeth partneriaeth sifil{% endif %} {{ applicant1_name }} a {{ applicant2_name }}\
{% if marriage_date %} a ffurfiwyd ar {{ marriage_date }}{% endif %} i ben ar {{ granted_date }}.";

const NOTIFICATION_LETTER_EN: &str = "\
{{ recipient_name }}
{% for line in address_lines %}{{ line }}
{% endfor %}
Regarding: {{ template_id }}
{% for key, value in vars|items %}{{ key }}: {{ value }}
{% endfor %}";

const NOTIFICATION_LETTER_CY: &str = "\
{{ recipient_name }}
{% for line in address_lines %}{{ line }}
{% endfor %}
Ynghylch: {{ template_id }}
{% for key, value in vars|items %}{{ key }}: {{ value }}
{% endfor %}";

const TEMPLATES: [(&str, &str); 8] = [
    ("notice_of_proceedings.en", NOTICE_OF_PROCEEDINGS_EN),
    ("notice_of_proceedings.cy", NOTICE_OF_PROCEEDINGS_CY),
    ("conditional_order_certificate.en", CONDITIONAL_ORDER_CERTIFICATE_EN),
    ("conditional_order_certificate.cy", CONDITIONAL_ORDER_CERTIFICATE_CY),
    ("final_order_grant.en", FINAL_ORDER_GRANT_EN),
    ("final_order_grant.cy", FINAL_ORDER_GRANT_CY),
    ("notification_letter.en", NOTIFICATION_LETTER_EN),
    ("notification_letter.cy", NOTIFICATION_LETTER_CY),
];

/// A document produced by [`TemplateDocumentRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Reference returned to the caller.
    pub reference: DocumentReference,
    /// Rendered text.
    pub body: String,
}

/// Renders documents from built-in English and Welsh templates.
///
/// Document identifiers are digests of the rendered output, so rendering the
/// same content twice yields the same reference.
#[derive(Debug, Clone)]
pub struct TemplateDocumentRenderer {
    environment: Arc<Environment<'static>>,
    rendered: Arc<RwLock<Vec<RenderedDocument>>>,
}

impl TemplateDocumentRenderer {
    /// Creates a renderer with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when a built-in template fails to
    /// parse.
    pub fn new() -> RenderResult<Self> {
        let mut environment = Environment::new();
        environment.set_undefined_behavior(UndefinedBehavior::Strict);
        for (name, source) in TEMPLATES {
            environment
                .add_template(name, source)
                .map_err(|err| RenderError::Template {
                    document_type: document_type_of(name),
                    reason: err.to_string(),
                })?;
        }
        Ok(Self {
            environment: Arc::new(environment),
            rendered: Arc::default(),
        })
    }

    /// Returns every document rendered so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Storage`] when lock acquisition fails.
    pub fn rendered(&self) -> RenderResult<Vec<RenderedDocument>> {
        let rendered = self
            .rendered
            .read()
            .map_err(|err| RenderError::storage(std::io::Error::other(err.to_string())))?;
        Ok(rendered.clone())
    }
}

impl DocumentRenderer for TemplateDocumentRenderer {
    fn render(
        &self,
        content: &DocumentContent,
        language: LanguagePreference,
    ) -> RenderResult<DocumentReference> {
        let document_type = content.document_type();
        let name = format!("{}.{}", document_type.as_str(), language.code());
        let template = self
            .environment
            .get_template(&name)
            .map_err(|_| RenderError::MissingTemplate {
                document_type,
                language,
            })?;
        let body = template
            .render(Value::from_serialize(content))
            .map_err(|err| RenderError::Template {
                document_type,
                reason: err.to_string(),
            })?;

        let party = content.party();
        let party_label = party.map_or("case", |role| role.as_str());
        let reference = DocumentReference {
            id: DocumentId::from_uuid(digest_uuid(&[&name, party_label, &body])),
            document_type,
            file_name: format!("{document_type}-{party_label}-{}.pdf", language.code()),
            language,
            party,
        };

        let mut rendered = self
            .rendered
            .write()
            .map_err(|err| RenderError::storage(std::io::Error::other(err.to_string())))?;
        rendered.push(RenderedDocument {
            reference: reference.clone(),
            body,
        });
        tracing::info!(%document_type, document_id = %reference.id, "document rendered");
        Ok(reference)
    }
}

fn document_type_of(template_name: &str) -> DocumentType {
    [
        DocumentType::NoticeOfProceedings,
        DocumentType::ConditionalOrderCertificate,
        DocumentType::FinalOrderGrant,
    ]
    .into_iter()
    .find(|candidate| template_name.starts_with(candidate.as_str()))
    .unwrap_or(DocumentType::NotificationLetter)
}
