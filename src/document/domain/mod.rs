//! Document domain: typed content and letter packs.

mod content;
mod letters;

pub use content::{
    ConditionalOrderCertificate, DocumentContent, FinalOrderGrant, MissingContentError,
    NoticeOfProceedings, NotificationLetter,
};
pub use letters::{LetterPackId, LetterRecipient, digest_uuid};
