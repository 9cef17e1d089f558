use mongodb::bson::oid::ObjectId;

use crate::domain::entities::consent::Consent;

/// A registered user and their current consent choices.
///
/// `consents` holds at most one entry per [`ConsentKind`]; that invariant is
/// enforced by the consent recorder, not by the store.
///
/// [`ConsentKind`]: crate::domain::entities::consent::ConsentKind
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Assigned by the store on creation; `None` until persisted.
    pub id: Option<ObjectId>,
    pub email: String,
    pub consents: Vec<Consent>,
}
