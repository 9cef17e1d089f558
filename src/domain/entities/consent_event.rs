use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::consent::Consent;

/// Audit record of one requested consent change. Never mutated or deleted
/// once created.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsentEvent {
    /// Assigned by the store on creation; `None` until persisted.
    pub id: Option<ObjectId>,
    /// Weak reference to the user the change applies to. The event outlives
    /// later updates to the user and is never cascaded.
    pub user_id: ObjectId,
    pub date: DateTime<Utc>,
    /// The changes requested in this event, not the user's full resulting
    /// consent set.
    pub consents: Vec<Consent>,
}
