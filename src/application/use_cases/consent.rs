use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::application::use_cases::user::UserDirectory;
use crate::domain::entities::{consent::Consent, consent_event::ConsentEvent, user::User};

/// Append/list access to the `events` collection. Events are immutable once
/// created.
#[async_trait]
pub trait EventRepo: Send + Sync {
    async fn create(&self, event: ConsentEvent) -> AppResult<ConsentEvent>;
    /// All events, or only the given user's. Insertion order as maintained
    /// by the store; no explicit sort is imposed.
    async fn list(&self, user_id: Option<ObjectId>) -> AppResult<Vec<ConsentEvent>>;
}

/// Reconciles a user's consent state with an incoming consent change and
/// appends the audit event.
#[derive(Clone)]
pub struct ConsentRecorder {
    users: UserDirectory,
    events: Arc<dyn EventRepo>,
}

impl ConsentRecorder {
    pub fn new(users: UserDirectory, events: Arc<dyn EventRepo>) -> Self {
        Self { users, events }
    }

    /// Merge the event's consents into the referenced user and persist both
    /// the updated user and the new event.
    ///
    /// The two writes are issued together and both are awaited; they are not
    /// transactional. On partial failure the user-update error is reported
    /// first.
    #[instrument(skip(self, event), fields(user_id = %event.user_id))]
    pub async fn create(&self, event: ConsentEvent) -> AppResult<ConsentEvent> {
        let mut user = self
            .users
            .get(event.user_id)
            .await
            .ok_or(AppError::UserNotFound)?;

        for consent in &event.consents {
            set_user_consent(&mut user, *consent);
        }

        let (updated, created) = tokio::join!(self.users.update(user), self.events.create(event));
        updated?;
        created
    }

    pub async fn list(&self, user_id: Option<ObjectId>) -> AppResult<Vec<ConsentEvent>> {
        self.events.list(user_id).await
    }
}

/// Last write wins per kind; the merged entry always moves to the end of the
/// sequence.
fn set_user_consent(user: &mut User, consent: Consent) {
    user.consents.retain(|existing| existing.kind != consent.kind);
    user.consents.push(consent);
}
