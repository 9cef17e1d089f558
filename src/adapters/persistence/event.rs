use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::persistence::MongoPersistence,
    app_error::{AppError, AppResult},
    domain::entities::{consent::Consent, consent_event::ConsentEvent},
    use_cases::consent::EventRepo,
};

// Consent event document as stored in the `events` collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct EventDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "userId")]
    pub user_id: ObjectId,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
    pub consents: Vec<Consent>,
}

impl From<ConsentEvent> for EventDoc {
    fn from(event: ConsentEvent) -> Self {
        Self {
            id: event.id,
            user_id: event.user_id,
            date: event.date,
            consents: event.consents,
        }
    }
}

impl From<EventDoc> for ConsentEvent {
    fn from(doc: EventDoc) -> Self {
        Self {
            id: doc.id,
            user_id: doc.user_id,
            date: doc.date,
            consents: doc.consents,
        }
    }
}

#[async_trait]
impl EventRepo for MongoPersistence {
    async fn create(&self, event: ConsentEvent) -> AppResult<ConsentEvent> {
        if event.id.is_some() {
            return Err(AppError::AlreadyIdentified("event"));
        }
        let mut doc = EventDoc::from(event);
        let result = self.events().insert_one(&doc).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Database("Event not inserted".into()))?;
        doc.id = Some(id);
        Ok(ConsentEvent::from(doc))
    }

    async fn list(&self, user_id: Option<ObjectId>) -> AppResult<Vec<ConsentEvent>> {
        let filter = match user_id {
            Some(id) => doc! { "userId": id },
            None => doc! {},
        };
        let cursor = self.events().find(filter).await?;
        let docs: Vec<EventDoc> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(ConsentEvent::from).collect())
    }
}
