//! In-memory mock implementations of the repository traits.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::{consent_event::ConsentEvent, user::User},
    use_cases::{consent::EventRepo, user::UserRepo},
};

/// In-memory implementation of `UserRepo` for testing.
///
/// Mirrors the storage-boundary contract of the real adapter: identity
/// checks on create/update, idempotent delete, insertion order preserved.
#[derive(Default)]
pub struct InMemoryUserRepo {
    pub users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial users for testing.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    /// Get all users (for test assertions).
    pub fn get_all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepo for InMemoryUserRepo {
    async fn get(&self, id: ObjectId) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == Some(id))
            .cloned()
    }

    async fn get_by_email(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    async fn list(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        if user.id.is_some() {
            return Err(AppError::AlreadyIdentified("user"));
        }
        user.id = Some(ObjectId::new());
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let Some(id) = user.id else {
            return Err(AppError::MissingIdentity("user"));
        };
        let mut users = self.users.lock().unwrap();
        let stored = users
            .iter_mut()
            .find(|u| u.id == Some(id))
            .ok_or_else(|| AppError::Database(format!("User {id} not updated")))?;
        *stored = user.clone();
        Ok(user)
    }

    async fn delete(&self, id: ObjectId) {
        self.users.lock().unwrap().retain(|u| u.id != Some(id));
    }
}

/// In-memory implementation of `EventRepo` for testing.
#[derive(Default)]
pub struct InMemoryEventRepo {
    pub events: Mutex<Vec<ConsentEvent>>,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial events for testing.
    pub fn with_events(events: Vec<ConsentEvent>) -> Self {
        Self {
            events: Mutex::new(events),
        }
    }

    /// Get all events (for test assertions).
    pub fn get_all(&self) -> Vec<ConsentEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventRepo for InMemoryEventRepo {
    async fn create(&self, mut event: ConsentEvent) -> AppResult<ConsentEvent> {
        if event.id.is_some() {
            return Err(AppError::AlreadyIdentified("event"));
        }
        event.id = Some(ObjectId::new());
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn list(&self, user_id: Option<ObjectId>) -> AppResult<Vec<ConsentEvent>> {
        let events = self.events.lock().unwrap();
        Ok(match user_id {
            Some(id) => events.iter().filter(|e| e.user_id == id).cloned().collect(),
            None => events.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_event, create_test_user};

    #[tokio::test]
    async fn create_rejects_an_already_identified_user() {
        let repo = InMemoryUserRepo::new();

        let err = repo.create(create_test_user(|_| {})).await.unwrap_err();

        assert!(matches!(err, AppError::AlreadyIdentified("user")));
    }

    #[tokio::test]
    async fn update_rejects_a_user_without_identity() {
        let repo = InMemoryUserRepo::new();
        let mut user = create_test_user(|_| {});
        user.id = None;

        let err = repo.update(user).await.unwrap_err();

        assert!(matches!(err, AppError::MissingIdentity("user")));
    }

    #[tokio::test]
    async fn event_create_rejects_an_already_identified_event() {
        let repo = InMemoryEventRepo::new();

        let err = repo
            .create(create_test_event(ObjectId::new(), |_| {}))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::AlreadyIdentified("event")));
    }

    #[tokio::test]
    async fn delete_of_missing_id_is_a_no_op() {
        let repo = InMemoryUserRepo::with_users(vec![create_test_user(|_| {})]);

        repo.delete(ObjectId::new()).await;

        assert_eq!(repo.get_all().len(), 1);
    }
}
