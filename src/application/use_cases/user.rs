use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::application::validators::is_valid_email;
use crate::domain::entities::user::User;

/// Storage access to the `users` collection.
///
/// The read-path operations (`get`, `get_by_email`, `list`, `delete`) absorb
/// storage faults: the adapter logs them and reports absence, so callers
/// cannot tell "not found" from "store unreachable" through these four.
/// `create` and `update` propagate storage faults.
#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn get(&self, id: ObjectId) -> Option<User>;
    async fn get_by_email(&self, email: &str) -> Option<User>;
    async fn list(&self) -> Vec<User>;
    async fn create(&self, user: User) -> AppResult<User>;
    /// Full overwrite keyed by id; omitted fields are cleared.
    async fn update(&self, user: User) -> AppResult<User>;
    /// Idempotent; deleting a missing id is not an error.
    async fn delete(&self, id: ObjectId);
}

/// Domain rules for the user lifecycle: email validity, email uniqueness,
/// existence checks on update and delete.
#[derive(Clone)]
pub struct UserDirectory {
    repo: Arc<dyn UserRepo>,
}

impl UserDirectory {
    pub fn new(repo: Arc<dyn UserRepo>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn create(&self, user: User) -> AppResult<User> {
        check_email(&user)?;
        if user.id.is_some() {
            return Err(AppError::AlreadyExisting("Cannot create user with id".into()));
        }
        if self.repo.get_by_email(&user.email).await.is_some() {
            return Err(AppError::AlreadyExisting(format!(
                "Email {} already exists",
                user.email
            )));
        }
        self.repo.create(user).await
    }

    pub async fn list(&self) -> Vec<User> {
        self.repo.list().await
    }

    pub async fn get(&self, id: ObjectId) -> Option<User> {
        self.repo.get(id).await
    }

    #[instrument(skip(self, user), fields(user_id = ?user.id))]
    pub async fn update(&self, user: User) -> AppResult<User> {
        check_email(&user)?;
        let Some(id) = user.id else {
            return Err(AppError::UserNotFound);
        };
        if self.repo.get(id).await.is_none() {
            return Err(AppError::UserNotFound);
        }
        if let Some(existing) = self.repo.get_by_email(&user.email).await {
            if existing.id != user.id {
                return Err(AppError::AlreadyExisting(format!(
                    "Email {} already exists",
                    user.email
                )));
            }
        }
        self.repo.update(user).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: ObjectId) -> AppResult<()> {
        if self.repo.get(id).await.is_none() {
            return Err(AppError::UserNotFound);
        }
        self.repo.delete(id).await;
        Ok(())
    }
}

fn check_email(user: &User) -> AppResult<()> {
    if !is_valid_email(&user.email) {
        return Err(AppError::InvalidEmail(user.email.clone()));
    }
    Ok(())
}
