use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::persistence::MongoPersistence,
    app_error::{AppError, AppResult},
    domain::entities::{consent::Consent, user::User},
    use_cases::user::UserRepo,
};

// User document as stored in the `users` collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub consents: Vec<Consent>,
}

impl From<User> for UserDoc {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            consents: user.consents,
        }
    }
}

impl From<UserDoc> for User {
    fn from(doc: UserDoc) -> Self {
        Self {
            id: doc.id,
            email: doc.email,
            consents: doc.consents,
        }
    }
}

#[async_trait]
impl UserRepo for MongoPersistence {
    async fn get(&self, id: ObjectId) -> Option<User> {
        match self.users().find_one(doc! { "_id": id }).await {
            Ok(found) => found.map(User::from),
            Err(err) => {
                tracing::error!(user_id = %id, error = %err, "Cannot get user from database");
                None
            }
        }
    }

    async fn get_by_email(&self, email: &str) -> Option<User> {
        match self.users().find_one(doc! { "email": email }).await {
            Ok(found) => found.map(User::from),
            Err(err) => {
                tracing::error!(email, error = %err, "Cannot get user by email from database");
                None
            }
        }
    }

    async fn list(&self) -> Vec<User> {
        let docs: Result<Vec<UserDoc>, _> = match self.users().find(doc! {}).await {
            Ok(cursor) => cursor.try_collect().await,
            Err(err) => Err(err),
        };
        match docs {
            Ok(docs) => docs.into_iter().map(User::from).collect(),
            Err(err) => {
                tracing::error!(error = %err, "Cannot list users from database");
                Vec::new()
            }
        }
    }

    async fn create(&self, user: User) -> AppResult<User> {
        if user.id.is_some() {
            return Err(AppError::AlreadyIdentified("user"));
        }
        let mut doc = UserDoc::from(user);
        let result = self.users().insert_one(&doc).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::Database(format!("User {} not inserted", doc.email)))?;
        doc.id = Some(id);
        Ok(User::from(doc))
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let Some(id) = user.id else {
            return Err(AppError::MissingIdentity("user"));
        };
        let doc = UserDoc::from(user);
        let result = self.users().replace_one(doc! { "_id": id }, &doc).await?;
        if result.matched_count == 0 {
            return Err(AppError::Database(format!("User {id} not updated")));
        }
        Ok(User::from(doc))
    }

    async fn delete(&self, id: ObjectId) {
        if let Err(err) = self.users().delete_one(doc! { "_id": id }).await {
            tracing::error!(user_id = %id, error = %err, "Cannot delete user from database");
        }
    }
}
