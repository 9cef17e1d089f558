use mongodb::{Collection, Database};

use crate::app_error::AppError;

pub mod event;
pub mod user;

const USERS_COLLECTION: &str = "users";
const EVENTS_COLLECTION: &str = "events";

/// Gateway to the document store: one shared `Database` handle, constructed
/// once at startup, exposing the two typed collections.
#[derive(Clone)]
pub struct MongoPersistence {
    db: Database,
}

impl MongoPersistence {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<user::UserDoc> {
        self.db.collection(USERS_COLLECTION)
    }

    fn events(&self) -> Collection<event::EventDoc> {
        self.db.collection(EVENTS_COLLECTION)
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::Database(err.to_string())
    }
}
