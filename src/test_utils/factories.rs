//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible
//! defaults. Use the closure parameter to override specific fields as needed.

use chrono::{TimeZone, Utc};
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::{
    consent::{Consent, ConsentKind},
    consent_event::ConsentEvent,
    user::User,
};

/// Create a persisted test user (id already assigned) with sensible defaults.
pub fn create_test_user(overrides: impl FnOnce(&mut User)) -> User {
    let mut user = User {
        id: Some(ObjectId::new()),
        email: "user@example.com".to_string(),
        consents: vec![],
    };
    overrides(&mut user);
    user
}

/// Create an unpersisted user (no id), as handed to `create`.
pub fn new_user(overrides: impl FnOnce(&mut User)) -> User {
    let mut user = User {
        id: None,
        email: "user@example.com".to_string(),
        consents: vec![],
    };
    overrides(&mut user);
    user
}

/// Create an unpersisted consent event for the given user.
pub fn new_event(user_id: ObjectId, consents: Vec<Consent>) -> ConsentEvent {
    ConsentEvent {
        id: None,
        user_id,
        date: test_datetime(),
        consents,
    }
}

/// Create a persisted test event (id already assigned) with sensible defaults.
pub fn create_test_event(
    user_id: ObjectId,
    overrides: impl FnOnce(&mut ConsentEvent),
) -> ConsentEvent {
    let mut event = ConsentEvent {
        id: Some(ObjectId::new()),
        user_id,
        date: test_datetime(),
        consents: vec![consent(ConsentKind::EmailNotifications, true)],
    };
    overrides(&mut event);
    event
}

pub fn consent(kind: ConsentKind, enabled: bool) -> Consent {
    Consent { kind, enabled }
}

fn test_datetime() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}
