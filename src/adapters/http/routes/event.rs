use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::{app_state::AppState, routes::user::ConsentDto},
    app_error::{AppError, AppResult},
    domain::entities::consent_event::ConsentEvent,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_events).post(create_event))
}

#[derive(Debug, Serialize, Deserialize)]
struct EventUserDto {
    id: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ConsentEventDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    user: EventUserDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<DateTime<Utc>>,
    consents: Vec<ConsentDto>,
}

impl ConsentEventDto {
    /// Incoming events never carry an id or a date; the id comes from the
    /// store and `date` is stamped by the handler at request time.
    fn into_event(self, date: DateTime<Utc>) -> AppResult<ConsentEvent> {
        let user_id = ObjectId::parse_str(&self.user.id)
            .map_err(|_| AppError::BadEventObject(format!("Incorrect user id {}", self.user.id)))?;
        Ok(ConsentEvent {
            id: None,
            user_id,
            date,
            consents: self.consents.into_iter().map(ConsentDto::into_consent).collect(),
        })
    }

    fn from_event(event: &ConsentEvent) -> Self {
        Self {
            id: event.id.map(|id| id.to_hex()),
            user: EventUserDto {
                id: event.user_id.to_hex(),
            },
            date: Some(event.date),
            consents: event.consents.iter().map(ConsentDto::from_consent).collect(),
        }
    }
}

async fn create_event(
    State(app_state): State<AppState>,
    Json(dto): Json<ConsentEventDto>,
) -> AppResult<impl IntoResponse> {
    let event = dto.into_event(Utc::now())?;
    let created = app_state.consent_recorder.create(event).await?;
    Ok(Json(ConsentEventDto::from_event(&created)))
}

#[derive(Debug, Deserialize)]
struct ListEventsQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

async fn list_events(
    State(app_state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> AppResult<impl IntoResponse> {
    let user_id = match query.user_id {
        Some(raw) => Some(
            ObjectId::parse_str(&raw)
                .map_err(|_| AppError::BadEventObject(format!("Incorrect user id {raw}")))?,
        ),
        None => None,
    };
    let events = app_state.consent_recorder.list(user_id).await?;
    let body: Vec<ConsentEventDto> = events.iter().map(ConsentEventDto::from_event).collect();
    Ok(Json(body))
}
