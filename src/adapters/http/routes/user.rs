use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::{app_error_impl::error_resp, app_state::AppState},
    app_error::{AppError, AppResult, ErrorCode},
    domain::entities::{
        consent::{Consent, ConsentKind},
        user::User,
    },
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ConsentDto {
    pub id: ConsentKind,
    pub enabled: bool,
}

impl ConsentDto {
    pub(crate) fn from_consent(consent: &Consent) -> Self {
        Self {
            id: consent.kind,
            enabled: consent.enabled,
        }
    }

    pub(crate) fn into_consent(self) -> Consent {
        Consent {
            kind: self.id,
            enabled: self.enabled,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct UserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    email: String,
    consents: Vec<ConsentDto>,
}

impl UserDto {
    fn from_user(user: &User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()),
            email: user.email.clone(),
            consents: user.consents.iter().map(ConsentDto::from_consent).collect(),
        }
    }

    fn into_user(self) -> AppResult<User> {
        let id = match self.id {
            Some(raw) => Some(
                ObjectId::parse_str(&raw)
                    .map_err(|_| AppError::BadUserObject(format!("Incorrect user id {raw}")))?,
            ),
            None => None,
        };
        Ok(User {
            id,
            email: self.email,
            consents: self.consents.into_iter().map(ConsentDto::into_consent).collect(),
        })
    }
}

async fn list_users(State(app_state): State<AppState>) -> Json<Vec<UserDto>> {
    let users = app_state.user_directory.list().await;
    Json(users.iter().map(UserDto::from_user).collect())
}

async fn get_user(State(app_state): State<AppState>, Path(id): Path<String>) -> Response {
    let found = match ObjectId::parse_str(&id) {
        Ok(oid) => app_state.user_directory.get(oid).await,
        Err(_) => None,
    };
    match found {
        Some(user) => Json(UserDto::from_user(&user)).into_response(),
        None => error_resp(
            StatusCode::NOT_FOUND,
            ErrorCode::UserNotFound,
            Some(format!("No user with id {id} found")),
        ),
    }
}

async fn create_user(
    State(app_state): State<AppState>,
    Json(dto): Json<UserDto>,
) -> AppResult<impl IntoResponse> {
    let user = dto.into_user()?;
    let created = app_state.user_directory.create(user).await?;
    Ok(Json(UserDto::from_user(&created)))
}

async fn update_user(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(mut dto): Json<UserDto>,
) -> AppResult<impl IntoResponse> {
    // The path id wins over whatever the body carries.
    dto.id = Some(id);
    let user = dto.into_user()?;
    let updated = app_state.user_directory.update(user).await?;
    Ok(Json(UserDto::from_user(&updated)))
}

async fn delete_user(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let oid = ObjectId::parse_str(&id).map_err(|_| AppError::UserNotFound)?;
    app_state.user_directory.delete(oid).await?;
    Ok(StatusCode::NO_CONTENT)
}
