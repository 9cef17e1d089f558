use crate::app_error::{AppError, ErrorCode};
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        match self {
            AppError::InvalidEmail(_) => error_resp(
                StatusCode::BAD_REQUEST,
                ErrorCode::BadEmailFormat,
                Some(self.to_string()),
            ),
            AppError::AlreadyExisting(msg) => {
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::AlreadyExisting, Some(msg))
            }
            AppError::UserNotFound => error_resp(
                StatusCode::BAD_REQUEST,
                ErrorCode::UserDoesNotExist,
                Some(self.to_string()),
            ),
            AppError::BadUserObject(msg) => {
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::BadUserObject, Some(msg))
            }
            AppError::BadEventObject(msg) => {
                error_resp(StatusCode::BAD_REQUEST, ErrorCode::BadEventObject, Some(msg))
            }
            // Identity misuse and storage faults are surfaced generically;
            // the detail stays in the log line above.
            AppError::AlreadyIdentified(_)
            | AppError::MissingIdentity(_)
            | AppError::Database(_)
            | AppError::Internal(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError, None)
            }
        }
    }
}

pub(crate) fn error_resp(status: StatusCode, code: ErrorCode, message: Option<String>) -> Response {
    let body = match message {
        Some(msg) => serde_json::json!({ "code": code.as_str(), "message": msg }),
        None => serde_json::json!({ "code": code.as_str() }),
    };
    (status, Json(body)).into_response()
}
