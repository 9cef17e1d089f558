use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid email format {0}")]
    InvalidEmail(String),

    #[error("{0}")]
    AlreadyExisting(String),

    #[error("User with given id does not exist")]
    UserNotFound,

    #[error("Cannot create {0} that already has an id")]
    AlreadyIdentified(&'static str),

    #[error("Cannot update {0} without an id")]
    MissingIdentity(&'static str),

    #[error("{0}")]
    BadUserObject(String),

    #[error("{0}")]
    BadEventObject(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    BadEmailFormat,
    AlreadyExisting,
    UserDoesNotExist,
    UserNotFound,
    BadUserObject,
    BadEventObject,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadEmailFormat => "BAD_EMAIL_FORMAT",
            ErrorCode::AlreadyExisting => "ALREADY_EXISTING",
            ErrorCode::UserDoesNotExist => "USER_DOES_NOT_EXIST",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::BadUserObject => "BAD_USER_OBJECT",
            ErrorCode::BadEventObject => "BAD_EVENT_OBJECT",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
