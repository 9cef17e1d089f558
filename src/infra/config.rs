use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    /// Connection endpoint for the document store. Required; startup fails
    /// without it.
    pub mongo_uri: String,
    /// Name of the database holding the `users` and `events` collections.
    /// Required; startup fails without it.
    pub mongo_db: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let mongo_uri: String = get_env("MONGO_URI");
        let mongo_db: String = get_env("MONGO_DB");

        Self {
            bind_addr,
            cors_origin,
            mongo_uri,
            mongo_db,
        }
    }
}
