use std::fs::File;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    adapters::http::app_state::AppState,
    infra::{config::AppConfig, mongo_persistence},
    use_cases::{
        consent::{ConsentRecorder, EventRepo},
        user::{UserDirectory, UserRepo},
    },
};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let mongo_arc = Arc::new(mongo_persistence(&config.mongo_uri, &config.mongo_db).await?);

    let user_repo_arc = mongo_arc.clone() as Arc<dyn UserRepo>;
    let event_repo_arc = mongo_arc as Arc<dyn EventRepo>;

    let user_directory = UserDirectory::new(user_repo_arc);
    let consent_recorder = ConsentRecorder::new(user_directory.clone(), event_repo_arc);

    Ok(AppState {
        config: Arc::new(config),
        user_directory: Arc::new(user_directory),
        consent_recorder: Arc::new(consent_recorder),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "consent_api=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs)
    let file = File::create("app.log").expect("cannot create log file");
    let json_layer = fmt::layer()
        .json()
        .with_writer(file)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
