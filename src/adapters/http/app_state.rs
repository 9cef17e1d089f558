use std::sync::Arc;

use crate::{
    infra::config::AppConfig,
    use_cases::{consent::ConsentRecorder, user::UserDirectory},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub user_directory: Arc<UserDirectory>,
    pub consent_recorder: Arc<ConsentRecorder>,
}
