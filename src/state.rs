use crate::config::Config;
use crate::store::CourseStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: CourseStore,
    pub config: Arc<Config>,
}
