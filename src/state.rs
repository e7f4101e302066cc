use crate::config::AppConfig;
use crate::db::DocumentStore;

pub struct AppState {
    // None when DATABASE_URL is unset or the store failed to open.
    pub store: Option<Box<dyn DocumentStore>>,
    pub config: AppConfig,
}
