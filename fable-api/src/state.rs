use std::sync::Arc;
use fable_store::SettingsStore;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<dyn SettingsStore>,
}

impl AppState {
    pub fn new(settings: Arc<dyn SettingsStore>) -> Self {
        Self { settings }
    }
}
