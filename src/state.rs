use std::sync::Mutex;

use crate::config::AppConfig;
use crate::store::FleetStore;

pub struct AppState {
    pub store: Mutex<FleetStore>,
    pub config: AppConfig,
}
