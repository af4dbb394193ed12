use std::sync::Arc;

use crate::config::AppConfig;
use crate::features::ops::OpsService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub ops: Arc<OpsService>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, ops: Arc<OpsService>) -> Self {
        Self { config, ops }
    }
}
