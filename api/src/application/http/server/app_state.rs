use std::sync::Arc;

use nutriscan_core::application::NutriScanService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriScanService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriScanService) -> Self {
        Self { args, service }
    }
}
