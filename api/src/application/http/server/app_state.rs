use std::sync::Arc;

use mealcheck_core::application::MealCheckService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<MealCheckService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MealCheckService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
