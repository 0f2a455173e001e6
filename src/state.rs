use crate::dashboard::Dashboard;
use crate::gemini::TextGenerator;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Mutex<Dashboard>>,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(today: NaiveDate, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            dashboard: Arc::new(Mutex::new(Dashboard::new(today))),
            generator,
        }
    }
}
