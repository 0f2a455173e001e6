pub mod app;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod gemini;
pub mod handlers;
pub mod models;
pub mod state;
pub mod suggest;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
