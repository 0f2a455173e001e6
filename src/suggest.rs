use crate::dashboard::Dashboard;
use crate::errors::AppError;
use crate::models::{ActivityLog, Metric, SuggestionResponse, SuggestionStatus, format_metric};
use crate::state::AppState;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

pub const MISSING_KEY: &str = "API key is missing. Please set it up correctly.";
pub const FAILED: &str = "Failed to fetch suggestion.";
pub const IN_FLIGHT: &str = "A suggestion request is already in progress.";

static BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));

pub fn build_prompt(log: &ActivityLog) -> String {
    let lines = log
        .iter()
        .map(|(date, entry)| {
            format!(
                "Date: {date}, Steps: {}, Running: {} km, Sleep: {} hours",
                format_metric(entry.value_or_zero(Metric::Steps)),
                format_metric(entry.value_or_zero(Metric::Running)),
                format_metric(entry.value_or_zero(Metric::Sleep)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Here is the daily activity data for the entire month:\n{lines}\n\n\
         Suggest a health improvement plan for the next day."
    )
}

/// Turns model output into display HTML: escape first, then bold spans and
/// line breaks.
pub fn format_response(text: &str) -> String {
    let escaped = escape_html(text);
    BOLD.replace_all(&escaped, "<br/><strong>$1</strong><br/>")
        .replace('\n', "<br/>")
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Clears `loading` if a suggestion round is dropped before it writes its
/// result back, e.g. when the client disconnects mid-request.
struct LoadingGuard {
    dashboard: Arc<Mutex<Dashboard>>,
    armed: bool,
}

impl LoadingGuard {
    fn new(dashboard: &Arc<Mutex<Dashboard>>) -> Self {
        Self {
            dashboard: Arc::clone(dashboard),
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("suggestion request dropped before completion");
        if let Ok(mut dashboard) = self.dashboard.try_lock() {
            dashboard.loading = false;
            return;
        }
        if let Ok(handle) = Handle::try_current() {
            let dashboard = Arc::clone(&self.dashboard);
            handle.spawn(async move {
                dashboard.lock().await.loading = false;
            });
        }
    }
}

/// Runs one suggestion round: idle -> loading -> ready or failed. The dashboard
/// lock is released while the generator is working.
pub async fn request_suggestion(state: &AppState) -> Result<SuggestionResponse, AppError> {
    let generator = Arc::clone(&state.generator);

    let prompt = {
        let mut dashboard = state.dashboard.lock().await;
        if !generator.has_credential() {
            dashboard.suggestion = MISSING_KEY.to_string();
            return Ok(SuggestionResponse {
                status: SuggestionStatus::MissingKey,
                suggestion: MISSING_KEY.to_string(),
            });
        }
        if dashboard.loading {
            return Err(AppError::conflict(IN_FLIGHT));
        }
        dashboard.loading = true;
        dashboard.suggestion.clear();
        build_prompt(&dashboard.log)
    };
    let guard = LoadingGuard::new(&state.dashboard);

    info!(prompt_len = prompt.len(), "requesting suggestion");
    let (status, suggestion) = match generator.generate(&prompt).await {
        Ok(text) => (SuggestionStatus::Ready, format_response(&text)),
        Err(err) => {
            error!("error fetching suggestion: {err}");
            (SuggestionStatus::Failed, FAILED.to_string())
        }
    };

    let mut dashboard = state.dashboard.lock().await;
    dashboard.loading = false;
    dashboard.suggestion = suggestion.clone();
    guard.disarm();

    Ok(SuggestionResponse { status, suggestion })
}
