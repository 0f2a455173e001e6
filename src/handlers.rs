use crate::chart::build_series;
use crate::errors::AppError;
use crate::models::{
    ActivityLog, ChartSeries, DashboardSnapshot, EntryForm, EntryUpdateRequest, Metric,
    SelectDateRequest, SuggestionResponse, ViewRequest,
};
use crate::state::AppState;
use crate::suggest::request_suggestion;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = today();
    let dashboard = state.dashboard.lock().await;
    Html(render_index(&dashboard.snapshot(today)))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.snapshot(today()))
}

pub async fn get_log(State(state): State<AppState>) -> Json<ActivityLog> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.log.clone())
}

pub async fn get_entry(State(state): State<AppState>) -> Json<EntryForm> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.saved_entry())
}

pub async fn update_entry(
    State(state): State<AppState>,
    Json(payload): Json<EntryUpdateRequest>,
) -> Result<Json<EntryForm>, AppError> {
    let metric = parse_metric(&payload.field)?;
    let mut dashboard = state.dashboard.lock().await;
    dashboard.update_field(metric, &payload.value, today())?;
    Ok(Json(dashboard.saved_entry()))
}

pub async fn select_date(
    State(state): State<AppState>,
    Json(payload): Json<SelectDateRequest>,
) -> Result<Json<DashboardSnapshot>, AppError> {
    let today = today();
    let mut dashboard = state.dashboard.lock().await;
    dashboard.select_date(&payload.date, today)?;
    Ok(Json(dashboard.snapshot(today)))
}

pub async fn toggle_edit(
    State(state): State<AppState>,
) -> Result<Json<DashboardSnapshot>, AppError> {
    let today = today();
    let mut dashboard = state.dashboard.lock().await;
    dashboard.toggle_edit_mode(today)?;
    Ok(Json(dashboard.snapshot(today)))
}

pub async fn set_view(
    State(state): State<AppState>,
    Json(payload): Json<ViewRequest>,
) -> Json<DashboardSnapshot> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.set_view(payload.view);
    Json(dashboard.snapshot(today()))
}

pub async fn get_chart(
    State(state): State<AppState>,
    Path(metric): Path<String>,
) -> Result<Json<ChartSeries>, AppError> {
    let metric = parse_metric(&metric)?;
    let dashboard = state.dashboard.lock().await;
    Ok(Json(build_series(&dashboard.log, metric)))
}

pub async fn suggestion(
    State(state): State<AppState>,
) -> Result<Json<SuggestionResponse>, AppError> {
    Ok(Json(request_suggestion(&state).await?))
}

fn parse_metric(value: &str) -> Result<Metric, AppError> {
    Metric::parse(value)
        .ok_or_else(|| AppError::bad_request("field must be 'steps', 'running' or 'sleep'"))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
