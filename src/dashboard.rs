use crate::errors::AppError;
use crate::models::{
    ActiveView, ActivityLog, DailyEntry, DashboardSnapshot, EntryForm, Metric, coerce_metric,
};
use chrono::NaiveDate;
use tracing::{debug, warn};

pub const FUTURE_ENTRY: &str = "Cannot enter data for future dates.";
pub const FUTURE_SELECTION: &str = "Cannot select future dates.";
pub const FUTURE_EDIT: &str = "Cannot edit data for future dates.";
pub const EDIT_MODE_OFF: &str = "Enable edit mode before changing data.";

/// Everything the dashboard page shows. Every operation takes the current
/// date explicitly so callers decide what "today" is.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub log: ActivityLog,
    pub selected_date: NaiveDate,
    pub edit_mode: bool,
    pub active_view: ActiveView,
    pub loading: bool,
    pub suggestion: String,
}

impl Dashboard {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            log: ActivityLog::new(),
            selected_date: today,
            edit_mode: false,
            active_view: ActiveView::default(),
            loading: false,
            suggestion: String::new(),
        }
    }

    pub fn selected_key(&self) -> String {
        date_key(self.selected_date)
    }

    /// The selected date's entry as the form shows it.
    pub fn saved_entry(&self) -> EntryForm {
        EntryForm::from(self.log.get(&self.selected_key()))
    }

    pub fn select_date(&mut self, raw: &str, today: NaiveDate) -> Result<(), AppError> {
        let date = parse_date(raw)?;
        if date > today {
            warn!(%date, "rejected future date selection");
            return Err(AppError::rejected(FUTURE_SELECTION));
        }
        self.selected_date = date;
        self.edit_mode = false;
        Ok(())
    }

    pub fn toggle_edit_mode(&mut self, today: NaiveDate) -> Result<bool, AppError> {
        if self.selected_date > today {
            warn!(date = %self.selected_date, "rejected edit toggle for future date");
            return Err(AppError::rejected(FUTURE_EDIT));
        }
        self.edit_mode = !self.edit_mode;
        Ok(self.edit_mode)
    }

    pub fn update_field(
        &mut self,
        metric: Metric,
        raw: &str,
        today: NaiveDate,
    ) -> Result<DailyEntry, AppError> {
        if self.selected_date > today {
            warn!(date = %self.selected_date, %metric, "rejected entry for future date");
            return Err(AppError::rejected(FUTURE_ENTRY));
        }
        if !self.edit_mode {
            return Err(AppError::rejected(EDIT_MODE_OFF));
        }

        let value = coerce_metric(raw);
        let key = self.selected_key();
        let entry = self.log.entry(key.clone()).or_default();
        entry.set(metric, value);
        debug!(date = %key, %metric, value, "entry updated");
        Ok(*entry)
    }

    pub fn set_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    pub fn snapshot(&self, today: NaiveDate) -> DashboardSnapshot {
        DashboardSnapshot {
            today: date_key(today),
            selected_date: self.selected_key(),
            edit_mode: self.edit_mode,
            active_view: self.active_view,
            loading: self.loading,
            suggestion: self.suggestion.clone(),
            entry: self.saved_entry(),
        }
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request(format!("invalid date '{raw}', expected YYYY-MM-DD")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    fn editing(today: NaiveDate) -> Dashboard {
        let mut dashboard = Dashboard::new(today);
        dashboard.toggle_edit_mode(today).unwrap();
        dashboard
    }

    #[test]
    fn new_dashboard_selects_today() {
        let dashboard = Dashboard::new(today());
        assert_eq!(dashboard.selected_key(), "2026-01-05");
        assert!(!dashboard.edit_mode);
        assert_eq!(dashboard.active_view, ActiveView::Analytics);
    }

    #[test]
    fn future_date_selection_is_rejected_and_state_kept() {
        let mut dashboard = editing(today());
        let before = dashboard.selected_date;

        let err = dashboard.select_date("2026-01-06", today()).unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, FUTURE_SELECTION);
        assert_eq!(dashboard.selected_date, before);
        assert!(dashboard.edit_mode);
    }

    #[test]
    fn selecting_a_past_date_exits_edit_mode() {
        let mut dashboard = editing(today());
        dashboard.select_date("2025-12-31", today()).unwrap();
        assert_eq!(dashboard.selected_key(), "2025-12-31");
        assert!(!dashboard.edit_mode);
    }

    #[test]
    fn today_is_not_a_future_date() {
        let mut dashboard = Dashboard::new(today());
        assert!(dashboard.select_date("2026-01-05", today()).is_ok());
    }

    #[test]
    fn malformed_date_is_a_bad_request() {
        let mut dashboard = Dashboard::new(today());
        let err = dashboard.select_date("05/01/2026", today()).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn non_numeric_input_stores_zero() {
        let mut dashboard = editing(today());
        for metric in Metric::ALL {
            let entry = dashboard.update_field(metric, "lots", today()).unwrap();
            assert_eq!(entry.get(metric), Some(0.0));
        }
    }

    #[test]
    fn writing_steps_reads_back_with_other_fields_empty() {
        let mut dashboard = editing(today());
        dashboard.update_field(Metric::Steps, "500", today()).unwrap();

        let form = dashboard.saved_entry();
        assert_eq!(
            form,
            EntryForm {
                steps: "500".to_string(),
                running: String::new(),
                sleep: String::new(),
            }
        );
    }

    #[test]
    fn updates_overwrite_in_place() {
        let mut dashboard = editing(today());
        dashboard.update_field(Metric::Sleep, "6", today()).unwrap();
        dashboard.update_field(Metric::Sleep, "7.5", today()).unwrap();
        assert_eq!(dashboard.log.len(), 1);
        assert_eq!(dashboard.saved_entry().sleep, "7.5");
    }

    #[test]
    fn updates_require_edit_mode() {
        let mut dashboard = Dashboard::new(today());
        let err = dashboard.update_field(Metric::Steps, "10", today()).unwrap_err();
        assert_eq!(err.message, EDIT_MODE_OFF);
        assert!(dashboard.log.is_empty());
    }

    #[test]
    fn future_selected_date_blocks_edits_and_toggle() {
        // The selected date can end up ahead of "today" if the caller's clock
        // moves backwards between requests.
        let mut dashboard = editing(today());
        let yesterday = today() - Duration::days(1);

        let err = dashboard.update_field(Metric::Steps, "10", yesterday).unwrap_err();
        assert_eq!(err.message, FUTURE_ENTRY);
        assert!(dashboard.log.is_empty());

        let err = dashboard.toggle_edit_mode(yesterday).unwrap_err();
        assert_eq!(err.message, FUTURE_EDIT);
        assert!(dashboard.edit_mode);
    }

    #[test]
    fn snapshot_reports_view_state() {
        let mut dashboard = editing(today());
        dashboard.update_field(Metric::Running, "3.2", today()).unwrap();
        dashboard.set_view(ActiveView::Running);

        let snapshot = dashboard.snapshot(today());
        assert_eq!(snapshot.today, "2026-01-05");
        assert_eq!(snapshot.active_view, ActiveView::Running);
        assert!(snapshot.edit_mode);
        assert_eq!(snapshot.entry.running, "3.2");
    }
}
