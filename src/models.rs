use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One day's metrics. A field the user never wrote stays `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct DailyEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep: Option<f64>,
}

impl DailyEntry {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Steps => self.steps,
            Metric::Running => self.running,
            Metric::Sleep => self.sleep,
        }
    }

    pub fn set(&mut self, metric: Metric, value: f64) {
        let slot = match metric {
            Metric::Steps => &mut self.steps,
            Metric::Running => &mut self.running,
            Metric::Sleep => &mut self.sleep,
        };
        *slot = Some(value);
    }

    pub fn value_or_zero(&self, metric: Metric) -> f64 {
        self.get(metric).unwrap_or(0.0)
    }
}

/// Entries keyed by ISO date (`YYYY-MM-DD`), which keeps keys in calendar order.
pub type ActivityLog = BTreeMap<String, DailyEntry>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Steps,
    Running,
    Sleep,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Steps, Metric::Running, Metric::Sleep];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Steps => "steps",
            Metric::Running => "running",
            Metric::Sleep => "sleep",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.as_str() == value.trim())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    #[default]
    Analytics,
    Suggestions,
    Steps,
    Running,
    Sleep,
}

/// Form read-back of a single date: unset fields are empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryForm {
    pub steps: String,
    pub running: String,
    pub sleep: String,
}

impl From<Option<&DailyEntry>> for EntryForm {
    fn from(entry: Option<&DailyEntry>) -> Self {
        let field = |metric: Metric| {
            entry
                .and_then(|entry| entry.get(metric))
                .map(format_metric)
                .unwrap_or_default()
        };
        Self {
            steps: field(Metric::Steps),
            running: field(Metric::Running),
            sleep: field(Metric::Sleep),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EntryUpdateRequest {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectDateRequest {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    pub view: ActiveView,
}

#[derive(Debug, Serialize)]
pub struct DashboardSnapshot {
    pub today: String,
    pub selected_date: String,
    pub edit_mode: bool,
    pub active_view: ActiveView,
    pub loading: bool,
    pub suggestion: String,
    pub entry: EntryForm,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    Ready,
    Failed,
    MissingKey,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub status: SuggestionStatus,
    pub suggestion: String,
}

/// Coerces raw form input the way the dashboard always has: anything that is
/// not a finite number becomes 0.
pub fn coerce_metric(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value != 0.0 => value,
        _ => 0.0,
    }
}

pub fn format_metric(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_metric_defaults_to_zero() {
        assert_eq!(coerce_metric("abc"), 0.0);
        assert_eq!(coerce_metric(""), 0.0);
        assert_eq!(coerce_metric("NaN"), 0.0);
        assert_eq!(coerce_metric("inf"), 0.0);
        assert_eq!(coerce_metric("-0"), 0.0);
        assert_eq!(coerce_metric(" 7.5 "), 7.5);
        assert_eq!(coerce_metric("1e3"), 1000.0);
    }

    #[test]
    fn entry_form_leaves_unset_fields_empty() {
        let mut entry = DailyEntry::default();
        entry.set(Metric::Steps, 500.0);

        let form = EntryForm::from(Some(&entry));
        assert_eq!(form.steps, "500");
        assert_eq!(form.running, "");
        assert_eq!(form.sleep, "");

        let empty = EntryForm::from(None);
        assert_eq!(empty.steps, "");
    }

    #[test]
    fn metric_parse_accepts_wire_names_only() {
        assert_eq!(Metric::parse("running"), Some(Metric::Running));
        assert_eq!(Metric::parse(" sleep "), Some(Metric::Sleep));
        assert_eq!(Metric::parse("weight"), None);
    }
}
