//! Helpers shared with every screen

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct UiHelpers {
    /// strftime format for timestamps
    date_format: String,
}

impl UiHelpers {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Whether chrono can render `format`
    pub fn is_valid_format(format: &str) -> bool {
        StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
    }

    /// Format `at` with the configured format. Falls back to RFC 3339 when
    /// the format cannot be rendered.
    pub fn format_timestamp(&self, at: &DateTime<Utc>) -> String {
        let mut out = String::new();
        if write!(out, "{}", at.format(&self.date_format)).is_err() {
            tracing::warn!(format = %self.date_format, "Unrenderable date format");
            return at.to_rfc3339();
        }
        out
    }
}

impl Default for UiHelpers {
    fn default() -> Self {
        Self::new("%Y-%m-%d %H:%M")
    }
}
