//! Navigator configuration

use serde::{Deserialize, Serialize};

use atrium_shell::UiHelpers;

use crate::error::NavigationError;
use crate::Result;

/// Where a tab's badge count comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountSource {
    Activity,
    Catalog,
    Media,
    Users,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSpec {
    pub id: String,
    pub title: String,
    #[serde(default = "default_count_source")]
    pub count_source: CountSource,
}

fn default_count_source() -> CountSource {
    CountSource::None
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Appended to the document title
    pub site_name: Option<String>,
    /// Chrome for the root route
    pub landing_title: String,
    pub landing_tab: String,
    /// Record id that opens a new, unsaved record
    pub new_record_sentinel: String,
    /// Record opened for collections holding a single record
    pub singular_record_id: String,
    /// strftime format handed to screens
    pub date_format: String,
    /// Tab strip, left to right
    pub tabs: Vec<TabSpec>,
}

impl NavigatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.new_record_sentinel.is_empty() {
            return Err(NavigationError::Config(
                "new_record_sentinel cannot be empty".to_string(),
            ));
        }
        if self.singular_record_id.is_empty() {
            return Err(NavigationError::Config(
                "singular_record_id cannot be empty".to_string(),
            ));
        }
        if self.singular_record_id == self.new_record_sentinel {
            return Err(NavigationError::Config(
                "singular_record_id cannot equal new_record_sentinel".to_string(),
            ));
        }
        if !UiHelpers::is_valid_format(&self.date_format) {
            return Err(NavigationError::Config(format!(
                "invalid date_format: {}",
                self.date_format
            )));
        }
        for (idx, tab) in self.tabs.iter().enumerate() {
            if self.tabs[..idx].iter().any(|t| t.id == tab.id) {
                return Err(NavigationError::Config(format!(
                    "duplicate tab id: {}",
                    tab.id
                )));
            }
        }
        Ok(())
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        let tab = |id: &str, title: &str, count_source| TabSpec {
            id: id.to_string(),
            title: title.to_string(),
            count_source,
        };

        Self {
            site_name: None,
            landing_title: "Tables".to_string(),
            landing_tab: "tables".to_string(),
            new_record_sentinel: "new".to_string(),
            singular_record_id: "1".to_string(),
            date_format: "%Y-%m-%d %H:%M".to_string(),
            tabs: vec![
                tab("activity", "Activity", CountSource::Activity),
                tab("tables", "Tables", CountSource::Catalog),
                tab("media", "Media", CountSource::Media),
                tab("users", "Users", CountSource::Users),
                tab("settings", "Settings", CountSource::None),
            ],
        }
    }
}
