//! User settings for fintrack
//!
//! Manages user preferences including the financial-week policy, the length
//! of the history window and display preferences.

use serde::{Deserialize, Serialize};

use super::paths::FinancePaths;
use crate::error::FinanceError;
use crate::storage::file_io::write_json_atomic;

/// Longest history window, in months
pub const MAX_HISTORY_MONTHS: u32 = 1200;

/// How a calendar month is split into financial weeks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeekMode {
    /// 7-day blocks starting on a configured day of the month
    #[default]
    FixedDay,
    /// Monday to Sunday weeks
    Monday,
}

impl std::fmt::Display for WeekMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FixedDay => write!(f, "fixed-day"),
            Self::Monday => write!(f, "monday"),
        }
    }
}

/// Financial week configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialWeekConfig {
    #[serde(default)]
    pub mode: WeekMode,

    /// Day of month the first full week starts on (fixed-day mode only)
    #[serde(default = "default_start_day")]
    pub start_day: u32,
}

impl FinancialWeekConfig {
    /// Fixed-day weeks starting on `start_day`
    pub fn fixed_day(start_day: u32) -> Self {
        Self {
            mode: WeekMode::FixedDay,
            start_day,
        }
    }

    /// Monday-aligned weeks
    pub fn monday() -> Self {
        Self {
            mode: WeekMode::Monday,
            start_day: default_start_day(),
        }
    }
}

impl Default for FinancialWeekConfig {
    fn default() -> Self {
        Self::fixed_day(default_start_day())
    }
}

/// User settings for fintrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Financial week policy
    #[serde(default)]
    pub week: FinancialWeekConfig,

    /// Number of trailing months in the history report
    #[serde(default = "default_history_months")]
    pub history_months: u32,

    /// Number of categories shown in the dashboard breakdown
    #[serde(default = "default_top_categories")]
    pub top_categories: usize,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Rows per page in transaction listings
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_start_day() -> u32 {
    15
}

fn default_history_months() -> u32 {
    6
}

fn default_top_categories() -> usize {
    5
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_page_size() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            week: FinancialWeekConfig::default(),
            history_months: default_history_months(),
            top_categories: default_top_categories(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            page_size: default_page_size(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FinancePaths) -> Result<Self, FinanceError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FinanceError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FinanceError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinancePaths) -> Result<(), FinanceError> {
        self.validate()?;
        paths.ensure_directories()?;

        write_json_atomic(paths.settings_file(), self)
    }

    /// Check that the settings describe a usable configuration
    pub fn validate(&self) -> Result<(), FinanceError> {
        if !(1..=31).contains(&self.week.start_day) {
            return Err(FinanceError::Config(format!(
                "Week start day must be between 1 and 31, got {}",
                self.week.start_day
            )));
        }
        if !(1..=MAX_HISTORY_MONTHS).contains(&self.history_months) {
            return Err(FinanceError::Config(format!(
                "History window must be between 1 and {} months, got {}",
                MAX_HISTORY_MONTHS, self.history_months
            )));
        }
        if self.page_size == 0 {
            return Err(FinanceError::Config("Page size must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.week.mode, WeekMode::FixedDay);
        assert_eq!(settings.week.start_day, 15);
        assert_eq!(settings.history_months, 6);
        assert_eq!(settings.top_categories, 5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.week = FinancialWeekConfig::monday();
        settings.history_months = 12;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.week.mode, WeekMode::Monday);
        assert_eq!(loaded.history_months, 12);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"week": {"mode": "monday"}}"#).unwrap();
        assert_eq!(settings.week.mode, WeekMode::Monday);
        assert_eq!(settings.week.start_day, 15);
        assert_eq!(settings.currency_symbol, "R$");
    }

    #[test]
    fn test_validate_rejects_bad_start_day() {
        let mut settings = Settings::default();
        settings.week.start_day = 0;
        assert!(matches!(settings.validate(), Err(FinanceError::Config(_))));

        settings.week.start_day = 32;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_history() {
        let mut settings = Settings::default();
        settings.history_months = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_caps_history_window() {
        let mut settings = Settings::default();
        settings.history_months = MAX_HISTORY_MONTHS;
        assert!(settings.validate().is_ok());

        settings.history_months = MAX_HISTORY_MONTHS + 1;
        assert!(matches!(settings.validate(), Err(FinanceError::Config(_))));
    }
}
