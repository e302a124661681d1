//! CLI commands for configuration
//!
//! Shows paths and settings, and updates the financial week policy and
//! history window.

use clap::{Subcommand, ValueEnum};

use crate::config::paths::FinancePaths;
use crate::config::settings::{FinancialWeekConfig, Settings};
use crate::error::FinanceResult;

/// Week policy accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WeekModeArg {
    /// 7-day weeks starting on a fixed day of the month
    FixedDay,
    /// Monday to Sunday weeks
    Monday,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set how months are split into financial weeks
    SetWeek {
        #[arg(value_enum)]
        mode: WeekModeArg,

        /// Day of month the first full week starts on (fixed-day mode)
        #[arg(short, long)]
        start_day: Option<u32>,
    },

    /// Set the number of months shown in the history report
    SetHistory {
        months: u32,
    },
}

/// Handle `config`; without a subcommand, print paths and settings
pub fn handle_config_command(
    paths: &FinancePaths,
    settings: &mut Settings,
    cmd: Option<ConfigCommands>,
) -> FinanceResult<()> {
    match cmd {
        None => print_config(paths, settings),
        Some(ConfigCommands::SetWeek { mode, start_day }) => {
            settings.week = match mode {
                WeekModeArg::FixedDay => {
                    FinancialWeekConfig::fixed_day(start_day.unwrap_or(settings.week.start_day))
                }
                WeekModeArg::Monday => FinancialWeekConfig {
                    start_day: settings.week.start_day,
                    ..FinancialWeekConfig::monday()
                },
            };
            settings.save(paths)?;
            println!(
                "Financial weeks: {} (start day {})",
                settings.week.mode, settings.week.start_day
            );
        }
        Some(ConfigCommands::SetHistory { months }) => {
            settings.history_months = months;
            settings.save(paths)?;
            println!("History window: {} months", settings.history_months);
        }
    }

    Ok(())
}

fn print_config(paths: &FinancePaths, settings: &Settings) {
    println!("fintrack Configuration");
    println!("======================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Sheet:            {}", paths.sheet_file().display());
    println!("Audit log:        {}", paths.audit_log().display());
    println!("Export directory: {}", paths.export_dir().display());
    println!();
    println!("Settings:");
    println!("  Week mode:      {}", settings.week.mode);
    println!("  Week start day: {}", settings.week.start_day);
    println!("  History months: {}", settings.history_months);
    println!("  Top categories: {}", settings.top_categories);
    println!("  Currency:       {}", settings.currency_symbol);
    println!("  Date format:    {}", settings.date_format);
    println!("  Page size:      {}", settings.page_size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::WeekMode;
    use tempfile::TempDir;

    #[test]
    fn test_set_week_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        handle_config_command(
            &paths,
            &mut settings,
            Some(ConfigCommands::SetWeek {
                mode: WeekModeArg::FixedDay,
                start_day: Some(5),
            }),
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.week, FinancialWeekConfig::fixed_day(5));

        handle_config_command(
            &paths,
            &mut settings,
            Some(ConfigCommands::SetWeek {
                mode: WeekModeArg::Monday,
                start_day: None,
            }),
        )
        .unwrap();
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.week.mode, WeekMode::Monday);
        assert_eq!(loaded.week.start_day, 5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();

        let result = handle_config_command(
            &paths,
            &mut settings,
            Some(ConfigCommands::SetHistory { months: 0 }),
        );
        assert!(result.is_err());
        assert!(!paths.settings_file().exists());

        let result = handle_config_command(
            &paths,
            &mut Settings::default(),
            Some(ConfigCommands::SetHistory { months: 5000 }),
        );
        assert!(result.is_err());
        assert!(!paths.settings_file().exists());
    }
}
