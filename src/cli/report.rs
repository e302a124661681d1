//! CLI commands for reports
//!
//! Provides commands for the dashboard and the weekly, category and
//! history reports.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::{Settings, MAX_HISTORY_MONTHS};
use crate::display::{format_bar, format_percentage, separator};
use crate::error::{FinanceError, FinanceResult};
use crate::reports::{CategoryBreakdown, DashboardReport, MonthlyHistory};
use crate::services::PeriodService;
use crate::storage::Storage;

use super::reference_date;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show the dashboard for a month
    Dashboard {
        /// Month to show (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Reference date (YYYY-MM-DD); selects the current week
        #[arg(short, long)]
        date: Option<String>,

        /// Skip the monthly history section
        #[arg(long)]
        no_history: bool,

        /// Print the dashboard as JSON
        #[arg(long)]
        json: bool,

        /// Export the weekly breakdown to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the financial weeks of a month with their totals
    Weeks {
        #[arg(short, long)]
        month: Option<String>,

        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show the expense breakdown by category for a month
    Categories {
        #[arg(short, long)]
        month: Option<String>,

        #[arg(short, long)]
        date: Option<String>,

        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,
    },

    /// Show monthly totals and accumulated wealth
    History {
        #[arg(short, long)]
        month: Option<String>,

        #[arg(short, long)]
        date: Option<String>,

        /// Number of months (defaults to the configured window)
        #[arg(short = 'n', long)]
        months: Option<u32>,
    },
}

fn check_history_window(months: u32) -> FinanceResult<()> {
    if !(1..=MAX_HISTORY_MONTHS).contains(&months) {
        return Err(FinanceError::Validation(format!(
            "History window must be between 1 and {} months, got {}",
            MAX_HISTORY_MONTHS, months
        )));
    }
    Ok(())
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinanceResult<()> {
    let transactions = storage.sheet.find_all()?;

    match cmd {
        ReportCommands::Dashboard {
            month,
            date,
            no_history,
            json,
            output,
        } => {
            let reference = reference_date(month.as_deref(), date.as_deref())?;
            let report = DashboardReport::generate(&transactions, reference, settings, !no_history);

            if let Some(path) = output {
                let file = File::create(&path).map_err(|e| {
                    FinanceError::Export(format!("Failed to create file {}: {}", path.display(), e))
                })?;
                let mut writer = BufWriter::new(file);
                report.export_csv(&mut writer)?;
                println!("Weekly breakdown exported to: {}", path.display());
            } else if json {
                let text = serde_json::to_string_pretty(&report)?;
                println!("{}", text);
            } else {
                print!("{}", report.format_terminal());
            }
        }

        ReportCommands::Weeks { month, date } => {
            let reference = reference_date(month.as_deref(), date.as_deref())?;
            let report = DashboardReport::generate(&transactions, reference, settings, false);
            let periods = PeriodService::new(settings.week);

            println!(
                "Financial weeks of {} ({}, start day {})",
                periods.month_of(reference),
                settings.week.mode,
                settings.week.start_day
            );
            print!("{}", report.format_weeks());
        }

        ReportCommands::Categories { month, date, top } => {
            let reference = reference_date(month.as_deref(), date.as_deref())?;
            let month = PeriodService::new(settings.week).month_of(reference);
            let range = month.range();
            let in_month: Vec<_> = transactions
                .into_iter()
                .filter(|t| range.contains(t.date))
                .collect();

            let mut breakdown = CategoryBreakdown::expenses(&in_month);
            if let Some(limit) = top {
                breakdown.truncate(limit);
            }

            println!("Expenses by category - {}", month);
            println!("{}", separator(72));
            if breakdown.is_empty() {
                println!("No expenses this month.");
                return Ok(());
            }

            let max = breakdown[0].total.as_f64();
            for category in &breakdown {
                println!(
                    "{:<16} {:>14} {:>4} {:>6} {}",
                    category.category.label(),
                    category.total.format_with_symbol(&settings.currency_symbol),
                    category.transaction_count,
                    format_percentage(category.percentage),
                    format_bar(category.total.as_f64(), max, 20)
                );
            }
        }

        ReportCommands::History {
            month,
            date,
            months,
        } => {
            let reference = reference_date(month.as_deref(), date.as_deref())?;
            let window = months.unwrap_or(settings.history_months);
            check_history_window(window)?;

            let mut report = DashboardReport::generate(&transactions, reference, settings, false);
            report.history = MonthlyHistory::build(
                &transactions,
                report.current_month.month,
                window,
            );
            print!("{}", report.format_history());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_window_bounds() {
        assert!(check_history_window(1).is_ok());
        assert!(check_history_window(MAX_HISTORY_MONTHS).is_ok());
        assert!(check_history_window(0).unwrap_err().is_validation());
        assert!(check_history_window(3_200_000).unwrap_err().is_validation());
    }
}
