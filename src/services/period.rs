//! Financial week service
//!
//! Splits a calendar month into contiguous "financial weeks" according to
//! the configured week policy, and locates the week containing a date.

use chrono::{Datelike, Duration, Local, NaiveDate};
use tracing::debug;

use crate::config::settings::{FinancialWeekConfig, WeekMode};
use crate::models::{DateRange, FinancialWeek, Month};

/// Service for financial week partitioning
pub struct PeriodService {
    config: FinancialWeekConfig,
}

impl PeriodService {
    pub fn new(config: FinancialWeekConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> FinancialWeekConfig {
        self.config
    }

    /// The calendar month containing a date
    pub fn month_of(&self, date: NaiveDate) -> Month {
        Month::of(date)
    }

    /// The financial weeks covering the month of `date`, in ascending order
    ///
    /// The ranges never overlap, leave no gaps, start on the 1st and end on
    /// the last day of the month.
    pub fn weeks_of_month(&self, date: NaiveDate) -> Vec<FinancialWeek> {
        let month = Month::of(date);
        match self.config.mode {
            WeekMode::FixedDay => fixed_day_weeks(month, self.config.start_day),
            WeekMode::Monday => monday_weeks(month),
        }
    }

    /// The financial week containing `date`
    ///
    /// Falls back to the whole month if no generated week matches.
    pub fn week_containing(&self, date: NaiveDate) -> FinancialWeek {
        self.weeks_of_month(date)
            .into_iter()
            .find(|week| week.contains(date))
            .unwrap_or_else(|| {
                debug!(%date, "no financial week matched, using whole month");
                Month::of(date).range()
            })
    }

    /// The financial week containing today's local date
    pub fn current_week(&self) -> FinancialWeek {
        self.week_containing(Local::now().date_naive())
    }
}

/// 7-day blocks starting on `start_day`, preceded by a partial week from
/// the 1st when `start_day` is after day 1
fn fixed_day_weeks(month: Month, start_day: u32) -> Vec<FinancialWeek> {
    let month_start = month.start_date();
    let month_end = month.end_date();

    // A start day past the end of a short month is clamped to its last day
    let start_day = start_day.clamp(1, month.days());
    let first_full = month_start + Duration::days(i64::from(start_day - 1));

    let mut weeks = Vec::new();
    if first_full > month_start {
        weeks.push(DateRange::new(month_start, first_full - Duration::days(1)));
    }

    let mut current = first_full;
    while current <= month_end {
        let end = (current + Duration::days(6)).min(month_end);
        weeks.push(DateRange::new(current, end));
        current = end + Duration::days(1);
    }

    weeks
}

/// Monday to Sunday weeks, preceded by a partial week when the month does
/// not begin on a Monday
fn monday_weeks(month: Month) -> Vec<FinancialWeek> {
    let month_start = month.start_date();
    let month_end = month.end_date();

    let offset = (7 - month_start.weekday().num_days_from_monday()) % 7;
    let first_monday = month_start + Duration::days(i64::from(offset));

    let mut weeks = Vec::new();
    if first_monday > month_start {
        weeks.push(DateRange::new(month_start, first_monday - Duration::days(1)));
    }

    let mut current = first_monday;
    while current <= month_end {
        let end = (current + Duration::days(6)).min(month_end);
        weeks.push(DateRange::new(current, end));
        current += Duration::days(7);
    }

    weeks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_partitions_month(weeks: &[FinancialWeek], month: Month) {
        assert!(!weeks.is_empty());
        assert_eq!(weeks[0].start, month.start_date());
        assert_eq!(weeks[weeks.len() - 1].end, month.end_date());
        for week in weeks {
            assert!(week.start <= week.end, "inverted range {}", week);
        }
        for pair in weeks.windows(2) {
            assert_eq!(pair[0].end + Duration::days(1), pair[1].start);
        }
    }

    #[test]
    fn test_fixed_day_fifteen() {
        let service = PeriodService::new(FinancialWeekConfig::fixed_day(15));
        let weeks = service.weeks_of_month(ymd(2024, 1, 20));

        assert_eq!(
            weeks,
            vec![
                DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 14)),
                DateRange::new(ymd(2024, 1, 15), ymd(2024, 1, 21)),
                DateRange::new(ymd(2024, 1, 22), ymd(2024, 1, 28)),
                DateRange::new(ymd(2024, 1, 29), ymd(2024, 1, 31)),
            ]
        );
    }

    #[test]
    fn test_fixed_day_one_has_no_partial_week() {
        let service = PeriodService::new(FinancialWeekConfig::fixed_day(1));
        let weeks = service.weeks_of_month(ymd(2023, 2, 10));

        assert_eq!(weeks.len(), 4);
        assert!(weeks.iter().all(|w| w.days() == 7));
    }

    #[test]
    fn test_fixed_day_partitions_every_month() {
        for start_day in 1..=28 {
            let service = PeriodService::new(FinancialWeekConfig::fixed_day(start_day));
            for year in [2023, 2024] {
                for m in 1..=12 {
                    let month = Month::new(year, m).unwrap();
                    let weeks = service.weeks_of_month(month.start_date());
                    assert_partitions_month(&weeks, month);
                    assert!(weeks.iter().all(|w| w.days() <= 7 || w.start.day() == 1));
                }
            }
        }
    }

    #[test]
    fn test_fixed_day_clamps_to_short_month() {
        let service = PeriodService::new(FinancialWeekConfig::fixed_day(31));
        let month = Month::new(2023, 2).unwrap();
        let weeks = service.weeks_of_month(month.start_date());

        assert_partitions_month(&weeks, month);
        assert_eq!(
            weeks,
            vec![
                DateRange::new(ymd(2023, 2, 1), ymd(2023, 2, 27)),
                DateRange::new(ymd(2023, 2, 28), ymd(2023, 2, 28)),
            ]
        );
    }

    #[test]
    fn test_monday_weeks() {
        let service = PeriodService::new(FinancialWeekConfig::monday());
        // March 2024 starts on a Friday
        let weeks = service.weeks_of_month(ymd(2024, 3, 12));

        assert_eq!(weeks[0], DateRange::new(ymd(2024, 3, 1), ymd(2024, 3, 3)));
        assert_eq!(weeks[1], DateRange::new(ymd(2024, 3, 4), ymd(2024, 3, 10)));
        assert_eq!(
            weeks[weeks.len() - 1],
            DateRange::new(ymd(2024, 3, 25), ymd(2024, 3, 31))
        );
    }

    #[test]
    fn test_monday_month_starting_on_monday() {
        let service = PeriodService::new(FinancialWeekConfig::monday());
        // January 2024 starts on a Monday
        let weeks = service.weeks_of_month(ymd(2024, 1, 1));

        assert_eq!(weeks[0], DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 7)));
        assert_eq!(weeks.len(), 5);
    }

    #[test]
    fn test_monday_inner_weeks_are_full() {
        let service = PeriodService::new(FinancialWeekConfig::monday());
        for year in [2023, 2024, 2025] {
            for m in 1..=12 {
                let month = Month::new(year, m).unwrap();
                let weeks = service.weeks_of_month(month.start_date());
                assert_partitions_month(&weeks, month);

                for week in &weeks[1..weeks.len() - 1] {
                    assert_eq!(week.days(), 7);
                    assert_eq!(week.start.weekday(), Weekday::Mon);
                    assert_eq!(week.end.weekday(), Weekday::Sun);
                }
            }
        }
    }

    #[test]
    fn test_week_containing() {
        let service = PeriodService::new(FinancialWeekConfig::fixed_day(15));

        assert_eq!(
            service.week_containing(ymd(2024, 1, 10)),
            DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 14))
        );
        assert_eq!(
            service.week_containing(ymd(2024, 1, 21)),
            DateRange::new(ymd(2024, 1, 15), ymd(2024, 1, 21))
        );
        assert_eq!(
            service.week_containing(ymd(2024, 1, 31)),
            DateRange::new(ymd(2024, 1, 29), ymd(2024, 1, 31))
        );
    }

    #[test]
    fn test_week_containing_every_day() {
        let service = PeriodService::new(FinancialWeekConfig::monday());
        let month = Month::new(2024, 2).unwrap();
        let mut day = month.start_date();
        while day <= month.end_date() {
            assert!(service.week_containing(day).contains(day));
            day += Duration::days(1);
        }
    }

    #[test]
    fn test_month_of() {
        let service = PeriodService::new(FinancialWeekConfig::default());
        assert_eq!(service.month_of(ymd(2024, 2, 29)), Month::new(2024, 2).unwrap());
    }
}
