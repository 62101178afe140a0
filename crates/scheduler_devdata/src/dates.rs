// --- File: crates/scheduler_devdata/src/dates.rs ---
//! Calendar arithmetic for the sample events.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

/// Format used by the booking API for event dates.
pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Shifts a date by whole months. A day that does not exist in the target
/// month is clamped to its last day (e.g. 31 March minus one month is 28/29 February).
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// First day of the month after `date`.
pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    shift_months(first, 1)
}

/// The `n`-th (1-based) `weekday` of the month after `today`.
///
/// `n` above 4 may run into the month after; callers only ask for 2 and 4.
pub fn nth_weekday_of_next_month(today: NaiveDate, weekday: Weekday, n: u32) -> NaiveDate {
    let first = first_of_next_month(today);
    let offset = (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    let first_match = first + Duration::days(i64::from(offset));
    first_match + Duration::weeks(i64::from(n.saturating_sub(1)))
}

/// The dates the sample events are scheduled on, relative to a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleDates {
    pub four_months_ago: NaiveDate,
    pub two_months_ago: NaiveDate,
    pub in_three_months: NaiveDate,
    pub in_four_months: NaiveDate,
    pub second_tuesday_next_month: NaiveDate,
    pub fourth_tuesday_next_month: NaiveDate,
}

impl SampleDates {
    pub fn from_today(today: NaiveDate) -> Self {
        Self {
            four_months_ago: shift_months(today, -4),
            two_months_ago: shift_months(today, -2),
            in_three_months: shift_months(today, 3),
            in_four_months: shift_months(today, 4),
            second_tuesday_next_month: nth_weekday_of_next_month(today, Weekday::Tue, 2),
            fourth_tuesday_next_month: nth_weekday_of_next_month(today, Weekday::Tue, 4),
        }
    }
}

/// `YYYY-MM-DD`.
pub fn api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}
