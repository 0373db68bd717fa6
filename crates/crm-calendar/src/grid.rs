// File: src/grid.rs
// Purpose: Sunday-started week and month grids

use chrono::{Datelike, Days, Months, NaiveDate};

/// The Sunday on or before `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday();
    shift_days(date, -i64::from(offset))
}

/// The seven days of the week containing `date`, Sunday first
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let sunday = week_start(date);
    std::array::from_fn(|i| shift_days(sunday, i as i64))
}

/// Six weeks starting with the Sunday on or before the 1st of `date`'s
/// month. Cells before the 1st and after the last day spill into the
/// neighbouring months.
pub fn month_matrix(date: NaiveDate) -> [[NaiveDate; 7]; 6] {
    let first = date.with_day(1).unwrap_or(date);
    let start = week_start(first);
    std::array::from_fn(|week| {
        std::array::from_fn(|day| shift_days(start, (week * 7 + day) as i64))
    })
}

/// Move `date` by a signed number of days, saturating at chrono's range
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.unwrap_or(date)
}

pub fn shift_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    shift_days(date, weeks.saturating_mul(7))
}

/// Move `date` by whole months; the day is clamped to the target month's
/// length (Jan 31 + 1 month = Feb 28/29).
pub fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let magnitude = Months::new(months.unsigned_abs());
    let shifted = if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    };
    shifted.unwrap_or(date)
}
