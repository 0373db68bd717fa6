// File: src/schedule.rs
// Purpose: Quick due-date options and half-hour time slots

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Duration, Months, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::week_start;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quick option: {0}")]
pub struct UnknownQuickOption(pub String);

/// Shortcut buttons offered next to the due-date picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum QuickOption {
    In15Minutes,
    In30Minutes,
    InAnHour,
    Today,
    Tomorrow,
    ThisWeek,
    In7Days,
    In30Days,
    In1Year,
}

impl QuickOption {
    pub const ALL: [QuickOption; 9] = [
        QuickOption::In15Minutes,
        QuickOption::In30Minutes,
        QuickOption::InAnHour,
        QuickOption::Today,
        QuickOption::Tomorrow,
        QuickOption::ThisWeek,
        QuickOption::In7Days,
        QuickOption::In30Days,
        QuickOption::In1Year,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuickOption::In15Minutes => "In 15 minutes",
            QuickOption::In30Minutes => "In 30 minutes",
            QuickOption::InAnHour => "In an hour",
            QuickOption::Today => "Today",
            QuickOption::Tomorrow => "Tomorrow",
            QuickOption::ThisWeek => "This week",
            QuickOption::In7Days => "In 7 days",
            QuickOption::In30Days => "In 30 days",
            QuickOption::In1Year => "In 1 year",
        }
    }

    /// Due instant for this option, relative to `now`.
    ///
    /// "Today" and "This week" mean the end of the day (23:59) of today and
    /// of the week's Saturday; the day-based options keep the time of day.
    pub fn resolve(self, now: NaiveDateTime) -> NaiveDateTime {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(NaiveTime::MIN);
        let date = now.date();
        let plus_days = |days: u64| now.checked_add_days(Days::new(days)).unwrap_or(now);
        let plus = |duration: Duration| now.checked_add_signed(duration).unwrap_or(now);

        match self {
            QuickOption::In15Minutes => plus(Duration::minutes(15)),
            QuickOption::In30Minutes => plus(Duration::minutes(30)),
            QuickOption::InAnHour => plus(Duration::hours(1)),
            QuickOption::Today => date.and_time(end_of_day),
            QuickOption::Tomorrow => plus_days(1),
            QuickOption::ThisWeek => {
                let saturday = week_start(date)
                    .checked_add_days(Days::new(6))
                    .unwrap_or(date);
                saturday.and_time(end_of_day)
            }
            QuickOption::In7Days => plus_days(7),
            QuickOption::In30Days => plus_days(30),
            QuickOption::In1Year => now.checked_add_months(Months::new(12)).unwrap_or(now),
        }
    }
}

impl fmt::Display for QuickOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QuickOption {
    type Err = UnknownQuickOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuickOption::ALL
            .iter()
            .copied()
            .find(|option| option.label() == s)
            .ok_or_else(|| UnknownQuickOption(s.to_string()))
    }
}

impl TryFrom<String> for QuickOption {
    type Error = UnknownQuickOption;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QuickOption> for String {
    fn from(option: QuickOption) -> Self {
        option.label().to_string()
    }
}

/// 48 half-hour labels from `12:00AM` to `11:30PM`
pub fn time_slots() -> Vec<String> {
    (0..48u32)
        .map(|slot| {
            let hour = slot / 2;
            let minute = (slot % 2) * 30;
            let clock_hour = match hour % 12 {
                0 => 12,
                h => h,
            };
            let meridiem = if hour < 12 { "AM" } else { "PM" };
            format!("{}:{:02}{}", clock_hour, minute, meridiem)
        })
        .collect()
}

/// Time of day for one of the [`time_slots`] labels
pub fn parse_time_slot(label: &str) -> Option<NaiveTime> {
    let index = time_slots().iter().position(|slot| slot == label)?;
    let minutes = index as u32 * 30;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[rstest]
    #[case(QuickOption::In15Minutes)]
    #[case(QuickOption::In30Minutes)]
    #[case(QuickOption::InAnHour)]
    #[case(QuickOption::Tomorrow)]
    #[case(QuickOption::In7Days)]
    fn test_resolve_saturates_at_calendar_end(#[case] option: QuickOption) {
        let now = NaiveDateTime::MAX;
        assert_eq!(option.resolve(now), now);
    }

    #[test]
    fn test_time_slots() {
        let slots = time_slots();
        assert_eq!(slots.len(), 48);
        assert_eq!(slots[0], "12:00AM");
        assert_eq!(slots[1], "12:30AM");
        assert_eq!(slots[2], "1:00AM");
        assert_eq!(slots[24], "12:00PM");
        assert_eq!(slots[26], "1:00PM");
        assert_eq!(slots[47], "11:30PM");
    }

    #[test]
    fn test_parse_time_slot() {
        assert_eq!(parse_time_slot("1:30PM"), NaiveTime::from_hms_opt(13, 30, 0));
        assert_eq!(parse_time_slot("12:00AM"), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(parse_time_slot("1:15PM"), None);
    }

    #[rstest]
    #[case(QuickOption::In15Minutes, at(2024, 3, 13, 10, 15))]
    #[case(QuickOption::InAnHour, at(2024, 3, 13, 11, 0))]
    #[case(QuickOption::Today, at(2024, 3, 13, 23, 59))]
    #[case(QuickOption::Tomorrow, at(2024, 3, 14, 10, 0))]
    #[case(QuickOption::ThisWeek, at(2024, 3, 16, 23, 59))]
    #[case(QuickOption::In7Days, at(2024, 3, 20, 10, 0))]
    #[case(QuickOption::In30Days, at(2024, 4, 12, 10, 0))]
    #[case(QuickOption::In1Year, at(2025, 3, 13, 10, 0))]
    fn test_resolve(#[case] option: QuickOption, #[case] expected: NaiveDateTime) {
        // Wednesday morning
        assert_eq!(option.resolve(at(2024, 3, 13, 10, 0)), expected);
    }

    #[test]
    fn test_leap_day_plus_one_year() {
        assert_eq!(
            QuickOption::In1Year.resolve(at(2024, 2, 29, 9, 0)),
            at(2025, 2, 28, 9, 0)
        );
    }

    #[test]
    fn test_labels_round_trip() {
        for option in QuickOption::ALL {
            assert_eq!(option.label().parse::<QuickOption>(), Ok(option));
        }
        assert_eq!(
            "Next decade".parse::<QuickOption>(),
            Err(UnknownQuickOption("Next decade".to_string()))
        );
    }
}
