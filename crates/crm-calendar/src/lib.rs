//! # crm-calendar
//!
//! Date arithmetic behind the calendar and new-task screens. Weeks start on
//! Sunday everywhere.

pub mod grid;
pub mod schedule;

pub use grid::{month_matrix, shift_days, shift_months, shift_weeks, week_dates, week_start};
pub use schedule::{parse_time_slot, time_slots, QuickOption, UnknownQuickOption};
