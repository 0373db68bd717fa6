pub mod calendar;
pub mod check;
pub mod form;
pub mod patterns;
