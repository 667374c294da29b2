//! Utility modules for the todoterm application.
//!
//! - [`datetime`] - Date formatting and the "current day" used by the today filter
//! - [`text`] - Making user-supplied text safe to paint on a terminal

pub mod datetime;
pub mod text;
