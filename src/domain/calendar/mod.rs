pub mod unit;

pub use unit::{days_in_month, Bank, CalendarUnit};
