pub mod error;
pub mod table;

pub use error::NameDayError;
pub use table::NameDayTable;
