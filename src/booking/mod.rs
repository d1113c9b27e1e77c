pub mod dates;
pub mod slots;

pub use dates::is_date_within_limit;
pub use slots::{available_slots, DayAvailability};
