use chrono::{Local, NaiveDate};

/// Booking dates arrive as dd/mm/yyyy strings from the scheduling views.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// True when the date is today or later. Malformed input is simply out of
/// limit, never an error.
pub fn is_date_within_limit(date: &str) -> bool {
    match NaiveDate::parse_from_str(date, DATE_FORMAT) {
        Ok(parsed) => parsed >= Local::now().date_naive(),
        Err(_) => false,
    }
}
