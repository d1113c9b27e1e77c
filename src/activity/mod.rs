pub mod backfill;
pub mod status;

pub use backfill::{missing_activities, ActivityEntry};
pub use status::{status_label, NOT_RECEIVED};
