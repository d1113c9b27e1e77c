use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::status::NOT_RECEIVED;

/// One activity in a participant's submission list.
///
/// `activity_id` is the 1-based position within the cycle, kept as a string
/// the way the backend reports it; `id` is the backend record id, absent on
/// synthesized placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub activity_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub status: String,
}

impl ActivityEntry {
    fn placeholder(activity_id: u32) -> Self {
        Self {
            activity_id: activity_id.to_string(),
            id: None,
            status: NOT_RECEIVED.to_string(),
        }
    }
}

/// Synthesizes placeholder entries for every activity in `1..=total` missing
/// from `existing`, in ascending id order.
pub fn missing_activities(total: u32, existing: &[ActivityEntry]) -> Vec<ActivityEntry> {
    let present: HashSet<&str> = existing.iter().map(|e| e.activity_id.as_str()).collect();

    (1..=total)
        .filter(|n| !present.contains(n.to_string().as_str()))
        .map(ActivityEntry::placeholder)
        .collect()
}
