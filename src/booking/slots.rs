use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::services::{ScheduleApi, ServiceReply};

/// Slot list for one queried date, as returned by the schedule service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: String,
    pub slots: Value,
}

impl DayAvailability {
    /// Wraps a slot-lookup reply. Anything but a service-reported 200 means
    /// "nothing available", not an error.
    pub fn from_reply(date: &str, reply: ServiceReply) -> Option<Self> {
        if reply.status != 200 {
            return None;
        }

        Some(Self {
            date: date.to_string(),
            slots: reply.payload,
        })
    }
}

/// Looks up bookable slots for a date (optionally scoped to a class).
///
/// Callers never see a distinct error state from this lookup: transport
/// failures and non-200 replies both resolve to `None`.
pub async fn available_slots(
    api: &dyn ScheduleApi,
    date: &str,
    class_id: Option<&str>,
    token: &str,
) -> Option<DayAvailability> {
    match api.slots_by_date(date, class_id, token).await {
        Ok(reply) => DayAvailability::from_reply(date, reply),
        Err(e) => {
            tracing::warn!("slot lookup failed for {}: {}", date, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ServiceError, ServiceReply};
    use async_trait::async_trait;
    use serde_json::json;

    struct FixedReply(u16, Value);

    #[async_trait]
    impl ScheduleApi for FixedReply {
        async fn unblock(&self, _id: &str, _token: &str) -> Result<ServiceReply, ServiceError> {
            unimplemented!("not exercised here")
        }

        async fn slots_by_date(
            &self,
            _date: &str,
            _class_id: Option<&str>,
            _token: &str,
        ) -> Result<ServiceReply, ServiceError> {
            Ok(ServiceReply {
                status: self.0,
                payload: self.1.clone(),
            })
        }
    }

    struct FailingLookup;

    #[async_trait]
    impl ScheduleApi for FailingLookup {
        async fn unblock(&self, _id: &str, _token: &str) -> Result<ServiceReply, ServiceError> {
            unimplemented!("not exercised here")
        }

        async fn slots_by_date(
            &self,
            _date: &str,
            _class_id: Option<&str>,
            _token: &str,
        ) -> Result<ServiceReply, ServiceError> {
            Err(ServiceError::InvalidPayload("boom".to_string()))
        }
    }

    #[test]
    fn ok_reply_wraps_date_and_slots() {
        let reply = ServiceReply {
            status: 200,
            payload: json!([{ "start": "09:00" }, { "start": "10:00" }]),
        };

        let availability = DayAvailability::from_reply("10/03/2026", reply).unwrap();
        assert_eq!(availability.date, "10/03/2026");
        assert_eq!(availability.slots.as_array().unwrap().len(), 2);
    }

    #[test]
    fn non_200_reply_is_absence() {
        for status in [204, 404, 500] {
            let reply = ServiceReply {
                status,
                payload: json!({ "detail": "no booking record" }),
            };
            assert_eq!(DayAvailability::from_reply("10/03/2026", reply), None);
        }
    }

    #[tokio::test]
    async fn lookup_resolves_none_on_non_200() {
        let api = FixedReply(404, json!({ "detail": "nothing" }));
        assert_eq!(available_slots(&api, "10/03/2026", None, "tok").await, None);
    }

    #[tokio::test]
    async fn lookup_resolves_none_on_transport_error() {
        assert_eq!(
            available_slots(&FailingLookup, "10/03/2026", None, "tok").await,
            None
        );
    }

    #[tokio::test]
    async fn lookup_wraps_successful_reply() {
        let api = FixedReply(200, json!([{ "start": "09:00" }]));
        let availability = available_slots(&api, "10/03/2026", Some("7"), "tok")
            .await
            .unwrap();
        assert_eq!(availability.date, "10/03/2026");
    }
}
