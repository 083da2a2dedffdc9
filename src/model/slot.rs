use super::{Record, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(flatten)]
    pub id: RecordId,
    /// `YYYY-MM-DD`, or a full ISO date-time of which only the date matters.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default, alias = "isAvailable")]
    pub is_available: Option<bool>,
}

impl TimeSlot {
    /// The `YYYY-MM-DD` part of the slot date.
    pub fn day(&self) -> Option<&str> {
        self.date.as_deref().and_then(|date| date.split('T').next())
    }
}

impl Record for TimeSlot {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Some("2024-05-15"), Some("2024-05-15"); "plain date")]
    #[test_case(Some("2024-05-15T00:00:00.000Z"), Some("2024-05-15"); "iso date time")]
    #[test_case(None, None; "missing")]
    fn day(date: Option<&str>, expected: Option<&str>) {
        let slot = TimeSlot {
            date: date.map(str::to_owned),
            ..Default::default()
        };
        assert_eq!(slot.day(), expected);
    }

    #[test]
    fn deserializes_backend_slot() {
        let slot: TimeSlot = serde_json::from_str(
            r#"{"_id": "s1", "date": "2024-05-15T00:00:00.000Z", "start_time": "09:00:00", "end_time": "10:00:00", "isAvailable": true}"#,
        )
        .unwrap();

        assert_eq!(slot.id.as_str(), "s1");
        assert_eq!(slot.start_time.as_deref(), Some("09:00:00"));
        assert_eq!(slot.is_available, Some(true));
    }
}
