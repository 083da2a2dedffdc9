//! List responses the API wraps inconsistently.

use crate::model::{Appointment, TimeSlot, User};
use serde::{de::IgnoredAny, Deserialize};

#[derive(Deserialize)]
#[serde(untagged)]
pub enum SlotList {
    Bare(Vec<TimeSlot>),
    Slots { slots: Vec<TimeSlot> },
    Data { data: Vec<TimeSlot> },
    Unrecognized(IgnoredAny),
}

impl SlotList {
    pub fn into_slots(self) -> Vec<TimeSlot> {
        match self {
            SlotList::Bare(slots) | SlotList::Slots { slots } | SlotList::Data { data: slots } => {
                slots
            }
            SlotList::Unrecognized(_) => {
                tracing::warn!("unrecognized available slots response, treating as empty");
                Vec::new()
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum AppointmentList {
    Bare(Vec<Appointment>),
    Wrapped { appointments: Vec<Appointment> },
    Unrecognized(IgnoredAny),
}

impl AppointmentList {
    pub fn into_appointments(self) -> Vec<Appointment> {
        match self {
            AppointmentList::Bare(appointments) | AppointmentList::Wrapped { appointments } => {
                appointments
            }
            AppointmentList::Unrecognized(_) => {
                tracing::warn!("unrecognized appointments response, treating as empty");
                Vec::new()
            }
        }
    }
}

#[derive(Deserialize)]
pub struct CurrentUser {
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(r#"[{"_id": "s1"}, {"_id": "s2"}]"#, 2; "bare array")]
    #[test_case(r#"{"slots": [{"_id": "s1"}]}"#, 1; "slots key")]
    #[test_case(r#"{"data": [{"id": "s1"}, {"id": "s2"}, {"id": "s3"}]}"#, 3; "data key")]
    #[test_case(r#"{"message": "nothing here"}"#, 0; "unknown object")]
    fn slot_list(body: &str, expected: usize) {
        let list: SlotList = serde_json::from_str(body).unwrap();
        assert_eq!(list.into_slots().len(), expected);
    }

    #[test_case(r#"[{"_id": "a1", "status": "pending"}]"#, 1; "bare array")]
    #[test_case(r#"{"appointments": [{"_id": "a1"}, {"_id": "a2"}], "total": 2}"#, 2; "wrapped")]
    #[test_case(r#"null"#, 0; "null body")]
    fn appointment_list(body: &str, expected: usize) {
        let list: AppointmentList = serde_json::from_str(body).unwrap();
        assert_eq!(list.into_appointments().len(), expected);
    }
}
