pub mod appointment;
pub mod request;
pub mod service;
pub mod slot;
pub mod user;

pub use appointment::{Appointment, AppointmentStatus, DashboardStats, PaymentMethod};
pub use request::{
    AuthResponse, LoginRequest, NewAppointment, QuickRegisterRequest, RegisterRequest,
    RescheduleRequest, StatusUpdate,
};
pub use service::Service;
pub use slot::TimeSlot;
pub use user::{Role, User};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a backend record.
///
/// The API is not consistent about the key it uses, some payloads carry `_id`
/// and others `id` (or both). Records flatten this type in so either spelling
/// is accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "RawId")]
pub struct RecordId(String);

#[derive(Serialize, Deserialize)]
struct RawId {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    underscore: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl From<RawId> for RecordId {
    fn from(raw: RawId) -> Self {
        RecordId(raw.underscore.or(raw.id).unwrap_or_default())
    }
}

impl From<RecordId> for RawId {
    fn from(id: RecordId) -> Self {
        RawId {
            underscore: Some(id.0),
            id: None,
        }
    }
}

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_owned())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait Record {
    fn id(&self) -> &RecordId;
}

/// A relation on an appointment, either populated by the backend or left as
/// a bare id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Id(String),
    Populated(T),
}

impl<T: Record> Ref<T> {
    pub fn id(&self) -> &str {
        match self {
            Ref::Id(id) => id,
            Ref::Populated(record) => record.id().as_str(),
        }
    }

    pub fn populated(&self) -> Option<&T> {
        match self {
            Ref::Id(_) => None,
            Ref::Populated(record) => Some(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        #[serde(flatten)]
        id: RecordId,
        name: String,
    }

    impl Record for Thing {
        fn id(&self) -> &RecordId {
            &self.id
        }
    }

    #[test]
    fn record_id_accepts_either_key() {
        let underscore: Thing = serde_json::from_str(r#"{"_id": "a1", "name": "x"}"#).unwrap();
        let plain: Thing = serde_json::from_str(r#"{"id": "a1", "name": "x"}"#).unwrap();
        let both: Thing =
            serde_json::from_str(r#"{"_id": "a1", "id": "a1", "name": "x"}"#).unwrap();

        assert_eq!(underscore.id.as_str(), "a1");
        assert_eq!(plain, underscore);
        assert_eq!(both, underscore);
    }

    #[test]
    fn record_id_serializes_as_underscore_key() {
        let json = serde_json::to_value(RecordId::from("a1")).unwrap();
        assert_eq!(json, serde_json::json!({"_id": "a1"}));
    }

    #[test]
    fn ref_resolves_id_in_both_shapes() {
        let bare: Ref<Thing> = serde_json::from_str(r#""t1""#).unwrap();
        let populated: Ref<Thing> =
            serde_json::from_str(r#"{"_id": "t1", "name": "thing"}"#).unwrap();

        assert_eq!(bare.id(), "t1");
        assert!(bare.populated().is_none());
        assert_eq!(populated.id(), "t1");
        assert_eq!(populated.populated().map(|t| t.name.as_str()), Some("thing"));
    }
}
