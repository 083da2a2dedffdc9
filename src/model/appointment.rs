use super::{Record, RecordId, Ref, Service, TimeSlot, User};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(flatten)]
    pub id: RecordId,
    #[serde(default)]
    pub user: Option<Ref<User>>,
    #[serde(default)]
    pub service: Option<Ref<Service>>,
    #[serde(default, rename = "timeSlot")]
    pub time_slot: Option<Ref<TimeSlot>>,
    #[serde(default)]
    pub status: AppointmentStatus,
    /// Kept as sent so labels for methods this client does not know still render.
    #[serde(default, rename = "paymentMethod")]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Appointment {
    pub fn service_id(&self) -> Option<&str> {
        self.service
            .as_ref()
            .map(|service| service.id())
            .filter(|id| !id.is_empty())
    }

    pub fn time_slot_id(&self) -> Option<&str> {
        self.time_slot
            .as_ref()
            .map(|slot| slot.id())
            .filter(|id| !id.is_empty())
    }

    pub fn user_details(&self) -> Option<&User> {
        self.user.as_ref().and_then(Ref::populated)
    }

    pub fn service_details(&self) -> Option<&Service> {
        self.service.as_ref().and_then(Ref::populated)
    }

    pub fn slot_details(&self) -> Option<&TimeSlot> {
        self.time_slot.as_ref().and_then(Ref::populated)
    }
}

impl Record for Appointment {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    /// Statuses an admin may move an appointment to from this one.
    pub fn allowed_transitions(&self) -> &'static [AppointmentStatus] {
        match self {
            AppointmentStatus::Pending => {
                &[AppointmentStatus::Confirmed, AppointmentStatus::Cancelled]
            }
            AppointmentStatus::Confirmed => {
                &[AppointmentStatus::Completed, AppointmentStatus::Cancelled]
            }
            AppointmentStatus::Cancelled
            | AppointmentStatus::Completed
            | AppointmentStatus::Unknown => &[],
        }
    }

    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Pix,
    Dinheiro,
    Credito,
    Debito,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_appointments: u64,
    pub pending_appointments: u64,
    pub total_clients: u64,
    pub month_revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use test_case::test_case;

    #[test_case(AppointmentStatus::Pending, AppointmentStatus::Confirmed, true; "pending to confirmed")]
    #[test_case(AppointmentStatus::Pending, AppointmentStatus::Cancelled, true; "pending to cancelled")]
    #[test_case(AppointmentStatus::Pending, AppointmentStatus::Completed, false; "pending to completed")]
    #[test_case(AppointmentStatus::Confirmed, AppointmentStatus::Completed, true; "confirmed to completed")]
    #[test_case(AppointmentStatus::Confirmed, AppointmentStatus::Cancelled, true; "confirmed to cancelled")]
    #[test_case(AppointmentStatus::Confirmed, AppointmentStatus::Pending, false; "confirmed to pending")]
    #[test_case(AppointmentStatus::Completed, AppointmentStatus::Cancelled, false; "completed is terminal")]
    #[test_case(AppointmentStatus::Cancelled, AppointmentStatus::Confirmed, false; "cancelled is terminal")]
    fn transitions(from: AppointmentStatus, to: AppointmentStatus, allowed: bool) {
        assert_eq!(from.can_transition_to(to), allowed);
    }

    #[test]
    fn unknown_status_is_tolerated() {
        let status: AppointmentStatus = serde_json::from_str(r#""no_show""#).unwrap();
        assert_eq!(status, AppointmentStatus::Unknown);
        assert!(status.is_terminal());
    }

    #[test]
    fn payment_method_wire_names() {
        assert_eq!(PaymentMethod::from_str("dinheiro").unwrap(), PaymentMethod::Dinheiro);
        assert_eq!(
            serde_json::to_value(PaymentMethod::Pix).unwrap(),
            serde_json::json!("pix")
        );
    }

    #[test]
    fn appointment_with_populated_relations() {
        let appointment: Appointment = serde_json::from_str(
            r#"{
                "_id": "a1",
                "user": {"_id": "u1", "name": "Ana", "email": "ana@example.com"},
                "service": {"_id": "svc1", "name": "Alongamento", "price": 120},
                "timeSlot": {"_id": "s1", "date": "2024-05-15", "start_time": "09:00"},
                "status": "confirmed",
                "paymentMethod": "pix"
            }"#,
        )
        .unwrap();

        assert_eq!(appointment.service_id(), Some("svc1"));
        assert_eq!(appointment.time_slot_id(), Some("s1"));
        assert_eq!(appointment.user_details().map(|u| u.name.as_str()), Some("Ana"));
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn appointment_with_bare_relations() {
        let appointment: Appointment = serde_json::from_str(
            r#"{"id": "a2", "service": "svc1", "timeSlot": "s9", "status": "pending"}"#,
        )
        .unwrap();

        assert_eq!(appointment.id.as_str(), "a2");
        assert_eq!(appointment.service_id(), Some("svc1"));
        assert_eq!(appointment.time_slot_id(), Some("s9"));
        assert!(appointment.service_details().is_none());
        assert!(appointment.user.is_none());
    }

    #[test]
    fn dashboard_stats_defaults_missing_fields() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"pendingAppointments": 3, "monthRevenue": 450.5}"#).unwrap();

        assert_eq!(stats.pending_appointments, 3);
        assert_eq!(stats.total_appointments, 0);
        assert_eq!(stats.month_revenue, 450.5);
    }
}
