use super::{AppointmentStatus, PaymentMethod, User};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuickRegisterRequest {
    pub name: String,
    /// Digits only.
    pub phone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub service_id: String,
    pub time_slot_id: String,
    pub payment_method: PaymentMethod,
    pub notes: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub status: AppointmentStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRequest {
    pub new_time_slot_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_appointment_body() {
        let body = serde_json::to_value(NewAppointment {
            service_id: "svc1".to_owned(),
            time_slot_id: "s1".to_owned(),
            payment_method: PaymentMethod::Dinheiro,
            notes: String::new(),
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "serviceId": "svc1",
                "timeSlotId": "s1",
                "paymentMethod": "dinheiro",
                "notes": "",
            })
        );
    }

    #[test]
    fn quick_register_without_password() {
        let body = serde_json::to_value(QuickRegisterRequest {
            name: "Ana".to_owned(),
            phone: "48998164811".to_owned(),
            email: "ana@example.com".to_owned(),
            password: None,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({"name": "Ana", "phone": "48998164811", "email": "ana@example.com"})
        );
    }

    #[test]
    fn reschedule_body() {
        let body = serde_json::to_value(RescheduleRequest {
            new_time_slot_id: "s2".to_owned(),
        })
        .unwrap();
        assert_eq!(body, json!({"newTimeSlotId": "s2"}));
    }
}
