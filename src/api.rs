pub mod envelope;
pub mod http;

pub use http::HttpApi;

use crate::model::{
    Appointment, AppointmentStatus, AuthResponse, DashboardStats, LoginRequest, NewAppointment,
    QuickRegisterRequest, RegisterRequest, Service, TimeSlot, User,
};
#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use std::future::Future;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to reach the server: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected response from the server: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("server responded with {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Api {
        status: u16,
        message: Option<String>,
    },
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl Error {
    /// Builds the error for a non-success response, picking the message out
    /// of an `{"error": ...}` or `{"message": ...}` body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error.or(body.message))
            .filter(|message| !message.trim().is_empty());

        Error::Api { status, message }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Error::Api { status: 401, .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// The server's explanation when it sent one, otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Error::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// The salon's REST API.
#[cfg_attr(test, automock)]
pub trait BookingApi {
    fn register(
        &self,
        request: RegisterRequest,
    ) -> impl Future<Output = Result<AuthResponse, Error>>;

    fn login(&self, request: LoginRequest) -> impl Future<Output = Result<AuthResponse, Error>>;

    fn quick_register(
        &self,
        request: QuickRegisterRequest,
    ) -> impl Future<Output = Result<AuthResponse, Error>>;

    fn current_user(&self) -> impl Future<Output = Result<User, Error>>;

    fn services(&self) -> impl Future<Output = Result<Vec<Service>, Error>>;

    fn available_slots(
        &self,
        service_id: String,
    ) -> impl Future<Output = Result<Vec<TimeSlot>, Error>>;

    fn create_appointment(
        &self,
        request: NewAppointment,
    ) -> impl Future<Output = Result<(), Error>>;

    fn my_appointments(&self) -> impl Future<Output = Result<Vec<Appointment>, Error>>;

    fn dashboard_stats(&self) -> impl Future<Output = Result<DashboardStats, Error>>;

    fn admin_appointments(
        &self,
        limit: Option<u32>,
    ) -> impl Future<Output = Result<Vec<Appointment>, Error>>;

    fn update_status(
        &self,
        appointment_id: String,
        status: AppointmentStatus,
    ) -> impl Future<Output = Result<(), Error>>;

    fn delete_appointment(&self, appointment_id: String)
        -> impl Future<Output = Result<(), Error>>;

    fn reschedule(
        &self,
        appointment_id: String,
        new_time_slot_id: String,
    ) -> impl Future<Output = Result<(), Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(400, r#"{"error": "Horário indisponível"}"#, Some("Horário indisponível"); "error field")]
    #[test_case(422, r#"{"message": "Dados inválidos"}"#, Some("Dados inválidos"); "message field")]
    #[test_case(500, "<html>oops</html>", None; "not json")]
    #[test_case(400, r#"{"error": "  "}"#, None; "blank message")]
    fn from_response(status: u16, body: &str, expected: Option<&str>) {
        match Error::from_response(status, body) {
            Error::Api {
                status: got_status,
                message,
            } => {
                assert_eq!(got_status, status);
                assert_eq!(message.as_deref(), expected);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn message_or_prefers_server_message() {
        let with_message = Error::from_response(409, r#"{"error": "Horário já reservado"}"#);
        let without_message = Error::from_response(500, "");

        assert_eq!(with_message.message_or("Erro"), "Horário já reservado");
        assert_eq!(without_message.message_or("Erro"), "Erro");
    }

    #[test]
    fn unauthenticated() {
        assert!(Error::from_response(401, "").is_unauthenticated());
        assert!(!Error::from_response(403, "").is_unauthenticated());
        assert!(Error::from_response(404, "").is_not_found());
    }

    #[test]
    fn display() {
        assert_eq!(
            Error::from_response(400, r#"{"error": "Serviço inválido"}"#).to_string(),
            "server responded with 400: Serviço inválido"
        );
        assert_eq!(
            Error::from_response(502, "").to_string(),
            "server responded with 502: no details"
        );
    }
}
