use crate::model::{
    Appointment, AppointmentStatus, Ref, Role, Service, TimeSlot, User,
};
use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

#[derive(Serialize)]
struct TestClaims {
    sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
}

fn mint(exp: Option<i64>) -> String {
    encode(
        &Header::default(),
        &TestClaims {
            sub: "u1".to_owned(),
            exp,
        },
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap()
}

pub fn token_expiring_at(exp: DateTime<Utc>) -> String {
    mint(Some(exp.timestamp()))
}

pub fn token_without_expiry() -> String {
    mint(None)
}

pub fn client_user() -> User {
    User {
        id: "u1".into(),
        name: "Ana Souza".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: Some("48998164811".to_owned()),
        role: Role::Client,
    }
}

pub fn admin_user() -> User {
    User {
        id: "u0".into(),
        name: "Vitória".to_owned(),
        email: "admin@example.com".to_owned(),
        phone: None,
        role: Role::Admin,
    }
}

pub fn service(id: &str) -> Service {
    Service {
        id: id.into(),
        name: "Alongamento em gel".to_owned(),
        description: Some("Alongamento com acabamento em gel".to_owned()),
        price: 120.0,
        duration: Some(120),
    }
}

pub fn slot(id: &str, date: &str, start: &str) -> TimeSlot {
    TimeSlot {
        id: id.into(),
        date: Some(date.to_owned()),
        start_time: Some(start.to_owned()),
        end_time: None,
        is_available: Some(true),
    }
}

pub fn appointment(id: &str, status: AppointmentStatus) -> Appointment {
    Appointment {
        id: id.into(),
        user: Some(Ref::Populated(client_user())),
        service: Some(Ref::Populated(service("svc1"))),
        time_slot: Some(Ref::Populated(slot("s1", "2024-05-15", "09:00"))),
        status,
        payment_method: Some("pix".to_owned()),
        notes: None,
    }
}
