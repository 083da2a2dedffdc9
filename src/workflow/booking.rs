//! The customer's path from picking a service to a confirmed appointment.
//!
//! [`BookingFlow`] only holds selection state. The network calls live in the
//! free functions below so the same flow drives both the web page and the
//! command line client.

use super::account;
use crate::{
    api::{self, BookingApi},
    format::{digits_only, group_slots_by_date, SlotGroup},
    model::{NewAppointment, PaymentMethod, QuickRegisterRequest, Record, Service, TimeSlot, User},
    session::{self, Session, SessionStore},
    validation::{LoginForm, QuickRegisterForm, ValidationError},
};
use thiserror::Error;

pub const DAMAGED_NAILS_PREFIX: &str = "⚠️ UNHA DANIFICADA";
pub const DAMAGED_NAILS_DEFAULT_NOTE: &str = "Cliente informou que possui unha(s) danificada(s)";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Selecione um serviço e horário")]
    Incomplete,

    #[error("Horário indisponível")]
    SlotUnavailable,

    #[error("Entre ou cadastre-se para concluir o agendamento")]
    Unauthenticated,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Session(#[from] session::Error),

    #[error(transparent)]
    Account(#[from] account::Error),

    #[error("{}", .0.message_or("Erro ao processar. Tente novamente."))]
    QuickRegister(#[source] api::Error),

    #[error("{}", .0.message_or("Erro ao carregar horários"))]
    Slots(#[source] api::Error),

    #[error("{}", .0.message_or("Erro ao realizar agendamento"))]
    Booking(#[source] api::Error),
}

impl Error {
    /// True when the API rejected the stored token.
    pub fn is_unauthenticated(&self) -> bool {
        match self {
            Error::Unauthenticated => true,
            Error::Booking(e) | Error::Slots(e) => e.is_unauthenticated(),
            _ => false,
        }
    }
}

/// Answer to "do you have broken or damaged nails that need a new extension?".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DamagedNails {
    #[default]
    Unanswered,
    No,
    Yes {
        note: String,
    },
}

impl DamagedNails {
    /// The note attached to the appointment, empty unless the answer is yes.
    pub fn appointment_note(&self) -> String {
        match self {
            DamagedNails::Yes { note } if !note.trim().is_empty() => {
                format!("{}: {}", DAMAGED_NAILS_PREFIX, note.trim())
            }
            DamagedNails::Yes { .. } => {
                format!("{}: {}", DAMAGED_NAILS_PREFIX, DAMAGED_NAILS_DEFAULT_NOTE)
            }
            DamagedNails::Unanswered | DamagedNails::No => String::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    SelectService,
    SelectSlot,
    Review,
    Confirmed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Next {
    /// Ready to send.
    Book(NewAppointment),
    /// The customer has to log in or quick register first.
    Authenticate,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingFlow {
    service: Option<Service>,
    slots: Vec<TimeSlot>,
    loading_slots: bool,
    slot: Option<TimeSlot>,
    damaged_nails: DamagedNails,
    payment_method: PaymentMethod,
    confirmed: bool,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        if self.confirmed {
            return Step::Confirmed;
        }

        match (&self.service, &self.slot) {
            (None, _) => Step::SelectService,
            (Some(_), None) => Step::SelectSlot,
            (Some(_), Some(_)) => Step::Review,
        }
    }

    pub fn service(&self) -> Option<&Service> {
        self.service.as_ref()
    }

    pub fn slot(&self) -> Option<&TimeSlot> {
        self.slot.as_ref()
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn slot_groups(&self) -> Vec<SlotGroup> {
        group_slots_by_date(&self.slots)
    }

    pub fn is_loading_slots(&self) -> bool {
        self.loading_slots
    }

    pub fn damaged_nails(&self) -> &DamagedNails {
        &self.damaged_nails
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn is_service_selected(&self, service_id: &str) -> bool {
        self.service
            .as_ref()
            .is_some_and(|service| service.id().as_str() == service_id)
    }

    pub fn is_slot_selected(&self, slot_id: &str) -> bool {
        self.slot
            .as_ref()
            .is_some_and(|slot| slot.id().as_str() == slot_id)
    }

    /// Starts over from a new service. The slots for it still have to be
    /// fetched, see [`load_slots`].
    pub fn select_service(&mut self, service: Service) {
        tracing::debug!("service {} selected", service.id);

        self.service = Some(service);
        self.slot = None;
        self.slots.clear();
        self.damaged_nails = DamagedNails::Unanswered;
        self.loading_slots = true;
        self.confirmed = false;
    }

    /// Returns false when the slots belong to a service that is no longer
    /// selected, in which case they are dropped.
    pub fn slots_loaded(&mut self, service_id: &str, slots: Vec<TimeSlot>) -> bool {
        if !self.is_service_selected(service_id) {
            tracing::debug!("dropping stale slots for service {}", service_id);
            return false;
        }

        self.slots = slots;
        self.loading_slots = false;
        true
    }

    pub fn slots_failed(&mut self, service_id: &str) {
        if self.is_service_selected(service_id) {
            self.slots.clear();
            self.loading_slots = false;
        }
    }

    pub fn select_slot(&mut self, slot_id: &str) -> Result<(), Error> {
        let slot = self
            .slots
            .iter()
            .find(|slot| slot.id().as_str() == slot_id)
            .ok_or(Error::SlotUnavailable)?;

        self.slot = Some(slot.clone());
        Ok(())
    }

    pub fn answer_damaged_nails(&mut self, answer: DamagedNails) {
        self.damaged_nails = answer;
    }

    pub fn set_payment_method(&mut self, payment_method: PaymentMethod) {
        self.payment_method = payment_method;
    }

    pub fn request(&self) -> Result<NewAppointment, Error> {
        let (Some(service), Some(slot)) = (&self.service, &self.slot) else {
            return Err(Error::Incomplete);
        };

        Ok(NewAppointment {
            service_id: service.id().to_string(),
            time_slot_id: slot.id().to_string(),
            payment_method: self.payment_method,
            notes: self.damaged_nails.appointment_note(),
        })
    }

    pub fn submit(&self, authenticated: bool) -> Result<Next, Error> {
        let request = self.request()?;

        if authenticated {
            Ok(Next::Book(request))
        } else {
            Ok(Next::Authenticate)
        }
    }

    /// Clears the selection after the API accepted the booking.
    pub fn confirmed(&mut self) {
        *self = BookingFlow {
            payment_method: self.payment_method,
            confirmed: true,
            ..Default::default()
        };
    }
}

pub async fn load_services<A: BookingApi>(api: &A) -> Result<Vec<Service>, api::Error> {
    api.services().await
}

pub async fn load_slots<A: BookingApi>(api: &A, service_id: &str) -> Result<Vec<TimeSlot>, Error> {
    api.available_slots(service_id.to_owned())
        .await
        .map_err(Error::Slots)
}

/// Sends the booking. Nothing is sent without a live session.
pub async fn book<A: BookingApi, S: SessionStore>(
    api: &A,
    session: &Session<S>,
    request: NewAppointment,
) -> Result<(), Error> {
    if !session.is_authenticated() {
        return Err(Error::Unauthenticated);
    }

    let service_id = request.service_id.clone();
    let time_slot_id = request.time_slot_id.clone();

    api.create_appointment(request)
        .await
        .map_err(Error::Booking)?;

    tracing::info!(
        "appointment booked for service {} at slot {}",
        service_id,
        time_slot_id
    );
    Ok(())
}

/// Creates an account from the quick registration form, where the 4 digit
/// PIN is the password, then books.
pub async fn quick_register_and_book<A: BookingApi, S: SessionStore>(
    api: &A,
    session: &Session<S>,
    form: &QuickRegisterForm,
    request: NewAppointment,
) -> Result<Option<User>, Error> {
    form.validate()?;

    let response = api
        .quick_register(QuickRegisterRequest {
            name: form.name.trim().to_owned(),
            phone: digits_only(&form.phone),
            email: form.email.trim().to_owned(),
            password: Some(form.pin.clone()),
        })
        .await
        .map_err(Error::QuickRegister)?;

    let user = session.begin(response)?;
    book(api, session, request).await?;
    Ok(user)
}

pub async fn login_and_book<A: BookingApi, S: SessionStore>(
    api: &A,
    session: &Session<S>,
    form: &LoginForm,
    request: NewAppointment,
) -> Result<Option<User>, Error> {
    let user = account::login(api, session, form).await?;
    book(api, session, request).await?;
    Ok(user)
}
