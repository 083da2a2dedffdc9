use crate::{
    api::{self, BookingApi},
    format::{group_slots_by_date, status_label, SlotGroup},
    model::{Appointment, AppointmentStatus, DashboardStats, Record, TimeSlot},
};
use thiserror::Error;

/// Appointments shown in the dashboard's "recent" list.
pub const RECENT_APPOINTMENTS: u32 = 5;

fn details(e: &api::Error) -> String {
    e.message_or(&e.to_string())
}

fn label(status: &AppointmentStatus) -> &'static str {
    status_label(*status)
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Não é possível alterar de {} para {}", label(.from), label(.to))]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    #[error("Somente agendamentos confirmados podem ser remanejados")]
    NotReschedulable(AppointmentStatus),

    #[error("ID do serviço não encontrado")]
    MissingService,

    #[error("Agendamento sem identificador")]
    MissingId,

    #[error("Selecione um novo horário")]
    NoSlotSelected,

    #[error("Horário indisponível")]
    SlotUnavailable,

    #[error("{}", .0.message_or("Erro ao carregar dados"))]
    Load(#[source] api::Error),

    #[error("{}", .0.message_or("Erro ao atualizar status"))]
    StatusUpdate(#[source] api::Error),

    #[error("Erro ao excluir: {}", details(.0))]
    Delete(#[source] api::Error),

    #[error("Erro ao buscar horários: {}", details(.0))]
    Slots(#[source] api::Error),

    #[error("Erro ao remanejar: {}", details(.0))]
    Reschedule(#[source] api::Error),
}

impl Error {
    pub fn is_unauthenticated(&self) -> bool {
        match self {
            Error::Load(e)
            | Error::StatusUpdate(e)
            | Error::Delete(e)
            | Error::Slots(e)
            | Error::Reschedule(e) => e.is_unauthenticated(),
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumIter)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Todos",
            StatusFilter::Pending => "Pendentes",
            StatusFilter::Confirmed => "Confirmados",
            StatusFilter::Completed => "Concluídos",
            StatusFilter::Cancelled => "Cancelados",
        }
    }

    pub fn status(&self) -> Option<AppointmentStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Pending => Some(AppointmentStatus::Pending),
            StatusFilter::Confirmed => Some(AppointmentStatus::Confirmed),
            StatusFilter::Completed => Some(AppointmentStatus::Completed),
            StatusFilter::Cancelled => Some(AppointmentStatus::Cancelled),
        }
    }

    pub fn matches(&self, status: AppointmentStatus) -> bool {
        self.status().map_or(true, |wanted| wanted == status)
    }
}

pub fn filter_appointments(appointments: &[Appointment], filter: StatusFilter) -> Vec<&Appointment> {
    appointments
        .iter()
        .filter(|appointment| filter.matches(appointment.status))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum AdminAction {
    Confirm,
    Decline,
    Reschedule,
    Complete,
    Cancel,
    Delete,
}

impl AdminAction {
    pub fn label(&self) -> &'static str {
        match self {
            AdminAction::Confirm => "Confirmar",
            AdminAction::Decline => "Recusar",
            AdminAction::Reschedule => "Remanejar",
            AdminAction::Complete => "Concluir",
            AdminAction::Cancel => "Cancelar",
            AdminAction::Delete => "Excluir",
        }
    }

    /// The status this action moves an appointment to, for the actions that
    /// are plain status changes.
    pub fn target_status(&self) -> Option<AppointmentStatus> {
        match self {
            AdminAction::Confirm => Some(AppointmentStatus::Confirmed),
            AdminAction::Decline | AdminAction::Cancel => Some(AppointmentStatus::Cancelled),
            AdminAction::Complete => Some(AppointmentStatus::Completed),
            AdminAction::Reschedule | AdminAction::Delete => None,
        }
    }
}

pub fn available_actions(status: AppointmentStatus) -> &'static [AdminAction] {
    match status {
        AppointmentStatus::Pending => &[
            AdminAction::Confirm,
            AdminAction::Decline,
            AdminAction::Delete,
        ],
        AppointmentStatus::Confirmed => &[
            AdminAction::Reschedule,
            AdminAction::Complete,
            AdminAction::Cancel,
            AdminAction::Delete,
        ],
        AppointmentStatus::Cancelled
        | AppointmentStatus::Completed
        | AppointmentStatus::Unknown => &[AdminAction::Delete],
    }
}

/// Actions offered for a listed appointment. A record without an id is still
/// listed but nothing can be done with it.
pub fn appointment_actions(appointment: &Appointment) -> &'static [AdminAction] {
    if appointment.id().is_empty() {
        return &[];
    }

    available_actions(appointment.status)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub recent: Vec<Appointment>,
}

pub async fn load_dashboard<A: BookingApi>(api: &A) -> Result<Dashboard, Error> {
    let (stats, recent) = futures::try_join!(
        api.dashboard_stats(),
        api.admin_appointments(Some(RECENT_APPOINTMENTS))
    )
    .map_err(Error::Load)?;

    Ok(Dashboard { stats, recent })
}

pub async fn load_appointments<A: BookingApi>(api: &A) -> Result<Vec<Appointment>, Error> {
    api.admin_appointments(None).await.map_err(Error::Load)
}

pub async fn change_status<A: BookingApi>(
    api: &A,
    appointment: &Appointment,
    status: AppointmentStatus,
) -> Result<(), Error> {
    if appointment.id().is_empty() {
        return Err(Error::MissingId);
    }

    if !appointment.status.can_transition_to(status) {
        return Err(Error::InvalidTransition {
            from: appointment.status,
            to: status,
        });
    }

    api.update_status(appointment.id().to_string(), status)
        .await
        .map_err(Error::StatusUpdate)?;

    tracing::info!(
        "appointment {} moved from {} to {}",
        appointment.id(),
        appointment.status,
        status
    );
    Ok(())
}

pub async fn delete_appointment<A: BookingApi>(api: &A, appointment_id: &str) -> Result<(), Error> {
    if appointment_id.is_empty() {
        return Err(Error::MissingId);
    }

    api.delete_appointment(appointment_id.to_owned())
        .await
        .map_err(Error::Delete)?;

    tracing::info!("appointment {} deleted", appointment_id);
    Ok(())
}

/// Moving a confirmed appointment to another free slot of the same service.
#[derive(Clone, Debug, PartialEq)]
pub struct RescheduleFlow {
    appointment: Appointment,
    service_id: String,
    slots: Vec<TimeSlot>,
    selected: Option<TimeSlot>,
}

impl RescheduleFlow {
    /// Checks the appointment can be moved. Slots still have to be loaded,
    /// [`RescheduleFlow::open`] does both.
    pub fn prepare(appointment: Appointment) -> Result<Self, Error> {
        if appointment.status != AppointmentStatus::Confirmed {
            return Err(Error::NotReschedulable(appointment.status));
        }

        let service_id = appointment
            .service_id()
            .ok_or(Error::MissingService)?
            .to_owned();

        Ok(RescheduleFlow {
            appointment,
            service_id,
            slots: Vec::new(),
            selected: None,
        })
    }

    pub async fn open<A: BookingApi>(api: &A, appointment: Appointment) -> Result<Self, Error> {
        let mut flow = Self::prepare(appointment)?;

        let slots = api
            .available_slots(flow.service_id.clone())
            .await
            .map_err(Error::Slots)?;
        flow.slots_loaded(slots);

        Ok(flow)
    }

    /// Keeps every slot except the one the appointment already holds.
    pub fn slots_loaded(&mut self, slots: Vec<TimeSlot>) {
        let current = self.appointment.time_slot_id().map(str::to_owned);

        self.slots = slots
            .into_iter()
            .filter(|slot| Some(slot.id().as_str()) != current.as_deref())
            .collect();
        self.selected = None;
    }

    pub fn appointment(&self) -> &Appointment {
        &self.appointment
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn slot_groups(&self) -> Vec<SlotGroup> {
        group_slots_by_date(&self.slots)
    }

    pub fn selected(&self) -> Option<&TimeSlot> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, slot_id: &str) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|slot| slot.id().as_str() == slot_id)
    }

    pub fn select(&mut self, slot_id: &str) -> Result<(), Error> {
        let slot = self
            .slots
            .iter()
            .find(|slot| slot.id().as_str() == slot_id)
            .ok_or(Error::SlotUnavailable)?;

        self.selected = Some(slot.clone());
        Ok(())
    }

    pub async fn confirm<A: BookingApi>(&self, api: &A) -> Result<(), Error> {
        let slot = self.selected.as_ref().ok_or(Error::NoSlotSelected)?;

        api.reschedule(self.appointment.id().to_string(), slot.id().to_string())
            .await
            .map_err(Error::Reschedule)?;

        tracing::info!(
            "appointment {} rescheduled to slot {}",
            self.appointment.id(),
            slot.id()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::MockBookingApi,
        model::Ref,
        test_helpers::{appointment, slot},
    };
    use mockall::predicate::eq;
    use test_case::test_case;

    fn mixed() -> Vec<Appointment> {
        vec![
            appointment("a1", AppointmentStatus::Pending),
            appointment("a2", AppointmentStatus::Confirmed),
            appointment("a3", AppointmentStatus::Completed),
            appointment("a4", AppointmentStatus::Pending),
            appointment("", AppointmentStatus::Pending),
        ]
    }

    #[test_case(StatusFilter::All, &["a1", "a2", "a3", "a4", ""]; "all")]
    #[test_case(StatusFilter::Pending, &["a1", "a4", ""]; "pending")]
    #[test_case(StatusFilter::Confirmed, &["a2"]; "confirmed")]
    #[test_case(StatusFilter::Cancelled, &[]; "cancelled")]
    fn filter(filter: StatusFilter, expected: &[&str]) {
        let appointments = mixed();
        let ids = filter_appointments(&appointments, filter)
            .into_iter()
            .map(|appointment| appointment.id().as_str())
            .collect::<Vec<_>>();

        assert_eq!(ids, expected);
    }

    #[test_case(AppointmentStatus::Pending, &[AdminAction::Confirm, AdminAction::Decline, AdminAction::Delete]; "pending")]
    #[test_case(AppointmentStatus::Confirmed, &[AdminAction::Reschedule, AdminAction::Complete, AdminAction::Cancel, AdminAction::Delete]; "confirmed")]
    #[test_case(AppointmentStatus::Completed, &[AdminAction::Delete]; "completed")]
    #[test_case(AppointmentStatus::Cancelled, &[AdminAction::Delete]; "cancelled")]
    #[test_case(AppointmentStatus::Unknown, &[AdminAction::Delete]; "unknown")]
    fn actions(status: AppointmentStatus, expected: &[AdminAction]) {
        assert_eq!(available_actions(status), expected);
    }

    #[test]
    fn records_without_id_are_listed_without_actions() {
        let appointments = mixed();
        let missing = appointments
            .iter()
            .find(|appointment| appointment.id().is_empty())
            .unwrap();

        assert!(appointment_actions(missing).is_empty());
        assert_eq!(
            appointment_actions(&appointments[0]),
            available_actions(AppointmentStatus::Pending)
        );
    }

    #[tokio::test]
    async fn actions_on_records_without_id_never_reach_the_api() {
        let api = MockBookingApi::new();
        let missing = appointment("", AppointmentStatus::Pending);

        let result = change_status(&api, &missing, AppointmentStatus::Confirmed).await;
        assert!(matches!(result, Err(Error::MissingId)));

        let result = delete_appointment(&api, "").await;
        assert!(matches!(result, Err(Error::MissingId)));
    }

    #[test]
    fn status_actions_stay_inside_transition_set() {
        for status in [AppointmentStatus::Pending, AppointmentStatus::Confirmed] {
            for action in available_actions(status) {
                if let Some(target) = action.target_status() {
                    assert!(status.can_transition_to(target), "{action} from {status}");
                }
            }
        }
    }

    enum ChangeStatusTest {
        Allowed,
        Forbidden,
        ApiFailure,
    }

    #[test_case(ChangeStatusTest::Allowed; "allowed")]
    #[test_case(ChangeStatusTest::Forbidden; "forbidden")]
    #[test_case(ChangeStatusTest::ApiFailure; "api_failure")]
    #[tokio::test]
    async fn change_status_flow(test_name: ChangeStatusTest) {
        let mut api = MockBookingApi::new();

        let (current, target) = match test_name {
            ChangeStatusTest::Forbidden => (AppointmentStatus::Completed, AppointmentStatus::Pending),
            _ => (AppointmentStatus::Pending, AppointmentStatus::Confirmed),
        };

        match test_name {
            ChangeStatusTest::Allowed => {
                api.expect_update_status()
                    .with(eq("a1".to_owned()), eq(AppointmentStatus::Confirmed))
                    .times(1)
                    .returning(|_, _| Box::pin(async { Ok(()) }));
            }
            ChangeStatusTest::Forbidden => {
                api.expect_update_status().never();
            }
            ChangeStatusTest::ApiFailure => {
                api.expect_update_status()
                    .times(1)
                    .returning(|_, _| Box::pin(async { Err(api::Error::from_response(500, "")) }));
            }
        }

        let result = change_status(&api, &appointment("a1", current), target).await;

        match test_name {
            ChangeStatusTest::Allowed => assert!(result.is_ok()),
            ChangeStatusTest::Forbidden => {
                let error = result.unwrap_err();
                assert!(matches!(error, Error::InvalidTransition { .. }));
                assert_eq!(error.to_string(), "Não é possível alterar de Concluído para Pendente");
            }
            ChangeStatusTest::ApiFailure => {
                assert_eq!(result.unwrap_err().to_string(), "Erro ao atualizar status")
            }
        }
    }

    #[tokio::test]
    async fn dashboard_loads_stats_and_recent() {
        let mut api = MockBookingApi::new();
        api.expect_dashboard_stats().times(1).returning(|| {
            Box::pin(async {
                Ok(DashboardStats {
                    pending_appointments: 2,
                    ..Default::default()
                })
            })
        });
        api.expect_admin_appointments()
            .with(eq(Some(RECENT_APPOINTMENTS)))
            .times(1)
            .returning(|_| {
                Box::pin(async { Ok(vec![appointment("a1", AppointmentStatus::Pending)]) })
            });

        let dashboard = load_dashboard(&api).await.unwrap();

        assert_eq!(dashboard.stats.pending_appointments, 2);
        assert_eq!(dashboard.recent.len(), 1);
    }

    #[tokio::test]
    async fn dashboard_fails_when_either_request_fails() {
        let mut api = MockBookingApi::new();
        api.expect_dashboard_stats()
            .returning(|| Box::pin(async { Err(api::Error::from_response(403, "")) }));
        api.expect_admin_appointments()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));

        assert!(matches!(load_dashboard(&api).await, Err(Error::Load(_))));
    }

    #[tokio::test]
    async fn delete_reports_server_message() {
        let mut api = MockBookingApi::new();
        api.expect_delete_appointment()
            .with(eq("a1".to_owned()))
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Err(api::Error::from_response(404, r#"{"error": "Agendamento não encontrado"}"#))
                })
            });

        let error = delete_appointment(&api, "a1").await.unwrap_err();
        assert_eq!(error.to_string(), "Erro ao excluir: Agendamento não encontrado");
    }

    #[test]
    fn reschedule_requires_confirmed() {
        let result = RescheduleFlow::prepare(appointment("a1", AppointmentStatus::Pending));
        assert!(matches!(
            result,
            Err(Error::NotReschedulable(AppointmentStatus::Pending))
        ));
    }

    #[test]
    fn reschedule_requires_service() {
        let mut appointment = appointment("a1", AppointmentStatus::Confirmed);
        appointment.service = None;

        let error = RescheduleFlow::prepare(appointment).unwrap_err();
        assert_eq!(error.to_string(), "ID do serviço não encontrado");
    }

    #[tokio::test]
    async fn reschedule_excludes_current_slot() {
        let mut appointment = appointment("a1", AppointmentStatus::Confirmed);
        appointment.service = Some(Ref::Id("svc1".to_owned()));

        let mut api = MockBookingApi::new();
        api.expect_available_slots()
            .with(eq("svc1".to_owned()))
            .times(1)
            .returning(|_| {
                Box::pin(async {
                    Ok(vec![
                        slot("s1", "2024-05-15", "09:00"),
                        slot("s2", "2024-05-15", "11:00"),
                        slot("s3", "2024-05-17", "09:00"),
                    ])
                })
            });
        api.expect_reschedule()
            .with(eq("a1".to_owned()), eq("s3".to_owned()))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let mut flow = RescheduleFlow::open(&api, appointment).await.unwrap();

        let ids = flow
            .slots()
            .iter()
            .map(|slot| slot.id().as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["s2", "s3"]);
        assert!(matches!(flow.select("s1"), Err(Error::SlotUnavailable)));

        flow.select("s3").unwrap();
        flow.confirm(&api).await.unwrap();
    }

    #[tokio::test]
    async fn reschedule_confirm_without_selection() {
        let mut api = MockBookingApi::new();
        api.expect_reschedule().never();

        let flow = RescheduleFlow::prepare(appointment("a1", AppointmentStatus::Confirmed)).unwrap();
        let error = flow.confirm(&api).await.unwrap_err();

        assert_eq!(error.to_string(), "Selecione um novo horário");
    }
}
