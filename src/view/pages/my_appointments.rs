use dioxus::prelude::*;

use crate::{
    api::BookingApi,
    format::DateStyle,
    hooks::{client::use_client, handle_error::use_handle_error},
    model::{Appointment, Record},
    view::{
        app::{Error, Routes},
        components::appointment::{AppointmentMeta, StatusBadge},
    },
};

#[component]
pub fn Page() -> Element {
    let client = use_client();
    let results = use_resource(move || async move {
        client
            .api()
            .my_appointments()
            .await
            .map_err(Error::from_api_error)
    });

    use_handle_error(results.suspend()?, |appointments| {
        rsx! {
            section {
                class: "section",
                div {
                    class: "container",
                    h1 {
                        class: "title",
                        "Meus Agendamentos"
                    }
                    PageBody {
                        appointments: appointments,
                    }
                }
            }
        }
    })
}

#[component]
fn PageBody(appointments: ReadOnlySignal<Vec<Appointment>>) -> Element {
    if appointments.read().is_empty() {
        return rsx! {
            div {
                class: "notification is-light has-text-centered",
                p {
                    class: "mb-3",
                    "Você ainda não tem agendamentos"
                }
                Link {
                    class: "button is-primary",
                    to: Routes::Services {},
                    "Agendar Agora"
                }
            }
        };
    }

    rsx! {
        { appointments.read().iter().cloned().map(|appointment| {
            let id = appointment.id().to_string();
            let service = appointment
                .service_details()
                .map(|service| service.name.clone())
                .unwrap_or_else(|| "Sem serviço".to_owned());
            let notes = appointment.notes.clone().filter(|notes| !notes.is_empty());
            let status = appointment.status;

            rsx! {
                div {
                    key: "{id}",
                    class: "box",
                    div {
                        class: "level is-mobile mb-2",
                        div {
                            class: "level-left",
                            p {
                                class: "has-text-weight-semibold",
                                "{service}"
                            }
                        }
                        div {
                            class: "level-right",
                            StatusBadge {
                                status: status,
                            }
                        }
                    }
                    AppointmentMeta {
                        appointment: appointment,
                        date_style: DateStyle::Long,
                    }
                    { notes.map(|notes| rsx! {
                        p {
                            class: "is-size-7 has-text-grey",
                            "{notes}"
                        }
                    }) }
                }
            }
        }) }
    }
}
