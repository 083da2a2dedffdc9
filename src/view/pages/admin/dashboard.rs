use dioxus::prelude::*;

use crate::{
    format::{format_currency_whole, DateStyle},
    hooks::{client::use_client, handle_error::use_handle_error},
    model::{Appointment, DashboardStats, Record},
    view::{
        app::{Error, Routes},
        components::{
            appointment::{AppointmentMeta, Avatar, StatusBadge},
            form::{Button, ButtonFlavor},
            page::Page as GenericPage,
        },
        pages::admin::{Menu, MenuItem},
    },
    workflow::admin,
};

#[component]
pub fn Page() -> Element {
    let client = use_client();
    let results = use_resource(move || async move {
        admin::load_dashboard(&client.api())
            .await
            .map_err(Error::from)
    });

    use_handle_error(results.suspend()?, |dashboard| {
        let menu = rsx! {
            Menu {
                highlight: MenuItem::Dashboard,
            }
        };

        rsx! {
            GenericPage {
                title: "Dashboard".to_owned(),
                subtitle: "Visão geral do seu negócio".to_owned(),
                breadcrumb: vec![
                    ("Dashboard".to_owned(), None)
                ],
                menu: menu,
                Stats {
                    stats: dashboard.stats,
                }
                Recent {
                    appointments: dashboard.recent,
                }
            }
        }
    })
}

#[component]
fn Stats(stats: ReadOnlySignal<DashboardStats>) -> Element {
    let stats = stats.read();
    let revenue = format_currency_whole(stats.month_revenue);
    let cards = [
        ("📅", stats.total_appointments.to_string(), "Total de Agendamentos"),
        ("🕒", stats.pending_appointments.to_string(), "Pendentes"),
        ("👥", stats.total_clients.to_string(), "Clientes Cadastrados"),
        ("💰", revenue, "Receita do Mês"),
    ];

    rsx! {
        div {
            class: "columns is-multiline",
            { cards.into_iter().map(|(icon, value, label)| rsx! {
                div {
                    key: "{label}",
                    class: "column is-one-quarter",
                    div {
                        class: "box",
                        p {
                            class: "is-size-4",
                            "{icon}"
                        }
                        p {
                            class: "title is-3",
                            "{value}"
                        }
                        p {
                            class: "heading",
                            "{label}"
                        }
                    }
                }
            }) }
        }
    }
}

#[component]
fn Recent(appointments: ReadOnlySignal<Vec<Appointment>>) -> Element {
    let nav = use_navigator();

    let body = if appointments.read().is_empty() {
        rsx! {
            div {
                class: "has-text-centered py-5",
                p {
                    class: "title is-5",
                    "Nenhum agendamento"
                }
                p {
                    "Os agendamentos aparecerão aqui"
                }
            }
        }
    } else {
        rsx! {
            { appointments.read().iter().cloned().map(|appointment| {
                let id = appointment.id().to_string();
                let user = appointment.user_details().cloned();
                let name = user
                    .as_ref()
                    .map(|user| user.name.clone())
                    .unwrap_or_else(|| "-".to_owned());
                let service = appointment
                    .service_details()
                    .map(|service| service.name.clone())
                    .unwrap_or_else(|| "-".to_owned());
                let status = appointment.status;

                rsx! {
                    div {
                        key: "{id}",
                        class: "box",
                        div {
                            class: "media",
                            div {
                                class: "media-left",
                                Avatar {
                                    user: user,
                                }
                            }
                            div {
                                class: "media-content",
                                p {
                                    class: "has-text-weight-semibold",
                                    "{name} "
                                    StatusBadge {
                                        status: status,
                                    }
                                }
                                p {
                                    class: "is-size-7",
                                    "{service}"
                                }
                                AppointmentMeta {
                                    appointment: appointment,
                                    date_style: DateStyle::DayMonth,
                                }
                            }
                        }
                    }
                }
            }) }
        }
    };

    rsx! {
        div {
            class: "box",
            div {
                class: "level",
                div {
                    class: "level-left",
                    h2 {
                        class: "title is-4",
                        "Agendamentos Recentes"
                    }
                }
                div {
                    class: "level-right",
                    Button {
                        flavor: ButtonFlavor::Light,
                        is_small: true,
                        onclick: move |_| {
                            nav.push(Routes::AdminAppointments {});
                        },
                        "Ver Todos →"
                    }
                }
            }
            { body }
        }
    }
}
