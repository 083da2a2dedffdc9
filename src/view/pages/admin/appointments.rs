use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::{
    format::{
        format_currency, format_date, format_time, format_time_range, payment_method_label,
        DateStyle,
    },
    hooks::{
        client::use_client,
        handle_error::{use_handle_error, use_report_error},
        toasts::use_toasts,
    },
    model::{Appointment, Record},
    view::{
        app::Error,
        components::{
            appointment::{Avatar, StatusBadge},
            form::{Button, ButtonFlavor},
            layout::Loading,
            modal::Modal,
            page::Page as GenericPage,
            slot_picker::SlotPicker,
            table::Table,
        },
        pages::admin::{Menu, MenuItem},
    },
    workflow::admin::{
        self, appointment_actions, filter_appointments, AdminAction, RescheduleFlow, StatusFilter,
    },
};

#[component]
pub fn Page() -> Element {
    let client = use_client();
    let mut results = use_resource(move || async move {
        admin::load_appointments(&client.api())
            .await
            .map_err(Error::from)
    });

    use_handle_error(results.suspend()?, move |appointments| {
        let menu = rsx! {
            Menu {
                highlight: MenuItem::Appointments,
            }
        };

        rsx! {
            GenericPage {
                title: "Gerenciar Agendamentos".to_owned(),
                subtitle: "Visualize e gerencie todos os agendamentos".to_owned(),
                breadcrumb: vec![
                    ("Dashboard".to_owned(), Some(crate::view::app::Routes::AdminDashboard {})),
                    ("Agendamentos".to_owned(), None)
                ],
                menu: menu,
                PageBody {
                    appointments: appointments,
                    onchange: move |_| results.restart(),
                }
            }
        }
    })
}

fn action_flavor(action: AdminAction) -> ButtonFlavor {
    match action {
        AdminAction::Confirm | AdminAction::Complete => ButtonFlavor::Success,
        AdminAction::Reschedule => ButtonFlavor::Info,
        AdminAction::Decline | AdminAction::Cancel | AdminAction::Delete => ButtonFlavor::Danger,
    }
}

#[component]
fn PageBody(appointments: ReadOnlySignal<Vec<Appointment>>, onchange: EventHandler<()>) -> Element {
    let client = use_client();
    let mut report = use_report_error();
    let mut filter = use_signal(StatusFilter::default);
    let mut rescheduling = use_signal(|| None::<Appointment>);
    let mut deleting = use_signal(|| None::<Appointment>);

    let mut run = move |appointment: Appointment, action: AdminAction| match action {
        AdminAction::Reschedule => rescheduling.set(Some(appointment)),
        AdminAction::Delete => deleting.set(Some(appointment)),
        _ => {
            let Some(status) = action.target_status() else {
                return;
            };

            spawn(async move {
                match admin::change_status(&client.api(), &appointment, status).await {
                    Ok(()) => onchange.call(()),
                    Err(e) => report(Error::from(e)),
                }
            });
        }
    };

    let visible = filter_appointments(&appointments.read(), filter())
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

    let list = if visible.is_empty() {
        rsx! {
            div {
                class: "box has-text-centered",
                p {
                    class: "title is-5",
                    "Nenhum agendamento encontrado"
                }
                p {
                    "Os agendamentos aparecerão aqui"
                }
            }
        }
    } else {
        rsx! {
            Table {
                is_striped: true,
                is_fullwidth: true,
                thead {
                    tr {
                        th { "Cliente" }
                        th { "Status" }
                        th { "Serviço" }
                        th { "Data" }
                        th { "Horário" }
                        th { "Pagamento" }
                        th { "Valor" }
                        th {
                            style: "width: 1px",
                        }
                    }
                }
                tbody {
                    { visible.into_iter().enumerate().map(|(index, appointment)| {
                        let key = if appointment.id().is_empty() {
                            format!("row-{index}")
                        } else {
                            appointment.id().to_string()
                        };
                        let user = appointment.user_details().cloned();
                        let name = user
                            .as_ref()
                            .map(|user| user.name.clone())
                            .unwrap_or_else(|| "Sem nome".to_owned());
                        let service = appointment.service_details();
                        let service_name = service
                            .map(|service| service.name.clone())
                            .unwrap_or_else(|| "Sem serviço".to_owned());
                        let price = format_currency(service.map(|service| service.price).unwrap_or_default());
                        let slot = appointment.slot_details();
                        let date = format_date(slot.and_then(|slot| slot.date.as_deref()), DateStyle::Numeric);
                        let time = format_time(slot.and_then(|slot| slot.start_time.as_deref()));
                        let payment = payment_method_label(appointment.payment_method.as_deref());
                        let status = appointment.status;

                        rsx! {
                            tr {
                                key: "{key}",
                                td {
                                    Avatar {
                                        user: user,
                                    }
                                    " {name}"
                                }
                                td {
                                    StatusBadge {
                                        status: status,
                                    }
                                }
                                td { "{service_name}" }
                                td { "{date}" }
                                td { "{time}" }
                                td { "{payment}" }
                                td { "{price}" }
                                td {
                                    style: "white-space: nowrap;",
                                    div {
                                        class: "buttons are-small",
                                        { appointment_actions(&appointment).iter().copied().map(|action| {
                                            let appointment = appointment.clone();
                                            rsx! {
                                                Button {
                                                    key: "{action}",
                                                    flavor: action_flavor(action),
                                                    is_small: true,
                                                    onclick: move |_| run(appointment.clone(), action),
                                                    "{action.label()}"
                                                }
                                            }
                                        }) }
                                    }
                                }
                            }
                        }
                    }) }
                }
            }
        }
    };

    let reschedule_modal = rescheduling().map(|appointment| {
        rsx! {
            RescheduleModal {
                appointment: appointment,
                onclose: move |_| rescheduling.set(None),
                ondone: move |_| {
                    rescheduling.set(None);
                    onchange.call(());
                },
            }
        }
    });

    let delete_modal = deleting().map(|appointment| {
        rsx! {
            DeleteModal {
                appointment: appointment,
                onclose: move |_| deleting.set(None),
                ondone: move |_| {
                    deleting.set(None);
                    onchange.call(());
                },
            }
        }
    });

    rsx! {
        div {
            class: "buttons",
            { StatusFilter::iter().map(|option| {
                let class = if filter() == option { "button is-primary" } else { "button is-light" };
                let label = option.label();
                rsx! {
                    button {
                        key: "{label}",
                        class: "{class}",
                        onclick: move |_| filter.set(option),
                        "{label}"
                    }
                }
            }) }
        }
        { list }
        { reschedule_modal }
        { delete_modal }
    }
}

#[component]
fn RescheduleModal(
    appointment: ReadOnlySignal<Appointment>,
    onclose: EventHandler<()>,
    ondone: EventHandler<()>,
) -> Element {
    let client = use_client();
    let mut toaster = use_toasts();
    let mut report = use_report_error();
    let mut flow = use_signal(|| None::<RescheduleFlow>);
    let mut submitted = use_signal(|| false);

    use_future(move || async move {
        match RescheduleFlow::open(&client.api(), appointment()).await {
            Ok(opened) => flow.set(Some(opened)),
            Err(e) => {
                report(Error::from(e));
                onclose.call(());
            }
        }
    });

    let current = appointment.read();
    let name = current
        .user_details()
        .map(|user| user.name.clone())
        .unwrap_or_default();
    let service = current
        .service_details()
        .map(|service| service.name.clone())
        .unwrap_or_default();
    let slot = current.slot_details();
    let date = format_date(slot.and_then(|slot| slot.date.as_deref()), DateStyle::Numeric);
    let time = slot.map(format_time_range).unwrap_or_else(|| "N/A".to_owned());

    let picker = match &*flow.read() {
        None => rsx! {
            Loading {
                message: "Carregando horários...".to_owned(),
            }
        },
        Some(opened) => rsx! {
            div {
                style: "max-height: 300px; overflow-y: auto;",
                SlotPicker {
                    groups: opened.slot_groups(),
                    selected: opened.selected().map(|slot| slot.id().to_string()),
                    date_style: DateStyle::Long,
                    show_end_time: true,
                    onselect: move |slot_id: String| {
                        if let Some(opened) = flow.write().as_mut() {
                            if let Err(e) = opened.select(&slot_id) {
                                report(Error::from(e));
                            }
                        }
                    },
                }
            }
        },
    };

    let can_submit = flow
        .read()
        .as_ref()
        .is_some_and(|opened| opened.selected().is_some());

    rsx! {
        Modal {
            title: "Remanejar Agendamento",
            success_text: "Confirmar Remanejamento",
            disable_submit: !can_submit,
            is_loading: *submitted.read(),
            onclose: move |_| onclose.call(()),
            onsubmit: move |_| {
                let Some(opened) = flow() else {
                    return;
                };

                submitted.set(true);
                spawn(async move {
                    let result = opened.confirm(&client.api()).await;
                    submitted.set(false);

                    match result {
                        Ok(()) => {
                            toaster.write().new_success("Remanejado com sucesso!".to_owned());
                            ondone.call(());
                        }
                        Err(e) => report(Error::from(e)),
                    }
                });
            },
            div {
                class: "notification is-light",
                h3 {
                    class: "title is-6",
                    "Agendamento Atual"
                }
                p { strong { "Cliente: " } "{name}" }
                p { strong { "Serviço: " } "{service}" }
                p { strong { "Data: " } "{date}" }
                p { strong { "Horário: " } "{time}" }
            }
            h3 {
                class: "title is-6",
                "Selecione o Novo Horário"
            }
            { picker }
        }
    }
}

#[component]
fn DeleteModal(
    appointment: ReadOnlySignal<Appointment>,
    onclose: EventHandler<()>,
    ondone: EventHandler<()>,
) -> Element {
    let client = use_client();
    let mut toaster = use_toasts();
    let mut report = use_report_error();
    let mut submitted = use_signal(|| false);

    let service = appointment
        .read()
        .service_details()
        .map(|service| service.name.clone())
        .unwrap_or_else(|| "Sem serviço".to_owned());

    rsx! {
        Modal {
            title: "Excluir Agendamento",
            success_text: "Excluir",
            flavor: ButtonFlavor::Danger,
            is_loading: *submitted.read(),
            onclose: move |_| onclose.call(()),
            onsubmit: move |_| {
                let id = appointment.read().id().to_string();

                submitted.set(true);
                spawn(async move {
                    let result = admin::delete_appointment(&client.api(), &id).await;
                    submitted.set(false);

                    match result {
                        Ok(()) => {
                            toaster.write().new_success("Excluído com sucesso!".to_owned());
                            ondone.call(());
                        }
                        Err(e) => report(Error::from(e)),
                    }
                });
            },
            p {
                "Tem certeza que deseja excluir este agendamento?"
            }
            p {
                class: "has-text-grey",
                "{service}"
            }
        }
    }
}
