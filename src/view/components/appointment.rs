use dioxus::prelude::*;

use crate::{
    format::{
        format_currency, format_date, format_time, payment_method_label, status_class,
        status_label, DateStyle,
    },
    model::{Appointment, AppointmentStatus, User},
};

#[component]
pub fn StatusBadge(status: AppointmentStatus) -> Element {
    let class = status_class(status);
    let label = status_label(status);

    rsx! {
        span {
            class: "{class}",
            "{label}"
        }
    }
}

/// Client initial in a round badge.
#[component]
pub fn Avatar(user: Option<User>) -> Element {
    let initial = user.map(|user| user.initial()).unwrap_or('U');

    rsx! {
        span {
            class: "tag is-primary is-rounded is-medium has-text-weight-bold",
            "{initial}"
        }
    }
}

/// Date, time, payment and price of an appointment.
#[component]
pub fn AppointmentMeta(appointment: ReadOnlySignal<Appointment>, date_style: DateStyle) -> Element {
    let appointment = appointment.read();
    let slot = appointment.slot_details();
    let date = format_date(slot.and_then(|slot| slot.date.as_deref()), date_style);
    let time = format_time(slot.and_then(|slot| slot.start_time.as_deref()));
    let payment = payment_method_label(appointment.payment_method.as_deref());
    let price = appointment
        .service_details()
        .map(|service| format_currency(service.price));

    rsx! {
        div {
            class: "tags",
            span { class: "tag is-white", "📅 {date}" }
            span { class: "tag is-white", "🕒 {time}" }
            span { class: "tag is-white", "💳 {payment}" }
            { price.map(|price| rsx! {
                span { class: "tag is-white has-text-weight-semibold", "{price}" }
            }) }
        }
    }
}
