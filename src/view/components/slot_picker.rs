use dioxus::prelude::*;

use crate::{
    format::{format_date, format_time, format_time_range, DateStyle, SlotGroup},
    model::Record,
};

/// Open slots grouped by day, one button per slot.
#[component]
pub fn SlotPicker(
    groups: ReadOnlySignal<Vec<SlotGroup>>,
    selected: Option<String>,
    onselect: EventHandler<String>,
    date_style: DateStyle,
    show_end_time: Option<bool>,
) -> Element {
    let show_end_time = show_end_time.unwrap_or(false);

    if groups.read().is_empty() {
        return rsx! {
            div {
                class: "notification is-light has-text-centered",
                "📅 Nenhum horário disponível"
            }
        };
    }

    rsx! {
        { groups.read().iter().map(|group| {
            let day = format_date(Some(&group.day), date_style);
            rsx! {
                div {
                    key: "{group.day}",
                    class: "block",
                    h4 {
                        class: "title is-6",
                        "📅 {day}"
                    }
                    div {
                        class: "buttons",
                        { group.slots.iter().map(|slot| {
                            let id = slot.id().to_string();
                            let key = id.clone();
                            let is_selected = selected.as_deref() == Some(id.as_str());
                            let class = if is_selected { "button is-primary" } else { "button is-light" };
                            let time = if show_end_time {
                                format_time_range(slot)
                            } else {
                                format_time(slot.start_time.as_deref())
                            };
                            let check = if is_selected { " ✓" } else { "" };
                            rsx! {
                                button {
                                    key: "{key}",
                                    class: "{class}",
                                    "type": "button",
                                    onclick: move |_| onselect.call(id.clone()),
                                    "{time}{check}"
                                }
                            }
                        }) }
                    }
                }
            }
        }) }
    }
}
