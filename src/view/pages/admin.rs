pub mod appointments;
pub mod dashboard;

use dioxus::prelude::*;

use crate::{
    config::SALON_NAME,
    view::{app::Routes, components::menu::Menu as GenericMenu},
};

#[derive(Clone, Copy, PartialEq)]
pub enum MenuItem {
    None,
    Dashboard,
    Appointments,
}

impl MenuItem {
    fn is_active(&self, this: &MenuItem) -> &'static str {
        if *self == *this {
            "is-active"
        } else {
            ""
        }
    }
}

#[component]
pub fn Menu(highlight: Option<MenuItem>) -> Element {
    let nav = use_navigator();
    let highlight = highlight.unwrap_or(MenuItem::None);

    rsx! {
        GenericMenu {
            title: "{SALON_NAME}",
            p {
                class: "menu-label",
                "Administração"
            }
            ul {
                class: "menu-list",
                li {
                    a {
                        class: highlight.is_active(&MenuItem::Dashboard),
                        onclick: move |e| {
                            e.prevent_default();
                            nav.push(Routes::AdminDashboard {});
                        },
                        "Dashboard"
                    }
                }
                li {
                    a {
                        class: highlight.is_active(&MenuItem::Appointments),
                        onclick: move |e| {
                            e.prevent_default();
                            nav.push(Routes::AdminAppointments {});
                        },
                        "Agendamentos"
                    }
                }
            }
        }
    }
}
