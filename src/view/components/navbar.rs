use dioxus::prelude::*;

use crate::{config::SALON_NAME, hooks::client::use_client, view::app::Routes};

#[derive(Clone, Copy, PartialEq)]
enum NavItem {
    Home,
    Book,
    Appointments,
    Login,
    None,
}

impl NavItem {
    fn from_route(route: &Routes) -> Self {
        match route {
            Routes::Home {} => NavItem::Home,
            Routes::Services {} | Routes::Booking {} => NavItem::Book,
            Routes::MyAppointments {} => NavItem::Appointments,
            Routes::Login {} => NavItem::Login,
            _ => NavItem::None,
        }
    }

    fn is_active(&self, this: NavItem) -> &'static str {
        if *self == this {
            "is-active"
        } else {
            ""
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Routes>();
    let highlight = NavItem::from_route(&route);
    let home_class = highlight.is_active(NavItem::Home);
    let book_class = highlight.is_active(NavItem::Book);
    let appointments_class = highlight.is_active(NavItem::Appointments);
    let login_class = highlight.is_active(NavItem::Login);

    let nav = use_navigator();
    let mut client = use_client();
    let is_authenticated = client.is_authenticated();

    let mut show_menu = use_signal(|| false);
    let menu_is_active = if *show_menu.read() { "is-active" } else { "" };

    let appointments = is_authenticated.then(|| {
        rsx! {
            Link {
                class: "navbar-item {appointments_class}",
                to: Routes::MyAppointments {},
                "Agendados"
            }
        }
    });

    let session_link = if is_authenticated {
        rsx! {
            a {
                class: "navbar-item",
                onclick: move |e| {
                    e.prevent_default();
                    client.logout();
                    nav.push(Routes::Home {});
                },
                "Sair"
            }
        }
    } else {
        rsx! {
            Link {
                class: "navbar-item {login_class}",
                to: Routes::Login {},
                "Entrar"
            }
        }
    };

    rsx! {
        nav {
            class: "navbar is-primary",
            role: "navigation",
            "aria-label": "main navigation",
            div {
                class: "navbar-brand",
                Link {
                    class: "navbar-item has-text-weight-bold",
                    to: Routes::Home {},
                    "💅 {SALON_NAME}"
                }
                a {
                    class: "navbar-burger {menu_is_active}",
                    role: "button",
                    "aria-label": "menu",
                    onclick: move |_| {
                        let new_show_menu = !*show_menu.read();
                        show_menu.set(new_show_menu);
                    },
                    span { "aria-hidden": "true" }
                    span { "aria-hidden": "true" }
                    span { "aria-hidden": "true" }
                    span { "aria-hidden": "true" }
                }
            }
            div {
                class: "navbar-menu {menu_is_active}",
                div {
                    class: "navbar-end",
                    Link {
                        class: "navbar-item {home_class}",
                        to: Routes::Home {},
                        "Início"
                    }
                    Link {
                        class: "navbar-item {book_class}",
                        to: Routes::Services {},
                        "Agendar"
                    }
                    { appointments }
                    { session_link }
                }
            }
        }
    }
}
