use dioxus::prelude::*;

use crate::{
    hooks::client::use_client,
    view::{
        app::Routes,
        components::{breadcrumb::Breadcrumb, with_toasts::WithToasts},
    },
};

/// Back office page: side menu, title row with the user menu, breadcrumb.
#[component]
pub fn Page(
    title: String,
    subtitle: Option<String>,
    children: Element,
    breadcrumb: Option<Vec<(String, Option<Routes>)>>,
    menu: Option<Element>,
) -> Element {
    let menu = menu.map(|menu| {
        rsx! {
            div {
                class: "column is-3 has-background-light",
                style: "min-height: 100vh; padding: 1.5rem;",
                { menu }
            }
        }
    });

    let subtitle = subtitle.map(|subtitle| {
        rsx! {
            p {
                class: "subtitle is-6",
                "{subtitle}"
            }
        }
    });

    let breadcrumb = breadcrumb.map(|breadcrumb| {
        rsx! {
            Breadcrumb {
                items: breadcrumb.clone(),
            }
        }
    });

    rsx! {
        WithToasts{
            div {
                class: "columns is-gapless",
                { menu }
                div {
                    class: "column",
                    style: "padding: 1.5rem;",
                    div {
                        class: "columns",
                        div {
                            class: "column",
                            h1 {
                                class: "title is-2",
                                "{title}"
                            }
                            { subtitle }
                        }
                        div {
                            class: "column is-one-third has-text-right",
                            UserMenu {}
                        }
                    }
                    { breadcrumb }
                    { children }
                }
            }
        }
    }
}

#[component]
fn UserMenu() -> Element {
    let mut show_menu = use_signal(|| false);
    let menu_is_active = if *show_menu.read() { "is-active" } else { "" };

    let nav = use_navigator();
    let mut client = use_client();
    let name = client.user().map(|user| user.name).unwrap_or_default();

    rsx! {
        div {
            class: "dropdown {menu_is_active} is-right",
            div {
                class: "dropdown-trigger",
                button {
                    class: "button",
                    onclick: move |_| {
                        let new_show_menu = !*show_menu.read();
                        show_menu.set(new_show_menu);
                    },
                    span {
                        "{name}"
                    }
                    span {
                        class: "icon is-small",
                        "⌄"
                    }
                }
            }
            div {
                class: "dropdown-menu",
                div {
                    class: "dropdown-content",
                    a {
                        class: "dropdown-item",
                        onclick: move |e| {
                            e.prevent_default();
                            nav.push(Routes::Home {});
                        },
                        "Ver site"
                    }
                    a {
                        class: "dropdown-item",
                        onclick: move |e| {
                            e.prevent_default();
                            client.logout();
                            nav.push(Routes::Home {});
                        },
                        "Sair"
                    }
                }
            }
        }
    }
}
