use dioxus::prelude::*;

use crate::{
    hooks::{client::use_client, handle_error::use_redirect},
    view::{
        app::Routes,
        components::{navbar::Navbar, with_toasts::WithToasts},
    },
};

#[component]
pub fn CustomerLayout() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; min-height: 100vh;",
            Navbar {}
            div {
                style: "flex: 1;",
                WithToasts {
                    SuspenseBoundary {
                        fallback: |_| rsx! { Loading {} },
                        Outlet::<Routes> {}
                    }
                }
            }
        }
    }
}

/// Pages below need a live session, anyone else is sent to the login page.
#[component]
pub fn RequiresLogin() -> Element {
    let client = use_client();
    let mut redirect_to = use_redirect();

    if !client.is_authenticated() {
        *redirect_to.write() = Some(Routes::Login {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Routes> {}
    }
}

#[component]
pub fn RequiresAdmin() -> Element {
    let client = use_client();
    let mut redirect_to = use_redirect();

    if !client.is_admin() {
        *redirect_to.write() = Some(Routes::Login {});
        return rsx! {};
    }

    rsx! {
        SuspenseBoundary {
            fallback: |_| rsx! { Loading {} },
            Outlet::<Routes> {}
        }
    }
}

#[component]
pub fn Loading(message: Option<String>) -> Element {
    let message = message.unwrap_or_else(|| "Carregando...".to_owned());

    rsx! {
        section {
            class: "section has-text-centered",
            progress {
                class: "progress is-small is-primary",
                max: "100",
            }
            p {
                "{message}"
            }
        }
    }
}
