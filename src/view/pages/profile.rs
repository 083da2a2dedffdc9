use dioxus::prelude::*;

use crate::{
    format::format_phone,
    hooks::{client::use_client, handle_error::use_handle_error},
    model::Role,
    view::{
        app::{Error, Routes},
        components::{
            appointment::Avatar,
            form::{Button, ButtonFlavor},
        },
    },
    workflow::account,
};

#[component]
pub fn Page() -> Element {
    let mut client = use_client();
    let results = use_resource(move || async move {
        let api = client.api();
        account::refresh_user(&api, api.session())
            .await
            .map_err(Error::from_api_error)
    });

    let nav = use_navigator();

    use_handle_error(results.suspend()?, move |user| {
        let phone = user
            .phone
            .as_deref()
            .map(format_phone)
            .unwrap_or_else(|| "-".to_owned());
        let role = match user.role {
            Role::Admin => "Administradora",
            Role::Client => "Cliente",
        };
        let admin_link = (user.role == Role::Admin).then(|| {
            rsx! {
                Link {
                    class: "button is-info",
                    to: Routes::AdminDashboard {},
                    "Painel administrativo"
                }
            }
        });

        rsx! {
            section {
                class: "section",
                div {
                    class: "container",
                    style: "max-width: 32rem;",
                    div {
                        class: "box",
                        div {
                            class: "media",
                            div {
                                class: "media-left",
                                Avatar {
                                    user: user.clone(),
                                }
                            }
                            div {
                                class: "media-content",
                                p {
                                    class: "title is-4",
                                    "{user.name}"
                                }
                                p {
                                    class: "subtitle is-6",
                                    "{role}"
                                }
                            }
                        }
                        table {
                            class: "table is-fullwidth",
                            tbody {
                                tr {
                                    th { "E-mail" }
                                    td { "{user.email}" }
                                }
                                tr {
                                    th { "WhatsApp" }
                                    td { "{phone}" }
                                }
                            }
                        }
                        div {
                            class: "buttons",
                            { admin_link }
                            Button {
                                flavor: ButtonFlavor::Danger,
                                onclick: move |_| {
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
    })
}
