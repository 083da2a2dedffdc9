use dioxus::prelude::*;

use crate::{
    config::SALON_NAME,
    hooks::{client::use_client, handle_error::use_redirect, toasts::use_toasts},
    validation::LoginForm,
    view::{
        app::Routes,
        components::{
            form::{Button, ButtonFlavor, Field, TextInput, TextInputType},
            with_toasts::WithToasts,
        },
    },
    workflow::account,
};

/// Where a freshly signed in user lands.
pub fn landing_route(is_admin: bool) -> Routes {
    if is_admin {
        Routes::AdminDashboard {}
    } else {
        Routes::Home {}
    }
}

#[component]
pub fn Page() -> Element {
    let client = use_client();
    let mut redirect_to = use_redirect();

    if client.is_authenticated() {
        *redirect_to.write() = Some(landing_route(client.is_admin()));
        return rsx! {};
    }

    rsx! {
        WithToasts{
            PageBody {}
        }
    }
}

#[component]
fn PageBody() -> Element {
    let mut login_form = use_signal(LoginForm::default);
    let mut submitted = use_signal(|| false);
    let mut toaster = use_toasts();
    let mut client = use_client();
    let nav = use_navigator();

    rsx! {
        section {
            class: "section",
            div {
                class: "container",
                style: "max-width: 28rem;",
                h1 {
                    class: "title",
                    "Entrar"
                }
                p {
                    class: "subtitle is-6",
                    "{SALON_NAME}"
                }
                form {
                    Field {
                        label: "E-mail",
                        TextInput{
                            oninput: move |e: FormEvent| {
                                login_form.write().email = e.value();
                            },
                            placeholder: "seu@email.com".to_owned(),
                            value: TextInputType::Email(login_form.read().email.clone()),
                        }
                    }
                    Field {
                        label: "Senha",
                        TextInput{
                            oninput: move |e: FormEvent| {
                                login_form.write().password = e.value();
                            },
                            value: TextInputType::Password(login_form.read().password.clone()),
                        }
                    }
                    div {
                        class: "field is-grouped",
                        Button {
                            onclick: move |_| {
                                spawn({
                                    submitted.set(true);
                                    async move {
                                        let api = client.api();
                                        let form = login_form.read().clone();
                                        let result = account::login(&api, api.session(), &form).await;
                                        submitted.set(false);

                                        if let Err(e) = result {
                                            toaster.write().new_error(e.to_string());
                                            return
                                        }

                                        client.changed();
                                        nav.push(landing_route(client.is_admin()));
                                    }
                                });
                            },
                            flavor: ButtonFlavor::Primary,
                            is_loading: *submitted.read(),
                            "Entrar"
                        }
                        Link {
                            class: "button is-text",
                            to: Routes::Register {},
                            "Criar conta"
                        }
                    }
                }
            }
        }
    }
}
