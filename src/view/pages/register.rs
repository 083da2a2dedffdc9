use dioxus::prelude::*;

use crate::{
    hooks::{client::use_client, handle_error::use_redirect, toasts::use_toasts},
    validation::RegisterForm,
    view::{
        app::Routes,
        components::{
            form::{Button, ButtonFlavor, Field, TextInput, TextInputType},
            with_toasts::WithToasts,
        },
    },
    workflow::account,
};

#[component]
pub fn Page() -> Element {
    let client = use_client();
    let mut redirect_to = use_redirect();

    if client.is_authenticated() {
        *redirect_to.write() = Some(Routes::Home {});
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
    let mut register_form = use_signal(RegisterForm::default);
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
                    "Criar conta"
                }
                form {
                    Field {
                        label: "Nome",
                        TextInput{
                            oninput: move |e: FormEvent| {
                                register_form.write().name = e.value();
                            },
                            placeholder: "Seu nome".to_owned(),
                            value: TextInputType::Text(register_form.read().name.clone()),
                        }
                    }
                    Field {
                        label: "E-mail",
                        TextInput{
                            oninput: move |e: FormEvent| {
                                register_form.write().email = e.value();
                            },
                            placeholder: "seu@email.com".to_owned(),
                            value: TextInputType::Email(register_form.read().email.clone()),
                        }
                    }
                    Field {
                        label: "Senha",
                        TextInput{
                            oninput: move |e: FormEvent| {
                                register_form.write().password = e.value();
                            },
                            value: TextInputType::Password(register_form.read().password.clone()),
                        }
                    }
                    Field {
                        label: "Confirmar senha",
                        TextInput{
                            oninput: move |e: FormEvent| {
                                register_form.write().confirm_password = e.value();
                            },
                            value: TextInputType::Password(register_form.read().confirm_password.clone()),
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
                                        let form = register_form.read().clone();
                                        let result = account::register(&api, api.session(), &form).await;
                                        submitted.set(false);

                                        if let Err(e) = result {
                                            toaster.write().new_error(e.to_string());
                                            return
                                        }

                                        client.changed();
                                        nav.push(Routes::Home {});
                                    }
                                });
                            },
                            flavor: ButtonFlavor::Primary,
                            is_loading: *submitted.read(),
                            "Cadastrar"
                        }
                        Link {
                            class: "button is-text",
                            to: Routes::Login {},
                            "Já tenho conta"
                        }
                    }
                }
            }
        }
    }
}
