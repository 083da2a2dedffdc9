use dioxus::prelude::*;

use crate::{config::SALON_NAME, hooks::client::use_client, view::app::Routes};

#[component]
pub fn Page() -> Element {
    let client = use_client();
    let contact = client.config().contact;

    let secondary = if client.is_authenticated() {
        rsx! {
            Link {
                class: "button is-light is-medium",
                to: Routes::MyAppointments {},
                "Meus Agendamentos"
            }
        }
    } else {
        rsx! {
            a {
                class: "button is-success is-medium",
                href: "{contact.whatsapp}",
                target: "_blank",
                rel: "noopener noreferrer",
                "WhatsApp"
            }
            a {
                class: "button is-link is-medium",
                href: "{contact.instagram}",
                target: "_blank",
                rel: "noopener noreferrer",
                "Instagram"
            }
            a {
                class: "button is-light is-medium",
                href: "{contact.map}",
                target: "_blank",
                rel: "noopener noreferrer",
                "Ver Localização"
            }
        }
    };

    rsx! {
        section {
            class: "hero is-medium",
            div {
                class: "hero-body",
                div {
                    class: "container has-text-centered",
                    span {
                        class: "tag is-primary is-light mb-4",
                        "✨ Bem-vinda ao Espaço {SALON_NAME}"
                    }
                    h1 {
                        class: "title is-1",
                        "Suas unhas merecem o melhor cuidado"
                    }
                    p {
                        class: "subtitle",
                        "Agende seu horário de forma rápida e fácil. Escolha o serviço perfeito para você!"
                    }
                    div {
                        class: "buttons is-centered",
                        Link {
                            class: "button is-primary is-medium",
                            to: Routes::Services {},
                            "Agendar Agora"
                        }
                        { secondary }
                    }
                }
            }
        }
    }
}
