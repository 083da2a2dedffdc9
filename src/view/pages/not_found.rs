use dioxus::prelude::*;

use crate::view::components::form::{Button, ButtonFlavor};

#[component]
pub fn Page(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section {
            class: "hero is-fullheight",
            div {
                class: "hero-body has-text-centered",
                div {
                    class: "container",
                    h1 {
                        class: "title is-2",
                        "🎀 Página não encontrada"
                    }
                    p {
                        class: "subtitle is-6",
                        "{path}"
                    }
                    Button {
                        flavor: ButtonFlavor::Primary,
                        onclick: move |_| nav.go_back(),
                        "Voltar"
                    }
                }
            }
        }
    }
}
