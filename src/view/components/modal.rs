use dioxus::prelude::*;

use crate::view::components::form::{Button, ButtonFlavor};

/// Bulma modal card with a confirm and a cancel button.
///
/// While `is_loading` is set the dialog cannot be dismissed, so a request in
/// flight always reports back to a mounted component.
#[component]
pub fn Modal(
    onsubmit: EventHandler<()>,
    onclose: EventHandler<()>,
    title: ReadOnlySignal<String>,
    disable_submit: Option<bool>,
    is_loading: Option<bool>,
    children: Element,
    success_text: ReadOnlySignal<String>,
    flavor: Option<ButtonFlavor>,
) -> Element {
    let is_loading = is_loading.unwrap_or(false);
    let close = move || {
        if !is_loading {
            onclose.call(());
        }
    };

    rsx! {
        div {
            class: "modal is-active",
            tabindex: 0,
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    close();
                }
            },
            div {
                class: "modal-background",
                onclick: move |_| close(),
            }
            div {
                class: "modal-card",
                header {
                    class: "modal-card-head",
                    p {
                        class: "modal-card-title",
                        "{title}"
                    }
                    button {
                        class: "delete",
                        "aria-label": "Fechar",
                        disabled: is_loading,
                        onclick: move |_| close(),
                    }
                }
                section {
                    class: "modal-card-body",
                    { children }
                }
                footer {
                    class: "modal-card-foot buttons",
                    Button {
                        flavor: flavor.unwrap_or(ButtonFlavor::Success),
                        disabled: disable_submit.unwrap_or(false),
                        is_loading: is_loading,
                        onclick: move |_| onsubmit.call(()),
                        "{success_text}"
                    }
                    Button {
                        disabled: is_loading,
                        onclick: move |_| close(),
                        "Cancelar"
                    }
                }
            }
        }
    }
}
