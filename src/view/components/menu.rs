use dioxus::prelude::*;

#[component]
pub fn Menu(title: ReadOnlySignal<String>, children: Element) -> Element {
    rsx! {
        h3 {
            class: "subtitle is-4",
            "{title}"
        }
        aside {
            class: "menu",
            { children }
        }
    }
}
