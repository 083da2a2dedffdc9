use dioxus::prelude::*;

#[component]
pub fn Table(children: Element, is_striped: Option<bool>, is_fullwidth: Option<bool>) -> Element {
    let mut class = "table".to_owned();

    if let Some(true) = is_striped {
        class.push_str(" is-striped");
    }

    if let Some(true) = is_fullwidth {
        class.push_str(" is-fullwidth");
    }

    rsx! {
        div {
            class: "table-container",
            table {
                class: "{class}",
                { children }
            }
        }
    }
}
