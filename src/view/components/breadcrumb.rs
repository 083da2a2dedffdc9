use dioxus::prelude::*;

use crate::view::app::Routes;

/// Trail of links, an item without a route is the current page.
#[component]
pub fn Breadcrumb(items: ReadOnlySignal<Vec<(String, Option<Routes>)>>) -> Element {
    rsx! {
        nav {
            class: "breadcrumb",
            "aria-label": "breadcrumbs",
            ul {
                { items.read().iter().cloned().map(|(label, route)| {
                    match route {
                        Some(route) => rsx! {
                            li {
                                key: "{label}",
                                Link {
                                    to: route,
                                    "{label}"
                                }
                            }
                        },
                        None => rsx! {
                            li {
                                key: "{label}",
                                class: "is-active",
                                a {
                                    "aria-current": "page",
                                    "{label}"
                                }
                            }
                        },
                    }
                }) }
            }
        }
    }
}
