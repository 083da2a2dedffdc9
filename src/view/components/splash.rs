use dioxus::prelude::*;

use crate::{
    config::{SALON_NAME, SPLASH_TICK},
    hooks::{client::use_client, timer::sleep},
};

#[cfg(feature = "web")]
mod shown {
    use gloo::storage::{SessionStorage, Storage};

    const SHOWN_KEY: &str = "hasShownLoading";

    pub fn already() -> bool {
        SessionStorage::get::<String>(SHOWN_KEY).is_ok()
    }

    pub fn mark() {
        if let Err(e) = SessionStorage::set(SHOWN_KEY, "true") {
            tracing::warn!("unable to remember splash screen: {}", e);
        }
    }
}

#[cfg(not(feature = "web"))]
mod shown {
    pub fn already() -> bool {
        true
    }

    pub fn mark() {}
}

/// Shows the salon's splash screen once per browser session, then `children`.
#[component]
pub fn Splash(children: Element) -> Element {
    let client = use_client();
    let mut tick = use_signal(|| 0u32);
    let mut done = use_signal(shown::already);

    use_future(move || async move {
        if *done.peek() {
            return;
        }

        let ticks = client.config().splash_ticks();
        for _ in 0..ticks {
            sleep(SPLASH_TICK).await;
            *tick.write() += 1;
        }

        shown::mark();
        done.set(true);
    });

    if done() {
        return rsx! {
            { children }
        };
    }

    let progress = client.config().splash_progress(tick());
    let percent = progress.round();

    rsx! {
        section {
            class: "hero is-fullheight is-primary",
            div {
                class: "hero-body has-text-centered",
                div {
                    class: "container",
                    p {
                        class: "is-size-1",
                        "💅"
                    }
                    h1 {
                        class: "title",
                        "{SALON_NAME}"
                    }
                    progress {
                        class: "progress is-light",
                        value: "{progress}",
                        max: "100",
                    }
                    p {
                        "{percent}%"
                    }
                    p {
                        class: "subtitle is-6 mt-4",
                        "Preparando sua experiência..."
                    }
                }
            }
        }
    }
}
