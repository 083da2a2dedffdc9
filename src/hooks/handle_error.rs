use crate::{
    hooks::{client::use_client, toasts::use_toasts},
    view::{
        app::{Error, Routes},
        components::with_toasts::WithToasts,
    },
};
use dioxus::prelude::*;

/// Navigates to the stored route once the current render is done.
pub fn use_redirect() -> Signal<Option<Routes>> {
    let nav = use_navigator();
    let redirect_to = use_signal(|| None);
    use_effect(move || {
        if let Some(redirect) = redirect_to.read().clone() {
            nav.replace(redirect);
        }
    });

    redirect_to
}

pub fn use_handle_error<T: Clone, F: FnOnce(T) -> Element>(
    resource: MappedSignal<Result<T, Error>>,
    render: F,
) -> Element {
    let mut redirect_to = use_redirect();

    match resource() {
        Ok(t) => render(t),
        Err(Error::Unauthenticated) => {
            *redirect_to.write() = Some(Routes::Login {});
            rsx! {}
        }
        Err(Error::NotFound) => {
            *redirect_to.write() = Some(Routes::NotFound {
                segments: Vec::new(),
            });
            rsx! {}
        }
        Err(e) => rsx! {
            WithToasts{
                initial_errors: vec![e.to_string()],
            }
        },
    }
}

/// Reports a failed user action. An expired session signs the user out and
/// goes to the login page, anything else becomes an error toast.
pub fn use_report_error() -> impl FnMut(Error) + Copy {
    let mut client = use_client();
    let mut toaster = use_toasts();
    let mut redirect_to = use_redirect();

    move |e: Error| {
        if e.requires_login() {
            client.logout();
            redirect_to.set(Some(Routes::Login {}));
        } else {
            toaster.write().new_error(e.to_string());
        }
    }
}
