use dioxus::prelude::*;

use crate::{
    api,
    config::Config,
    hooks::client::use_client_provider,
    view::{
        components::{
            layout::{CustomerLayout, RequiresAdmin, RequiresLogin},
            splash::Splash,
        },
        pages::{
            admin::{appointments::Page as AdminAppointments, dashboard::Page as AdminDashboard},
            home::Page as Home,
            login::Page as Login,
            my_appointments::Page as MyAppointments,
            not_found::Page as NotFound,
            profile::Page as Profile,
            register::Page as Register,
            services::Page as Services,
            services::Page as Booking,
        },
    },
    workflow::{account, admin, booking},
};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Página não encontrada")]
    NotFound,
    #[error("{0}")]
    Misc(String),
    #[error("unauthenticated")]
    Unauthenticated,
}

impl Error {
    /// The session is gone, the user has to sign in again.
    pub fn requires_login(&self) -> bool {
        matches!(self, Error::Unauthenticated)
    }

    pub fn from_api_error(e: api::Error) -> Self {
        if e.is_unauthenticated() {
            return Self::Unauthenticated;
        }

        if e.is_not_found() {
            return Self::NotFound;
        }

        Self::Misc(e.message_or("Erro ao carregar dados"))
    }
}

impl From<admin::Error> for Error {
    fn from(e: admin::Error) -> Self {
        if e.is_unauthenticated() {
            return Self::Unauthenticated;
        }

        Self::Misc(e.to_string())
    }
}

impl From<booking::Error> for Error {
    fn from(e: booking::Error) -> Self {
        if e.is_unauthenticated() {
            return Self::Unauthenticated;
        }

        Self::Misc(e.to_string())
    }
}

impl From<account::Error> for Error {
    fn from(e: account::Error) -> Self {
        Self::Misc(e.to_string())
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(Config::from_build_env);
    use_client_provider(config);

    rsx! {
        Splash {
            Router::<Routes>{}
        }
    }
}

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Routes {
    #[redirect("/", || Routes::Home {})]
    #[redirect("/admin", || Routes::AdminDashboard {})]

    #[layout(CustomerLayout)]
        #[route("/home")]
        Home {},

        #[route("/services")]
        Services {},

        #[route("/booking")]
        Booking {},

        #[layout(RequiresLogin)]
            #[route("/my-appointments")]
            MyAppointments {},

            #[route("/profile")]
            Profile {},
        #[end_layout]
    #[end_layout]

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[layout(RequiresAdmin)]
        #[route("/admin/dashboard")]
        AdminDashboard {},

        #[route("/admin/appointments")]
        AdminAppointments {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
