use crate::{
    api::HttpApi,
    config::Config,
    model::User,
    session::{Session, SessionStore},
};
use dioxus::prelude::*;

#[cfg(feature = "web")]
pub type DefaultStore = crate::session::LocalStorageStore;

#[cfg(not(feature = "web"))]
pub type DefaultStore = crate::session::MemoryStore;

pub type ClientApi = HttpApi<DefaultStore>;

/// API handle shared through the component tree.
///
/// The session lives in storage, outside of any signal, so components read
/// `revision` to re-render after a login or logout.
#[derive(Clone, Copy)]
pub struct Client {
    api: CopyValue<ClientApi>,
    config: CopyValue<Config>,
    revision: Signal<u64>,
}

impl Client {
    pub fn api(&self) -> ClientApi {
        self.api.cloned()
    }

    pub fn config(&self) -> Config {
        self.config.cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.revision.read();
        self.api.read().session().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.api.read().session().is_admin()
    }

    pub fn user(&self) -> Option<User> {
        self.revision.read();
        self.api.read().session().user()
    }

    /// Call after the session was started or replaced.
    pub fn changed(&mut self) {
        *self.revision.write() += 1;
    }

    pub fn logout(&mut self) {
        self.api.read().session().end();
        tracing::info!("session ended");
        self.changed();
    }
}

pub fn use_client_provider(config: Config) -> Client {
    use_context_provider(move || {
        let session = Session::new(DefaultStore::default());
        if session.store().load().is_some() && !session.is_authenticated() {
            tracing::debug!("stored session dropped on startup");
        }

        Client {
            api: CopyValue::new(HttpApi::new(config.api_base_url.clone(), session)),
            config: CopyValue::new(config),
            revision: Signal::new(0),
        }
    })
}

pub fn use_client() -> Client {
    use_context::<Client>()
}
