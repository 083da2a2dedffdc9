use dioxus::prelude::*;

#[derive(Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Error => "is-danger",
            ToastKind::Success => "is-success",
        }
    }
}

pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
}

impl ToastManager {
    pub fn with_toasts(error_messages: Vec<String>) -> Self {
        let mut manager = ToastManager::default();
        for error_message in error_messages {
            manager.new_error(error_message);
        }
        manager
    }

    pub fn new_error(&mut self, error_message: String) {
        tracing::error!("Error occurred: {}", error_message);
        self.toasts.push(Toast {
            kind: ToastKind::Error,
            title: "Ops!".to_owned(),
            body: error_message,
        })
    }

    pub fn new_success(&mut self, message: String) {
        tracing::info!("{}", message);
        self.toasts.push(Toast {
            kind: ToastKind::Success,
            title: "Tudo certo".to_owned(),
            body: message,
        })
    }

    pub fn toasts(&self) -> std::slice::Iter<'_, Toast> {
        self.toasts.iter()
    }

    pub fn remove_toast(&mut self, idx: usize) {
        if idx < self.toasts.len() {
            self.toasts.remove(idx);
        }
    }
}

pub fn use_toasts_provider(toaster: Signal<ToastManager>) {
    use_context_provider(|| toaster);
}

pub fn use_toasts() -> Signal<ToastManager> {
    use_context::<Signal<ToastManager>>()
}
