pub mod client;
pub mod handle_error;
pub mod timer;
pub mod toasts;
