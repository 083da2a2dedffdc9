pub mod api;
pub mod config;
pub mod format;
pub mod hooks;
pub mod model;
pub mod session;
pub mod validation;
pub mod view;
pub mod workflow;

#[cfg(test)]
mod test_helpers;
