pub mod admin;
pub mod home;
pub mod login;
pub mod my_appointments;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod services;
