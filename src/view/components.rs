pub mod appointment;
pub mod breadcrumb;
pub mod form;
pub mod layout;
pub mod menu;
pub mod modal;
pub mod navbar;
pub mod page;
pub mod slot_picker;
pub mod splash;
pub mod table;
pub mod with_toasts;
