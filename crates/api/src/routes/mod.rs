//! HTTP route handlers.

pub mod alimtalk;
pub mod clients;
pub mod groups;
pub mod health;
pub mod templates;
pub mod users;
