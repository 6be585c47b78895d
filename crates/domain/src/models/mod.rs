//! Domain models for the AlimTalk Sender.

pub mod client;
pub mod content;
pub mod group;
pub mod result;
pub mod send;
pub mod template;
pub mod user;

pub use client::Client;
pub use content::Content;
pub use group::Group;
pub use result::{ResultClient, ResultDetail};
pub use send::Send;
pub use template::{Template, TemplateVariable};
pub use user::{Company, User, UserRole};
