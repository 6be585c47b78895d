//! Repository implementations for database operations.

pub mod client;
pub mod company;
pub mod content;
pub mod group;
pub mod result;
pub mod send;
pub mod template;
pub mod user;

pub use client::ClientRepository;
pub use company::CompanyRepository;
pub use content::ContentRepository;
pub use group::GroupRepository;
pub use result::ResultRepository;
pub use send::SendRepository;
pub use template::TemplateRepository;
pub use user::UserRepository;
