//! Entity definitions (database row mappings).

pub mod client;
pub mod content;
pub mod group;
pub mod result;
pub mod send;
pub mod template;
pub mod user;

pub use client::ClientEntity;
pub use content::ContentEntity;
pub use group::GroupEntity;
pub use result::{ResultClientEntity, ResultDetailEntity, ResultDetailWithClientEntity};
pub use send::SendEntity;
pub use template::{TemplateEntity, TemplateVariableEntity};
pub use user::{CompanyEntity, UserEntity, UserRoleDb};
