//! Application services.

pub mod aligo;
pub mod alimtalk;

pub use aligo::{build_gateway, AligoTalkGateway};
pub use alimtalk::{AlimtalkError, AlimtalkService};
