//! Domain services for the AlimTalk Sender.
//!
//! Services contain business logic that operates on domain models.

pub mod gateway;
pub mod template_match;

pub use gateway::{
    GatewayInfo, GatewayResponse, MockTalkGateway, TalkGateway, TalkGatewayError, TalkSendRequest,
    GATEWAY_SUCCESS_CODE,
};

pub use template_match::{content_matches_template, TemplateMatchError};
