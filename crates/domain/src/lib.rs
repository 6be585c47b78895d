//! Domain layer for the AlimTalk Sender backend.
//!
//! This crate contains:
//! - Domain models (User, Company, Client, Template, Content, Send, ...)
//! - Request/response DTOs with validation rules
//! - Business logic services (template matching, the gateway seam)

pub mod models;
pub mod services;
