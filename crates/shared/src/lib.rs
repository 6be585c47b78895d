//! Shared utilities for the AlimTalk Sender backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Password hashing with Argon2id
//! - Common request validation logic

pub mod password;
pub mod validation;
