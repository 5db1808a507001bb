//! EduAI: career guidance chat and dashboard service.
//!
//! The rule-based engine lives in the `eduai_guidance` crate. This crate wraps
//! it with configuration, the optional text-generation call, demo user and
//! course stores, and the HTTP gateway.

pub mod channels;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod guidance;
pub mod llm;

pub use eduai_guidance::UserProfile;
