//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into router-facing APIs.
//! - Keep routing/view layers decoupled from persistence details.

pub mod task_service;
