//! Core use-case services.
//!
//! # Responsibility
//! - Compose repository calls into the operations callers see.
//! - Keep transport layers decoupled from storage details.

pub mod company_service;
pub mod employee_service;
