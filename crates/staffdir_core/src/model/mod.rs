//! Domain model for companies and their employees.
//!
//! # Responsibility
//! - Define the records persisted by the repository layer.
//! - Define partial-update patches and their merge rules.
//!
//! # Invariants
//! - `id == None` marks a record that has not been stored yet.
//! - Once assigned by the store, an id is never changed by core code.
//! - A company's employees are derived by `company_id` queries, never stored
//!   on the company itself.

pub mod company;
pub mod employee;
