//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the narrow persistence contracts the services depend on.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Listings use the store's natural order (`id ASC`).
//! - Lookups report absence as `Ok(None)`; only services turn it into an error.
//! - `delete_by_id` on an absent id succeeds without changes.

pub mod company_repo;
pub mod employee_repo;
mod error;
mod page;

pub use error::{RepoError, RepoResult};
pub use page::{Page, PageRequest};
