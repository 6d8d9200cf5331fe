//! Core domain logic for the staff directory.
//! Companies, their employees, and the services that persist them.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::company::{Company, CompanyId, CompanyPatch};
pub use model::employee::{Employee, EmployeeId, EmployeePatch};
pub use repo::company_repo::{CompanyRepository, SqliteCompanyRepository};
pub use repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
pub use repo::{Page, PageRequest, RepoError, RepoResult};
pub use service::company_service::{CompanyService, CompanyServiceError, CompanyServiceResult};
pub use service::employee_service::{
    EmployeeService, EmployeeServiceError, EmployeeServiceResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
