//! Employee use-case service.
//!
//! # Invariants
//! - `update` merges `name`, `age`, `gender` and `salary` only; `company_id`
//!   is never changed by it.
//! - Gender filtering is delegated to the repository as an exact match.

use crate::model::employee::{Employee, EmployeeId, EmployeePatch};
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::{PageRequest, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from employee service operations.
#[derive(Debug)]
pub enum EmployeeServiceError {
    /// Target employee does not exist.
    EmployeeNotFound(EmployeeId),
    /// Repository-level failure.
    Repo(RepoError),
}

impl Display for EmployeeServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmployeeNotFound(id) => write!(f, "employee not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EmployeeServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::EmployeeNotFound(_) => None,
        }
    }
}

impl From<RepoError> for EmployeeServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type EmployeeServiceResult<T> = Result<T, EmployeeServiceError>;

/// Employee service facade over repository implementations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn find_all(&self) -> EmployeeServiceResult<Vec<Employee>> {
        Ok(self.repo.find_all()?)
    }

    /// Gets one employee by id.
    pub fn find_by_id(&self, id: EmployeeId) -> EmployeeServiceResult<Employee> {
        self.repo
            .find_by_id(id)?
            .ok_or(EmployeeServiceError::EmployeeNotFound(id))
    }

    /// Merges `patch` into the stored employee and saves it.
    ///
    /// Fails with `EmployeeNotFound` before any write when `id` is absent.
    pub fn update(&self, id: EmployeeId, patch: &EmployeePatch) -> EmployeeServiceResult<()> {
        let mut employee = self.find_by_id(id)?;
        employee.apply_patch(patch);
        self.repo.save(&employee)?;
        info!("event=employee_update module=service status=ok employee_id={id}");
        Ok(())
    }

    /// Lists employees whose gender equals `gender` exactly.
    pub fn find_all_by_gender(&self, gender: &str) -> EmployeeServiceResult<Vec<Employee>> {
        Ok(self.repo.find_all_by_gender(gender)?)
    }

    /// Stores a new employee and returns it with the assigned id.
    ///
    /// Any id on the input is discarded; `company_id` is stored as given.
    pub fn create(&self, employee: &Employee) -> EmployeeServiceResult<Employee> {
        let unsaved = Employee {
            id: None,
            ..employee.clone()
        };
        let created = self.repo.save(&unsaved)?;
        info!(
            "event=employee_create module=service status=ok employee_id={}",
            created.id.unwrap_or_default()
        );
        Ok(created)
    }

    /// Returns the rows of 1-based page `page_number`, without page metadata.
    pub fn find_by_page(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> EmployeeServiceResult<Vec<Employee>> {
        let request = PageRequest::from_page_number(page_number, page_size);
        Ok(self.repo.find_page(request)?.into_content())
    }

    /// Deletes an employee by id. Unknown ids are a silent no-op.
    pub fn delete(&self, id: EmployeeId) -> EmployeeServiceResult<()> {
        self.repo.delete_by_id(id)?;
        info!("event=employee_delete module=service status=ok employee_id={id}");
        Ok(())
    }
}
