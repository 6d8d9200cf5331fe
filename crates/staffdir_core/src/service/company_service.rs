//! Company use-case service.
//!
//! # Responsibility
//! - Company CRUD with merge-update semantics.
//! - Listing the employees that point at a company.
//!
//! # Invariants
//! - No operation issues more than two repository calls.
//! - `CompanyNotFound` is the only error this service raises itself; store
//!   failures pass through in `Repo`.

use crate::model::company::{Company, CompanyId, CompanyPatch};
use crate::model::employee::Employee;
use crate::repo::company_repo::CompanyRepository;
use crate::repo::employee_repo::EmployeeRepository;
use crate::repo::{PageRequest, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from company service operations.
#[derive(Debug)]
pub enum CompanyServiceError {
    /// Target company does not exist.
    CompanyNotFound(CompanyId),
    /// Repository-level failure.
    Repo(RepoError),
}

impl Display for CompanyServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CompanyNotFound(id) => write!(f, "company not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CompanyServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::CompanyNotFound(_) => None,
        }
    }
}

impl From<RepoError> for CompanyServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

pub type CompanyServiceResult<T> = Result<T, CompanyServiceError>;

/// Company service facade over company and employee repositories.
pub struct CompanyService<C: CompanyRepository, E: EmployeeRepository> {
    companies: C,
    employees: E,
}

impl<C: CompanyRepository, E: EmployeeRepository> CompanyService<C, E> {
    /// Creates a service from repository implementations.
    pub fn new(companies: C, employees: E) -> Self {
        Self {
            companies,
            employees,
        }
    }

    /// Lists every company in store order.
    pub fn find_all(&self) -> CompanyServiceResult<Vec<Company>> {
        Ok(self.companies.find_all()?)
    }

    /// Returns the rows of 1-based page `page_number`, without page metadata.
    pub fn find_by_page(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> CompanyServiceResult<Vec<Company>> {
        let request = PageRequest::from_page_number(page_number, page_size);
        Ok(self.companies.find_page(request)?.into_content())
    }

    /// Gets one company by id.
    pub fn find_by_id(&self, id: CompanyId) -> CompanyServiceResult<Company> {
        self.companies
            .find_by_id(id)?
            .ok_or(CompanyServiceError::CompanyNotFound(id))
    }

    /// Merges `patch` into the stored company and saves it.
    ///
    /// # Contract
    /// - Fails with `CompanyNotFound` before any write when `id` is absent.
    /// - Fields missing from `patch` keep their stored values.
    pub fn update(&self, id: CompanyId, patch: &CompanyPatch) -> CompanyServiceResult<()> {
        let mut company = self.find_by_id(id)?;
        company.apply_patch(patch);
        self.companies.save(&company)?;
        info!("event=company_update module=service status=ok company_id={id}");
        Ok(())
    }

    /// Stores a new company and returns it with the assigned id.
    ///
    /// Any id on the input is discarded.
    pub fn create(&self, company: &Company) -> CompanyServiceResult<Company> {
        let unsaved = Company {
            id: None,
            ..company.clone()
        };
        let created = self.companies.save(&unsaved)?;
        info!(
            "event=company_create module=service status=ok company_id={}",
            created.id.unwrap_or_default()
        );
        Ok(created)
    }

    /// Lists employees whose `company_id` equals `company_id`.
    ///
    /// The company itself is not looked up; an unknown id yields an empty list.
    pub fn find_employees_by_company_id(
        &self,
        company_id: CompanyId,
    ) -> CompanyServiceResult<Vec<Employee>> {
        Ok(self.employees.find_by_company_id(company_id)?)
    }

    /// Deletes a company by id. Unknown ids are a silent no-op, and employees
    /// pointing at the company are left as they are.
    pub fn delete(&self, id: CompanyId) -> CompanyServiceResult<()> {
        self.companies.delete_by_id(id)?;
        info!("event=company_delete module=service status=ok company_id={id}");
        Ok(())
    }
}
