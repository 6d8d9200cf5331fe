//! Employee repository contract and SQLite implementation.
//!
//! # Invariants
//! - `save` inserts when `id` is `None` and upserts by id otherwise.
//! - Listings, pages and filtered queries are ordered by `id ASC`.
//! - `find_all_by_gender` is an exact, case-sensitive match.

use crate::model::company::CompanyId;
use crate::model::employee::{Employee, EmployeeId};
use crate::repo::error::{ensure_table_ready, RepoError, RepoResult};
use crate::repo::page::{Page, PageRequest};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Params, Row};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    id,
    name,
    age,
    gender,
    salary,
    company_id
FROM employees";

const EMPLOYEE_COLUMNS: &[&str] = &["id", "name", "age", "gender", "salary", "company_id"];

/// Persistence port for employees.
pub trait EmployeeRepository {
    /// Lists every employee in store order.
    fn find_all(&self) -> RepoResult<Vec<Employee>>;
    /// Gets one employee; `Ok(None)` when absent.
    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Returns one zero-based page of the full listing.
    fn find_page(&self, request: PageRequest) -> RepoResult<Page<Employee>>;
    /// Inserts or updates, returning the stored record with its id set.
    fn save(&self, employee: &Employee) -> RepoResult<Employee>;
    /// Removes one employee; absent ids are not an error.
    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()>;
    /// Lists employees whose `company_id` equals `company_id`.
    fn find_by_company_id(&self, company_id: CompanyId) -> RepoResult<Vec<Employee>>;
    /// Lists employees whose gender equals `gender` exactly.
    fn find_all_by_gender(&self, gender: &str) -> RepoResult<Vec<Employee>>;
}

impl<R: EmployeeRepository + ?Sized> EmployeeRepository for &R {
    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        (**self).find_by_id(id)
    }

    fn find_page(&self, request: PageRequest) -> RepoResult<Page<Employee>> {
        (**self).find_page(request)
    }

    fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        (**self).save(employee)
    }

    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        (**self).delete_by_id(id)
    }

    fn find_by_company_id(&self, company_id: CompanyId) -> RepoResult<Vec<Employee>> {
        (**self).find_by_company_id(company_id)
    }

    fn find_all_by_gender(&self, gender: &str) -> RepoResult<Vec<Employee>> {
        (**self).find_all_by_gender(gender)
    }
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "employees", EMPLOYEE_COLUMNS)?;
        Ok(Self { conn })
    }

    fn query_employees(&self, filter: &str, params: impl Params) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} {filter} ORDER BY id ASC;"))?;
        let employees = stmt
            .query_map(params, parse_employee_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(employees)
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Employee>> {
        self.query_employees("", [])
    }

    fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let employee = self
            .conn
            .query_row(
                &format!("{EMPLOYEE_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_employee_row,
            )
            .optional()?;
        Ok(employee)
    }

    fn find_page(&self, request: PageRequest) -> RepoResult<Page<Employee>> {
        let offset = i64::try_from(request.offset()).map_err(|_| {
            RepoError::InvalidData(format!("page offset {} out of range", request.offset()))
        })?;

        let mut stmt = self.conn.prepare(&format!(
            "{EMPLOYEE_SELECT_SQL} ORDER BY id ASC LIMIT ?1 OFFSET ?2;"
        ))?;
        let content = stmt
            .query_map(
                params![i64::from(request.page_size), offset],
                parse_employee_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        let total: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM employees;", [], |row| row.get(0))?;

        Ok(Page::new(content, request, total.unsigned_abs()))
    }

    fn save(&self, employee: &Employee) -> RepoResult<Employee> {
        let id = match employee.id {
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO employees (id, name, age, gender, salary, company_id)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        age = excluded.age,
                        gender = excluded.gender,
                        salary = excluded.salary,
                        company_id = excluded.company_id;",
                    params![
                        id,
                        employee.name.as_str(),
                        employee.age,
                        employee.gender.as_str(),
                        employee.salary,
                        employee.company_id,
                    ],
                )?;
                id
            }
            None => {
                self.conn.execute(
                    "INSERT INTO employees (name, age, gender, salary, company_id)
                     VALUES (?1, ?2, ?3, ?4, ?5);",
                    params![
                        employee.name.as_str(),
                        employee.age,
                        employee.gender.as_str(),
                        employee.salary,
                        employee.company_id,
                    ],
                )?;
                self.conn.last_insert_rowid()
            }
        };

        Ok(Employee {
            id: Some(id),
            ..employee.clone()
        })
    }

    fn delete_by_id(&self, id: EmployeeId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM employees WHERE id = ?1;", [id])?;
        debug!(
            "event=employee_delete module=repo status=ok employee_id={} changed={}",
            id, changed
        );
        Ok(())
    }

    fn find_by_company_id(&self, company_id: CompanyId) -> RepoResult<Vec<Employee>> {
        self.query_employees("WHERE company_id = ?1", [company_id])
    }

    fn find_all_by_gender(&self, gender: &str) -> RepoResult<Vec<Employee>> {
        self.query_employees("WHERE gender = ?1", [gender])
    }
}

fn parse_employee_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        age: row.get("age")?,
        gender: row.get("gender")?,
        salary: row.get("salary")?,
        company_id: row.get("company_id")?,
    })
}
