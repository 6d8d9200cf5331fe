//! Company repository contract and SQLite implementation.
//!
//! # Invariants
//! - `save` inserts when `id` is `None` and upserts by id otherwise.
//! - Listings and pages are ordered by `id ASC`.

use crate::model::company::{Company, CompanyId};
use crate::repo::error::{ensure_table_ready, RepoError, RepoResult};
use crate::repo::page::{Page, PageRequest};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

const COMPANY_SELECT_SQL: &str = "SELECT id, name FROM companies";

/// Persistence port for companies.
pub trait CompanyRepository {
    /// Lists every company in store order.
    fn find_all(&self) -> RepoResult<Vec<Company>>;
    /// Gets one company; `Ok(None)` when absent.
    fn find_by_id(&self, id: CompanyId) -> RepoResult<Option<Company>>;
    /// Returns one zero-based page of the full listing.
    fn find_page(&self, request: PageRequest) -> RepoResult<Page<Company>>;
    /// Inserts or updates, returning the stored record with its id set.
    fn save(&self, company: &Company) -> RepoResult<Company>;
    /// Removes one company; absent ids are not an error.
    fn delete_by_id(&self, id: CompanyId) -> RepoResult<()>;
}

impl<R: CompanyRepository + ?Sized> CompanyRepository for &R {
    fn find_all(&self) -> RepoResult<Vec<Company>> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: CompanyId) -> RepoResult<Option<Company>> {
        (**self).find_by_id(id)
    }

    fn find_page(&self, request: PageRequest) -> RepoResult<Page<Company>> {
        (**self).find_page(request)
    }

    fn save(&self, company: &Company) -> RepoResult<Company> {
        (**self).save(company)
    }

    fn delete_by_id(&self, id: CompanyId) -> RepoResult<()> {
        (**self).delete_by_id(id)
    }
}

/// SQLite-backed company repository.
pub struct SqliteCompanyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCompanyRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "companies", &["id", "name"])?;
        Ok(Self { conn })
    }
}

impl CompanyRepository for SqliteCompanyRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Company>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COMPANY_SELECT_SQL} ORDER BY id ASC;"))?;
        let companies = stmt
            .query_map([], parse_company_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(companies)
    }

    fn find_by_id(&self, id: CompanyId) -> RepoResult<Option<Company>> {
        let company = self
            .conn
            .query_row(
                &format!("{COMPANY_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_company_row,
            )
            .optional()?;
        Ok(company)
    }

    fn find_page(&self, request: PageRequest) -> RepoResult<Page<Company>> {
        let offset = i64::try_from(request.offset()).map_err(|_| {
            RepoError::InvalidData(format!("page offset {} out of range", request.offset()))
        })?;

        let mut stmt = self.conn.prepare(&format!(
            "{COMPANY_SELECT_SQL} ORDER BY id ASC LIMIT ?1 OFFSET ?2;"
        ))?;
        let content = stmt
            .query_map(
                params![i64::from(request.page_size), offset],
                parse_company_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;

        let total: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM companies;", [], |row| row.get(0))?;

        Ok(Page::new(content, request, total.unsigned_abs()))
    }

    fn save(&self, company: &Company) -> RepoResult<Company> {
        let id = match company.id {
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO companies (id, name) VALUES (?1, ?2)
                     ON CONFLICT(id) DO UPDATE SET name = excluded.name;",
                    params![id, company.name.as_str()],
                )?;
                id
            }
            None => {
                self.conn.execute(
                    "INSERT INTO companies (name) VALUES (?1);",
                    [company.name.as_str()],
                )?;
                self.conn.last_insert_rowid()
            }
        };

        Ok(Company {
            id: Some(id),
            name: company.name.clone(),
        })
    }

    fn delete_by_id(&self, id: CompanyId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM companies WHERE id = ?1;", [id])?;
        debug!(
            "event=company_delete module=repo status=ok company_id={} changed={}",
            id, changed
        );
        Ok(())
    }
}

fn parse_company_row(row: &Row<'_>) -> rusqlite::Result<Company> {
    Ok(Company {
        id: Some(row.get("id")?),
        name: row.get("name")?,
    })
}
