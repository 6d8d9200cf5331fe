//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `staffdir_core` linkage and the configured store.
//! - Keep output deterministic for quick local sanity checks.

use log::error;
use staffdir_core::{
    CompanyService, CoreConfig, EmployeeService, SqliteCompanyRepository,
    SqliteEmployeeRepository,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("staffdir_core ping={}", staffdir_core::ping());
    println!("staffdir_core version={}", staffdir_core::core_version());

    match report_store(&CoreConfig::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_smoke module=cli status=error error={message}");
            eprintln!("staffdir_cli error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn report_store(config: &CoreConfig) -> Result<(), String> {
    config.init_logging()?;
    let conn = config.open_store().map_err(|err| err.to_string())?;

    let companies = SqliteCompanyRepository::try_new(&conn).map_err(|err| err.to_string())?;
    let employees = SqliteEmployeeRepository::try_new(&conn).map_err(|err| err.to_string())?;
    let company_count = CompanyService::new(&companies, &employees)
        .find_all()
        .map_err(|err| err.to_string())?
        .len();
    let employee_count = EmployeeService::new(&employees)
        .find_all()
        .map_err(|err| err.to_string())?
        .len();

    let store = config
        .db_path
        .as_ref()
        .map_or_else(|| "memory".to_string(), |path| path.display().to_string());
    println!("staffdir_core store={store}");
    println!("staffdir_core companies={company_count} employees={employee_count}");
    Ok(())
}
