use staffdir_core::db::open_db_in_memory;
use staffdir_core::{
    Company, CompanyPatch, CompanyRepository, CompanyService, CompanyServiceError, Employee,
    EmployeeRepository, PageRequest, SqliteCompanyRepository, SqliteEmployeeRepository,
};

fn seed_companies(repo: &SqliteCompanyRepository<'_>) -> Vec<Company> {
    [
        "Orient Overseas Container Line.",
        "COSCO Shipping Lines",
        "Thoughtworks",
    ]
    .into_iter()
    .map(|name| repo.save(&Company::new(name)).unwrap())
    .collect()
}

#[test]
fn save_assigns_id_and_find_by_id_roundtrips() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::try_new(&conn).unwrap();

    let saved = repo.save(&Company::new("Thoughtworks")).unwrap();
    let id = saved.id.expect("store assigns an id");

    assert_eq!(repo.find_by_id(id).unwrap(), Some(saved));
    assert_eq!(repo.find_by_id(id + 1).unwrap(), None);
}

#[test]
fn save_with_existing_id_updates_in_place() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::try_new(&conn).unwrap();
    let saved = repo.save(&Company::new("Asus")).unwrap();

    let renamed = Company {
        name: "Asrock".to_string(),
        ..saved.clone()
    };
    repo.save(&renamed).unwrap();

    assert_eq!(repo.find_all().unwrap(), vec![renamed]);
}

#[test]
fn find_page_reports_total_and_slices_in_id_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCompanyRepository::try_new(&conn).unwrap();
    let seeded = seed_companies(&repo);

    let page = repo.find_page(PageRequest::of(1, 2)).unwrap();
    assert_eq!(page.content, seeded[2..].to_vec());
    assert_eq!(page.total_elements, 3);
    assert_eq!(page.total_pages(), 2);
}

#[test]
fn service_find_all_returns_store_order() {
    let conn = open_db_in_memory().unwrap();
    let companies = SqliteCompanyRepository::try_new(&conn).unwrap();
    let employees = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let seeded = seed_companies(&companies);
    let service = CompanyService::new(companies, employees);

    assert_eq!(service.find_all().unwrap(), seeded);
}

#[test]
fn service_find_by_page_uses_one_based_page_numbers() {
    let conn = open_db_in_memory().unwrap();
    let companies = SqliteCompanyRepository::try_new(&conn).unwrap();
    let employees = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let seeded = seed_companies(&companies);
    let service = CompanyService::new(companies, employees);

    let first = service.find_by_page(1, 2).unwrap();
    assert_eq!(first, seeded[..2].to_vec());
    assert_ne!(first, seeded);

    let second = service.find_by_page(2, 2).unwrap();
    assert_eq!(second, seeded[2..].to_vec());
}

#[test]
fn service_find_by_id_reports_missing_company() {
    let conn = open_db_in_memory().unwrap();
    let companies = SqliteCompanyRepository::try_new(&conn).unwrap();
    let employees = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let service = CompanyService::new(companies, employees);

    let created = service
        .create(&Company::new("Orient Overseas Container Line"))
        .unwrap();
    let id = created.id.unwrap();
    assert_eq!(service.find_by_id(id).unwrap(), created);

    let err = service.find_by_id(id + 10).unwrap_err();
    assert!(matches!(err, CompanyServiceError::CompanyNotFound(missing) if missing == id + 10));
}

#[test]
fn service_create_returns_assigned_id_and_same_fields() {
    let conn = open_db_in_memory().unwrap();
    let companies = SqliteCompanyRepository::try_new(&conn).unwrap();
    let employees = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let service = CompanyService::new(companies, employees);

    let input = Company::new("Orient Overseas Container Line");
    let created = service.create(&input).unwrap();

    assert!(created.is_persisted());
    assert_eq!(created.name, input.name);
}

#[test]
fn service_update_renames_and_keeps_id() {
    let conn = open_db_in_memory().unwrap();
    let companies = SqliteCompanyRepository::try_new(&conn).unwrap();
    let employees = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let service = CompanyService::new(companies, employees);
    let id = service.create(&Company::new("Asus")).unwrap().id.unwrap();

    service.update(id, &CompanyPatch::rename("Asrock")).unwrap();
    assert_eq!(service.find_by_id(id).unwrap(), Company::with_id(id, "Asrock"));

    service.update(id, &CompanyPatch::default()).unwrap();
    service
        .update(id, &CompanyPatch::from(&Company::new("")))
        .unwrap();
    assert_eq!(service.find_by_id(id).unwrap().name, "Asrock");
}

#[test]
fn service_update_missing_company_fails_without_insert() {
    let conn = open_db_in_memory().unwrap();
    let companies = SqliteCompanyRepository::try_new(&conn).unwrap();
    let employees = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let service = CompanyService::new(companies, employees);

    let err = service.update(1, &CompanyPatch::rename("Asrock")).unwrap_err();
    assert!(matches!(err, CompanyServiceError::CompanyNotFound(1)));
    assert!(service.find_all().unwrap().is_empty());
}

#[test]
fn service_lists_only_employees_of_requested_company() {
    let conn = open_db_in_memory().unwrap();
    let companies = SqliteCompanyRepository::try_new(&conn).unwrap();
    let employees = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let oocl = companies
        .save(&Company::new("Orient Overseas Container Line"))
        .unwrap()
        .id
        .unwrap();
    let other = companies.save(&Company::new("Thoughtworks")).unwrap().id.unwrap();

    let robert = employees
        .save(&Employee::new("Robert", 19, "Male", 40000).with_company_id(oocl))
        .unwrap();
    let madeline = employees
        .save(&Employee::new("Madeline", 24, "Female", 50000).with_company_id(oocl))
        .unwrap();
    employees
        .save(&Employee::new("Elizabeth", 22, "Female", 120000).with_company_id(other))
        .unwrap();

    let service = CompanyService::new(&companies, &employees);
    let under_oocl = service.find_employees_by_company_id(oocl).unwrap();

    assert_eq!(under_oocl, vec![robert, madeline]);
    assert_ne!(under_oocl, employees.find_all().unwrap());
    assert!(service.find_employees_by_company_id(other + 1).unwrap().is_empty());
}

#[test]
fn service_delete_removes_company_and_ignores_unknown_ids() {
    let conn = open_db_in_memory().unwrap();
    let companies = SqliteCompanyRepository::try_new(&conn).unwrap();
    let employees = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let service = CompanyService::new(&companies, &employees);

    let id = service.create(&Company::new("Asus")).unwrap().id.unwrap();
    let staff = employees
        .save(&Employee::new("Robert", 19, "Male", 40000).with_company_id(id))
        .unwrap();

    service.delete(id).unwrap();
    service.delete(id).unwrap();
    service.delete(12345).unwrap();

    assert!(matches!(
        service.find_by_id(id),
        Err(CompanyServiceError::CompanyNotFound(_))
    ));
    // Employees are not cascaded.
    assert_eq!(service.find_employees_by_company_id(id).unwrap(), vec![staff]);
}
