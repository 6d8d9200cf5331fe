//! Employee record and merge patch.
//!
//! # Invariants
//! - `gender` is free text; observed values are `"Male"` and `"Female"`.
//! - `company_id` is a plain reference used for filtering, no existence
//!   check is made against companies.
//! - Patches never carry `id` or `company_id`.

use crate::model::company::{non_empty, CompanyId};
use serde::{Deserialize, Serialize};

/// Store-assigned employee identifier.
pub type EmployeeId = i64;

/// Employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// `None` until the store assigns one on insert.
    pub id: Option<EmployeeId>,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i64,
    #[serde(default)]
    pub company_id: Option<CompanyId>,
}

impl Employee {
    /// Creates an unsaved employee that belongs to no company.
    pub fn new(name: impl Into<String>, age: i32, gender: impl Into<String>, salary: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
            gender: gender.into(),
            salary,
            company_id: None,
        }
    }

    /// Creates an employee carrying an already-assigned id.
    pub fn with_id(
        id: EmployeeId,
        name: impl Into<String>,
        age: i32,
        gender: impl Into<String>,
        salary: i64,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(name, age, gender, salary)
        }
    }

    /// Builder-style variant of [`Employee::set_company_id`].
    pub fn with_company_id(mut self, company_id: CompanyId) -> Self {
        self.company_id = Some(company_id);
        self
    }

    /// Points this employee at a company, or detaches it with `None`.
    pub fn set_company_id(&mut self, company_id: Option<CompanyId>) {
        self.company_id = company_id;
    }

    /// Returns whether the store has assigned an id yet.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Overwrites the fields present in `patch`, leaving the rest untouched.
    ///
    /// Text fields are applied when supplied and non-empty. Numeric fields
    /// are applied whenever supplied, so `Some(0)` is a real value.
    pub fn apply_patch(&mut self, patch: &EmployeePatch) {
        if let Some(name) = non_empty(patch.name.as_deref()) {
            self.name = name.to_string();
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(gender) = non_empty(patch.gender.as_deref()) {
            self.gender = gender.to_string();
        }
        if let Some(salary) = patch.salary {
            self.salary = salary;
        }
    }
}

/// Partial update for an employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<i64>,
}

/// Reads an entity-shaped payload as a patch. Empty text means "not
/// supplied"; numbers are always supplied.
impl From<&Employee> for EmployeePatch {
    fn from(value: &Employee) -> Self {
        Self {
            name: non_empty(Some(value.name.as_str())).map(str::to_string),
            age: Some(value.age),
            gender: non_empty(Some(value.gender.as_str())).map(str::to_string),
            salary: Some(value.salary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Employee, EmployeePatch};

    #[test]
    fn apply_patch_only_touches_supplied_fields() {
        let mut employee = Employee::with_id(1, "Robert", 19, "Male", 40000).with_company_id(7);
        employee.apply_patch(&EmployeePatch {
            salary: Some(45000),
            ..EmployeePatch::default()
        });

        assert_eq!(employee.name, "Robert");
        assert_eq!(employee.age, 19);
        assert_eq!(employee.gender, "Male");
        assert_eq!(employee.salary, 45000);
        assert_eq!(employee.company_id, Some(7));
    }

    #[test]
    fn zero_numeric_values_are_applied() {
        let mut employee = Employee::with_id(1, "Robert", 19, "Male", 40000);
        employee.apply_patch(&EmployeePatch {
            age: Some(0),
            salary: Some(0),
            ..EmployeePatch::default()
        });
        assert_eq!(employee.age, 0);
        assert_eq!(employee.salary, 0);
    }

    #[test]
    fn empty_text_values_are_ignored() {
        let mut employee = Employee::with_id(1, "Robert", 19, "Male", 40000);
        employee.apply_patch(&EmployeePatch {
            name: Some(String::new()),
            gender: Some(String::new()),
            ..EmployeePatch::default()
        });
        assert_eq!(employee.name, "Robert");
        assert_eq!(employee.gender, "Male");
    }

    #[test]
    fn patch_from_entity_never_carries_company() {
        let payload = Employee::new("Madeline", 24, "Female", 50000).with_company_id(3);
        let patch = EmployeePatch::from(&payload);

        let mut target = Employee::with_id(2, "Old", 30, "Male", 1).with_company_id(9);
        target.apply_patch(&patch);
        assert_eq!(target.company_id, Some(9));
        assert_eq!(target.name, "Madeline");
        assert_eq!(target.gender, "Female");
    }
}
