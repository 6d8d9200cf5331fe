//! Company record and merge patch.

use serde::{Deserialize, Serialize};

/// Store-assigned company identifier.
pub type CompanyId = i64;

/// Company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// `None` until the store assigns one on insert.
    pub id: Option<CompanyId>,
    pub name: String,
}

impl Company {
    /// Creates an unsaved company.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Creates a company carrying an already-assigned id.
    ///
    /// Used by import paths and tests where identity exists externally.
    pub fn with_id(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Returns whether the store has assigned an id yet.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Overwrites the fields present in `patch`, leaving the rest untouched.
    ///
    /// `name` is applied only when supplied and non-empty. `id` is never
    /// touched.
    pub fn apply_patch(&mut self, patch: &CompanyPatch) {
        if let Some(name) = non_empty(patch.name.as_deref()) {
            self.name = name.to_string();
        }
    }
}

/// Partial update for a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CompanyPatch {
    /// Patch that only renames.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Reads an entity-shaped payload as a patch: empty text means "not supplied".
impl From<&Company> for CompanyPatch {
    fn from(value: &Company) -> Self {
        Self {
            name: non_empty(Some(value.name.as_str())).map(str::to_string),
        }
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
