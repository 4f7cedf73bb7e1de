//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee ID type (assigned by the store on first save)
pub type EmployeeId = i64;

/// Employee record
///
/// Every attribute is optional: absent fields are omitted from JSON output and
/// stored as NULL. `id` is `None` until the record has been persisted.
///
/// ```json
/// { "id": 1, "name": "Ann", "department": "Sales" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Employee {
    /// Create an unsaved employee with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Return the same record carrying `id`
    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_omitted() {
        let employee = Employee::named("Ann").with_id(1);
        let json = serde_json::to_string(&employee).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Ann"}"#);
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let employee: Employee = serde_json::from_str(r#"{"name":"Ann"}"#).unwrap();
        assert_eq!(employee.id, None);
        assert_eq!(employee.name.as_deref(), Some("Ann"));
        assert_eq!(employee.email, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let employee: Employee =
            serde_json::from_str(r#"{"name":"Ann","nickname":"A"}"#).unwrap();
        assert_eq!(employee, Employee::named("Ann"));
    }
}
