//! Employee Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee role, the only input to permission checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeRole {
    Manager,
    Seller,
    Cashier,
    Stocker,
}

impl EmployeeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "MANAGER",
            Self::Seller => "SELLER",
            Self::Cashier => "CASHIER",
            Self::Stocker => "STOCKER",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "MANAGER" => Some(Self::Manager),
            "SELLER" => Some(Self::Seller),
            "CASHIER" => Some(Self::Cashier),
            "STOCKER" => Some(Self::Stocker),
            _ => None,
        }
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employee response (without password)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: EmployeeRole,
    pub is_active: bool,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: EmployeeRole,
}

/// Update employee payload; absent fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    /// New password, hashed before storage
    pub password: Option<String>,
    pub role: Option<EmployeeRole>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_roundtrip() {
        for role in [
            EmployeeRole::Manager,
            EmployeeRole::Seller,
            EmployeeRole::Cashier,
            EmployeeRole::Stocker,
        ] {
            assert_eq!(EmployeeRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(EmployeeRole::parse("admin"), None);
    }

    #[test]
    fn test_update_fields_are_optional() {
        let update: EmployeeUpdate = serde_json::from_str(r#"{"role":"CASHIER"}"#).unwrap();
        assert_eq!(update.role, Some(EmployeeRole::Cashier));
        assert!(update.name.is_none());
        assert!(update.password.is_none());
        assert!(update.is_active.is_none());
    }
}
