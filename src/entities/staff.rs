use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::Record;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Staff {
    /// `None` for role strings this dashboard does not know.
    pub fn role(&self) -> Option<Role> {
        Role::from_str(&self.role).ok()
    }
}

impl Record for Staff {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Operation,
    Staff,
    Waiter,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Operation, Role::Staff, Role::Waiter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Operation => "operation",
            Role::Staff => "staff",
            Role::Waiter => "waiter",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "operation" => Ok(Role::Operation),
            "staff" => Ok(Role::Staff),
            "waiter" => Ok(Role::Waiter),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
