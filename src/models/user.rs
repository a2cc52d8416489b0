use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Access level stored on a user document. Kept as a closed enum so a typo
/// in the database can never grant elevated access. Documents written before
/// the role field existed deserialize as `User`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults_to_user_when_missing() {
        let user: User = serde_json::from_str(r#"{"email": "ana@example.com"}"#).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(!user.role.is_admin());
    }

    #[test]
    fn test_admin_role_parses() {
        let user: User =
            serde_json::from_str(r#"{"email": "root@example.com", "role": "admin"}"#).unwrap();
        assert!(user.role.is_admin());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result =
            serde_json::from_str::<User>(r#"{"email": "x@example.com", "role": "superadmin"}"#);
        assert!(result.is_err());
    }
}
