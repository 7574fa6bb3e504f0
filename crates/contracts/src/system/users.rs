use serde::{Deserialize, Serialize};

use crate::domain::common::require_text;

/// Dashboard operator account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl User {
    /// First letter of the username, uppercased, for the header avatar.
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Body of `POST /api/register` and `PUT /api/users/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub username: String,
    pub password: String,
}

impl UserForm {
    /// Editing never pre-fills the password.
    pub fn from_entity(u: &User) -> Self {
        Self {
            username: u.username.clone(),
            password: String::new(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.username, "اسم المستخدم مطلوب")?;
        require_text(&self.password, "كلمة المرور مطلوبة")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial() {
        let u = User {
            id: "1".into(),
            username: "admin".into(),
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert_eq!(u.initial(), "A");

        let empty = User { username: String::new(), ..u };
        assert_eq!(empty.initial(), "");
    }

    #[test]
    fn test_me_payload_without_timestamps() {
        let u: User = serde_json::from_str(r#"{"id":"u1","username":"admin"}"#).unwrap();
        assert_eq!(u.username, "admin");
        assert!(u.created_at.is_empty());
    }

    #[test]
    fn test_form_from_entity_clears_password() {
        let u = User {
            id: "1".into(),
            username: "staff".into(),
            created_at: String::new(),
            updated_at: String::new(),
        };
        let form = UserForm::from_entity(&u);
        assert_eq!(form.username, "staff");
        assert!(form.password.is_empty());
        assert!(form.validate().is_err());
    }
}
