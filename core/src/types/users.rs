use serde::{Deserialize, Serialize};

/// A user account as listed by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct UserDto {
    pub id: String,
    pub name: Option<String>,
    pub server_id: Option<String>,
    pub server_name: Option<String>,
    pub prefix: Option<String>,
    pub connect_user_name: Option<String>,
    pub connect_link_type: Option<String>,
    pub date_created: Option<String>,
    pub primary_image_tag: Option<String>,
    pub has_password: Option<bool>,
    pub has_configured_password: Option<bool>,
    pub enable_auto_login: Option<bool>,
    pub last_login_date: Option<String>,
    pub last_activity_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_decodes_with_sparse_fields() {
        let user: UserDto =
            serde_json::from_str(r#"{"Id":"1","Name":"admin","HasPassword":false}"#).unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.name.as_deref(), Some("admin"));
        assert_eq!(user.has_password, Some(false));
        assert!(user.last_login_date.is_none());
    }
}
