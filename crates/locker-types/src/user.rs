use serde::{Deserialize, Serialize};

/// Role tag as issued by the backend. Tags the client does not know about are
/// kept verbatim and never grant anything.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RoleRepr", into = "String")]
pub enum Role {
    User,
    Moderator,
    Admin,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "ROLE_USER",
            Role::Moderator => "ROLE_MODERATOR",
            Role::Admin => "ROLE_ADMIN",
            Role::Other(tag) => tag,
        }
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "ROLE_USER" => Role::User,
            "ROLE_MODERATOR" => Role::Moderator,
            "ROLE_ADMIN" => Role::Admin,
            _ => Role::Other(tag),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// The user listing returns role entities, the sign-in response returns bare tags.
#[derive(Deserialize)]
#[serde(untagged)]
enum RoleRepr {
    Tag(String),
    Entity { name: String },
}

impl From<RoleRepr> for Role {
    fn from(repr: RoleRepr) -> Self {
        match repr {
            RoleRepr::Tag(tag) | RoleRepr::Entity { name: tag } => Role::from(tag),
        }
    }
}

/// A registered account as listed by `GET /api/users`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aadhaar_number: Option<String>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl User {
    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }

    pub fn roles_label(&self) -> String {
        self.roles
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Signed-in state: the sign-in response, persisted as-is under the `user` key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    #[serde(rename = "type", default = "default_token_type")]
    pub token_type: String,
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub mobile_verified: bool,
}

fn default_token_type() -> String {
    "Bearer".into()
}

impl Session {
    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /api/auth/signup`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub mobile_number: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aadhaar_number: Option<String>,
}

/// Generic `{ message, success }` body used for acknowledgements and errors.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default = "default_success")]
    pub success: bool,
}

fn default_success() -> bool {
    true
}

impl MessageResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_decodes_signin_response() {
        let body = r#"{
            "token": "abc.def",
            "type": "Bearer",
            "id": 7,
            "username": "asha",
            "email": "asha@example.com",
            "mobileNumber": "9876543210",
            "fullName": "Asha Rao",
            "roles": ["ROLE_USER", "ROLE_MODERATOR"],
            "emailVerified": false,
            "mobileVerified": true
        }"#;
        let session: Session = serde_json::from_str(body).unwrap();
        assert_eq!(session.username, "asha");
        assert_eq!(session.roles, vec![Role::User, Role::Moderator]);
        assert!(session.mobile_verified);
        assert_eq!(session.bearer(), "Bearer abc.def");
    }

    #[test]
    fn unknown_role_is_kept_but_distinct() {
        let roles: Vec<Role> = serde_json::from_str(r#"["ROLE_AUDITOR"]"#).unwrap();
        assert_eq!(roles, vec![Role::Other("ROLE_AUDITOR".into())]);
        assert_eq!(serde_json::to_string(&roles).unwrap(), r#"["ROLE_AUDITOR"]"#);
    }

    #[test]
    fn user_accepts_role_entities() {
        let body = r#"{
            "id": 1,
            "username": "root",
            "email": "root@example.com",
            "fullName": "Root",
            "mobileNumber": "1234567890",
            "roles": [{"id": 3, "name": "ROLE_ADMIN"}, {"id": 1, "name": "ROLE_USER"}]
        }"#;
        let user: User = serde_json::from_str(body).unwrap();
        assert!(user.has_role(&Role::Admin));
        assert_eq!(user.roles_label(), "ROLE_ADMIN, ROLE_USER");
        assert_eq!(user.aadhaar_number, None);
    }

    #[test]
    fn signup_omits_empty_aadhaar() {
        let request = SignupRequest {
            username: "asha".into(),
            email: "asha@example.com".into(),
            password: "secret1".into(),
            mobile_number: "9876543210".into(),
            full_name: "Asha Rao".into(),
            aadhaar_number: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("aadhaarNumber").is_none());
        assert_eq!(json["mobileNumber"], "9876543210");
    }
}
