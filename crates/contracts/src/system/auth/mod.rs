use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Envelope returned by `POST /api/login`.
///
/// `status` is the backend's own success flag ("success"/"error"); `user` is
/// only present on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

/// User record as persisted at login time.
///
/// Everything the routing core needs comes from here; the optional fields are
/// simply absent for accounts the directory has not enriched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub user_type: UserRole,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub groups: Option<Vec<String>>,
    #[serde(default)]
    pub access_level: Option<String>,
    #[serde(default)]
    pub allowed_paths: Option<AllowedPaths>,
    #[serde(default)]
    pub form_type: Option<String>,
    #[serde(default)]
    pub ou: Option<String>,
}

/// Per-user path override: either the `"ALL"` sentinel or a list of path
/// fragments. Matching is substring containment in either direction, so both
/// `"/desembarque"` vs `"desembarque"` and partial fragments line up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AllowedPaths {
    Sentinel(String),
    Paths(Vec<String>),
}

impl AllowedPaths {
    pub fn is_all(&self) -> bool {
        matches!(self, AllowedPaths::Sentinel(s) if s == "ALL")
    }

    /// Whether `path` clears this override. A sentinel other than `"ALL"`
    /// clears nothing.
    pub fn allows(&self, path: &str) -> bool {
        match self {
            AllowedPaths::Sentinel(s) => s == "ALL",
            AllowedPaths::Paths(list) => {
                let bare = path.trim_start_matches('/');
                list.iter()
                    .any(|allowed| path.contains(allowed.as_str()) || allowed.contains(bare))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_paths_sentinel() {
        let all = AllowedPaths::Sentinel("ALL".to_string());
        assert!(all.is_all());
        assert!(all.allows("/qualquer-coisa"));

        let bogus = AllowedPaths::Sentinel("NONE".to_string());
        assert!(!bogus.is_all());
        assert!(!bogus.allows("/desembarque"));
    }

    #[test]
    fn test_allowed_paths_substring_both_directions() {
        let paths = AllowedPaths::Paths(vec!["desembarque".to_string()]);
        assert!(paths.allows("/desembarque"));

        let longer = AllowedPaths::Paths(vec!["/desembarque_consulta".to_string()]);
        assert!(longer.allows("/desembarque_consulta"));
        // fragment of the current path contained in the allow entry
        assert!(longer.allows("desembarque_consulta"));

        let other = AllowedPaths::Paths(vec!["embarque".to_string()]);
        assert!(!other.allows("/conferencia"));
    }

    #[test]
    fn test_wire_shapes() {
        let all: AllowedPaths = serde_json::from_str("\"ALL\"").unwrap();
        assert!(all.is_all());

        let list: AllowedPaths = serde_json::from_str("[\"desembarque\", \"lom\"]").unwrap();
        assert_eq!(
            list,
            AllowedPaths::Paths(vec!["desembarque".to_string(), "lom".to_string()])
        );
    }

    #[test]
    fn test_user_info_minimal_payload() {
        let user: UserInfo = serde_json::from_str(
            r#"{"username": "wallace.araujo", "user_type": "CONFERENTE", "success": true}"#,
        )
        .unwrap();
        assert_eq!(user.user_type, crate::enums::UserRole::Conferente);
        assert!(user.groups.is_none());
        assert!(user.allowed_paths.is_none());
    }
}
