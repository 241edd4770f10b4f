use serde::{Deserialize, Serialize};

use crate::enums::{FormType, UserRole};
use crate::system::auth::{AllowedPaths, UserInfo};

/// Stage groups that correct the effective role. The directory is the source
/// of truth for these; a stale `user_type` from the login payload loses to
/// group membership.
const GROUP_ROLE_OVERRIDES: &[(&str, UserRole)] = &[
    ("SHQ-TRANSFERPLUS_CONFERENTE", UserRole::Conferente),
    ("SHQ-TRANSFERPLUS_DESEMBARQUE", UserRole::Desembarque),
    ("SHQ-TRANSFERPLUS_EMBARQUE", UserRole::Embarque),
];

/// Canonical, normalized session value.
///
/// Built exactly once per login/restore; every router and guard function
/// takes it (or parts of it) as an explicit parameter, so no page ever reads
/// storage or re-derives roles on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub username: String,
    pub role: UserRole,
    pub groups: Vec<String>,
    pub allowed_paths: Option<AllowedPaths>,
    pub form_type: Option<FormType>,
    pub ou: Option<String>,
}

impl SessionContext {
    /// Normalizes a login payload into the session the rest of the app runs
    /// on. `Admin` is never downgraded by group membership.
    pub fn from_user(user: &UserInfo) -> Self {
        let groups = user.groups.clone().unwrap_or_default();

        let mut role = user.user_type;
        if role != UserRole::Admin {
            for (group, mapped) in GROUP_ROLE_OVERRIDES {
                if groups.iter().any(|g| g == group) {
                    role = *mapped;
                    break;
                }
            }
        }

        Self {
            username: user.username.clone(),
            role,
            groups,
            allowed_paths: user.allowed_paths.clone(),
            form_type: user.form_type.as_deref().and_then(FormType::from_code),
            ou: user.ou.clone(),
        }
    }

    pub fn has_group(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g == name)
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(user_type: UserRole, groups: &[&str]) -> UserInfo {
        UserInfo {
            username: "wallace.araujo".to_string(),
            email: None,
            user_type,
            success: true,
            groups: Some(groups.iter().map(|g| g.to_string()).collect()),
            access_level: None,
            allowed_paths: None,
            form_type: None,
            ou: None,
        }
    }

    #[test]
    fn test_role_corrected_from_groups() {
        let session =
            SessionContext::from_user(&user(UserRole::Desembarque, &["SHQ-TRANSFERPLUS_CONFERENTE"]));
        assert_eq!(session.role, UserRole::Conferente);

        let session =
            SessionContext::from_user(&user(UserRole::Conferente, &["SHQ-TRANSFERPLUS_EMBARQUE"]));
        assert_eq!(session.role, UserRole::Embarque);
    }

    #[test]
    fn test_admin_never_downgraded() {
        let session =
            SessionContext::from_user(&user(UserRole::Admin, &["SHQ-TRANSFERPLUS_CONFERENTE"]));
        assert_eq!(session.role, UserRole::Admin);
    }

    #[test]
    fn test_first_matching_group_wins() {
        let session = SessionContext::from_user(&user(
            UserRole::Embarque,
            &["SHQ-TRANSFERPLUS_CONFERENTE", "SHQ-TRANSFERPLUS_DESEMBARQUE"],
        ));
        assert_eq!(session.role, UserRole::Conferente);
    }

    #[test]
    fn test_missing_groups_keep_payload_role() {
        let mut info = user(UserRole::Embarque, &[]);
        info.groups = None;
        let session = SessionContext::from_user(&info);
        assert_eq!(session.role, UserRole::Embarque);
        assert!(session.groups.is_empty());
    }

    #[test]
    fn test_form_type_parsed() {
        let mut info = user(UserRole::Conferente, &[]);
        info.form_type = Some("MATERIAL_SERVICO".to_string());
        let session = SessionContext::from_user(&info);
        assert_eq!(session.form_type, Some(FormType::MaterialServico));

        info.form_type = Some("INVALIDO".to_string());
        let session = SessionContext::from_user(&info);
        assert_eq!(session.form_type, None);
    }
}
