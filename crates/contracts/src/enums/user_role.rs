use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Effective user roles recognized by the backend.
///
/// A user carries exactly one effective role per session. The backend sends
/// the role as an upper-case string in `user_type`; anything the client does
/// not recognize (including the backend's explicit `NO_ACCESS`) collapses to
/// [`UserRole::NoAccess`], which is authorized for nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    Desembarque,
    Conferente,
    Embarque,
    NoAccess,
}

impl UserRole {
    /// Wire code used by the backend and in `x-user-type` headers.
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Desembarque => "DESEMBARQUE",
            UserRole::Conferente => "CONFERENTE",
            UserRole::Embarque => "EMBARQUE",
            UserRole::NoAccess => "NO_ACCESS",
        }
    }

    /// Human-readable name shown next to the username.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrador",
            UserRole::Desembarque => "Desembarque",
            UserRole::Conferente => "Conferente",
            UserRole::Embarque => "Embarque",
            UserRole::NoAccess => "Sem acesso",
        }
    }

    /// The roles that can actually hold a session.
    pub fn all() -> Vec<UserRole> {
        vec![
            UserRole::Admin,
            UserRole::Desembarque,
            UserRole::Conferente,
            UserRole::Embarque,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ADMIN" => Some(UserRole::Admin),
            "DESEMBARQUE" => Some(UserRole::Desembarque),
            "CONFERENTE" => Some(UserRole::Conferente),
            "EMBARQUE" => Some(UserRole::Embarque),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    // Unknown wire values must not fail the whole payload; they land on
    // NoAccess, which holds no permissions.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(UserRole::from_code(&code).unwrap_or(UserRole::NoAccess))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for role in UserRole::all() {
            assert_eq!(UserRole::from_code(role.code()), Some(role));
        }
    }

    #[test]
    fn test_unknown_code_fails_closed() {
        let role: UserRole = serde_json::from_str("\"SUPERUSER\"").unwrap();
        assert_eq!(role, UserRole::NoAccess);
        let role: UserRole = serde_json::from_str("\"NO_ACCESS\"").unwrap();
        assert_eq!(role, UserRole::NoAccess);
    }

    #[test]
    fn test_serialize_as_wire_code() {
        assert_eq!(
            serde_json::to_string(&UserRole::Conferente).unwrap(),
            "\"CONFERENTE\""
        );
    }
}
