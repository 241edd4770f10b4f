use serde::{Deserialize, Serialize};

use crate::enums::{FormType, UserRole};

use super::screen::Screen;
use super::session::SessionContext;

/// The two coexisting navigation strategies.
///
/// The legacy flow pre-routes each user to a role/group-specific screen right
/// after login; the unified flow lands everyone on the menu and lets each
/// screen guard itself. Both ship as selectable configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationStrategy {
    LegacyPreRouting,
    UnifiedMenu,
}

/// Supplier-group precedence for the legacy flow. Order matters: the service
/// variants come first because their group names contain the plain material
/// group name.
const GROUP_LANDING: &[(&str, Screen)] = &[
    ("VDF_SUPPLIER_SERVICE", Screen::ServiceForm),
    ("VDF_SUPPLIER_MATERIAL_SERVICE", Screen::MaterialServiceForm),
    ("VDF_SUPPLIER_MATERIAL", Screen::MaterialForm),
    ("VDF_COORDINATOR", Screen::SupplierList),
    ("VDF_MANAGER", Screen::SupplierList),
];

/// Default landing per effective role, also the redirect target after an
/// authorization denial.
pub fn default_screen_for_role(role: UserRole) -> Screen {
    match role {
        UserRole::Admin => Screen::Menu,
        UserRole::Desembarque => Screen::Disembarkation,
        UserRole::Conferente => Screen::Conference,
        UserRole::Embarque => Screen::Shipment,
        UserRole::NoAccess => Screen::Login,
    }
}

fn form_landing(form_type: FormType) -> Screen {
    match form_type {
        FormType::Material => Screen::MaterialForm,
        FormType::Servico => Screen::ServiceForm,
        FormType::MaterialServico => Screen::MaterialServiceForm,
        FormType::Interno => Screen::InternalRegistration,
    }
}

/// Resolves the screen a freshly authenticated session lands on.
///
/// Fails closed: an absent session (missing or unparseable persisted state)
/// or a session without an effective role always resolves to `Login`, never
/// to a privileged screen.
pub fn resolve_default_screen(
    session: Option<&SessionContext>,
    strategy: NavigationStrategy,
) -> Screen {
    let Some(session) = session else {
        return Screen::Login;
    };
    if session.role == UserRole::NoAccess {
        return Screen::Login;
    }

    match strategy {
        NavigationStrategy::UnifiedMenu => Screen::Menu,
        NavigationStrategy::LegacyPreRouting => {
            // An explicit form type from the login payload overrides any
            // group-based inference.
            if let Some(form_type) = session.form_type {
                return form_landing(form_type);
            }
            if session.ou.as_deref() == Some("SHQ") && session.has_group("Domain Users") {
                return Screen::InternalRegistration;
            }
            for (group, screen) in GROUP_LANDING {
                if session.has_group(group) {
                    return *screen;
                }
            }
            default_screen_for_role(session.role)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: UserRole, groups: &[&str]) -> SessionContext {
        SessionContext {
            username: "maria.souza".to_string(),
            role,
            groups: groups.iter().map(|g| g.to_string()).collect(),
            allowed_paths: None,
            form_type: None,
            ou: None,
        }
    }

    #[test]
    fn test_absent_session_lands_on_login() {
        assert_eq!(
            resolve_default_screen(None, NavigationStrategy::LegacyPreRouting),
            Screen::Login
        );
        assert_eq!(
            resolve_default_screen(None, NavigationStrategy::UnifiedMenu),
            Screen::Login
        );
    }

    #[test]
    fn test_no_access_lands_on_login() {
        let s = session(UserRole::NoAccess, &["VDF_SUPPLIER_MATERIAL"]);
        assert_eq!(
            resolve_default_screen(Some(&s), NavigationStrategy::UnifiedMenu),
            Screen::Login
        );
        assert_eq!(
            resolve_default_screen(Some(&s), NavigationStrategy::LegacyPreRouting),
            Screen::Login
        );
    }

    #[test]
    fn test_unified_menu_lands_on_menu() {
        for role in UserRole::all() {
            assert_eq!(
                resolve_default_screen(Some(&session(role, &[])), NavigationStrategy::UnifiedMenu),
                Screen::Menu
            );
        }
    }

    #[test]
    fn test_form_type_overrides_groups() {
        let mut s = session(UserRole::Conferente, &["VDF_SUPPLIER_MATERIAL"]);
        s.form_type = Some(crate::enums::FormType::MaterialServico);
        assert_eq!(
            resolve_default_screen(Some(&s), NavigationStrategy::LegacyPreRouting),
            Screen::MaterialServiceForm
        );
    }

    #[test]
    fn test_group_precedence() {
        let s = session(
            UserRole::Conferente,
            &["VDF_SUPPLIER_MATERIAL", "VDF_SUPPLIER_SERVICE"],
        );
        assert_eq!(
            resolve_default_screen(Some(&s), NavigationStrategy::LegacyPreRouting),
            Screen::ServiceForm
        );

        let s = session(UserRole::Conferente, &["VDF_SUPPLIER_MATERIAL_SERVICE"]);
        assert_eq!(
            resolve_default_screen(Some(&s), NavigationStrategy::LegacyPreRouting),
            Screen::MaterialServiceForm
        );

        let s = session(UserRole::Conferente, &["VDF_COORDINATOR"]);
        assert_eq!(
            resolve_default_screen(Some(&s), NavigationStrategy::LegacyPreRouting),
            Screen::SupplierList
        );
    }

    #[test]
    fn test_shq_internal_registration() {
        let mut s = session(UserRole::Conferente, &["Domain Users"]);
        s.ou = Some("SHQ".to_string());
        assert_eq!(
            resolve_default_screen(Some(&s), NavigationStrategy::LegacyPreRouting),
            Screen::InternalRegistration
        );
    }

    #[test]
    fn test_stage_role_defaults() {
        assert_eq!(
            resolve_default_screen(
                Some(&session(UserRole::Desembarque, &[])),
                NavigationStrategy::LegacyPreRouting
            ),
            Screen::Disembarkation
        );
        assert_eq!(
            resolve_default_screen(
                Some(&session(UserRole::Conferente, &[])),
                NavigationStrategy::LegacyPreRouting
            ),
            Screen::Conference
        );
        assert_eq!(
            resolve_default_screen(
                Some(&session(UserRole::Embarque, &[])),
                NavigationStrategy::LegacyPreRouting
            ),
            Screen::Shipment
        );
        assert_eq!(
            resolve_default_screen(
                Some(&session(UserRole::Admin, &[])),
                NavigationStrategy::LegacyPreRouting
            ),
            Screen::Menu
        );
    }
}
