use once_cell::sync::Lazy;

use crate::enums::UserRole;

use super::screen::Screen;
use super::session::SessionContext;

const ADMIN_ONLY: &[UserRole] = &[UserRole::Admin];
const DISEMBARKATION_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Desembarque];
const CONFERENCE_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Conferente];
const SHIPMENT_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Embarque];
const ALL_STAGE_ROLES: &[UserRole] = &[
    UserRole::Admin,
    UserRole::Desembarque,
    UserRole::Conferente,
    UserRole::Embarque,
];

/// Groups that open the supplier approval screens in addition to the role
/// table.
const APPROVAL_GROUPS: &[&str] = &["VDF_COORDINATOR", "VDF_MANAGER", "VDF_ADMIN"];

/// Static screen ↔ role table. Fixed at build time, never mutated.
pub fn authorized_roles(screen: Screen) -> &'static [UserRole] {
    match screen {
        Screen::Login | Screen::Menu | Screen::StatusInquiry | Screen::PurchaseRequisitionInquiry => {
            ALL_STAGE_ROLES
        }
        Screen::Disembarkation | Screen::DisembarkationTransfer => DISEMBARKATION_ROLES,
        Screen::Conference
        | Screen::ConferenceTransfer
        | Screen::Quarantine
        | Screen::QuarantineTransfer
        | Screen::PendingLom
        | Screen::PendingLomTransfer => CONFERENCE_ROLES,
        Screen::Shipment | Screen::ShipmentTransfer => SHIPMENT_ROLES,
        Screen::AnalyticsDashboard => ADMIN_ONLY,
        Screen::MaterialForm
        | Screen::ServiceForm
        | Screen::MaterialServiceForm
        | Screen::InternalRegistration => ALL_STAGE_ROLES,
        Screen::SupplierList | Screen::Approval => ALL_STAGE_ROLES,
    }
}

/// Whether this screen additionally requires an approval group membership.
fn requires_approval_group(screen: Screen) -> bool {
    matches!(screen, Screen::SupplierList | Screen::Approval)
}

/// Decides whether the session may view `screen`.
///
/// `Admin` passes everything. Otherwise the role must be in the screen's
/// static set and, when both `current_path` and a non-"ALL" allow-list are
/// present, the path must clear the allow-list too. Denials are surfaced by
/// the caller as a redirect to the session's default landing screen, never as
/// an error.
pub fn is_authorized(session: &SessionContext, screen: Screen, current_path: Option<&str>) -> bool {
    if screen == Screen::Login {
        return true;
    }
    if session.is_admin() {
        return true;
    }
    if session.role == UserRole::NoAccess {
        return false;
    }
    if !authorized_roles(screen).contains(&session.role) {
        return false;
    }
    if requires_approval_group(screen)
        && !APPROVAL_GROUPS.iter().any(|group| session.has_group(group))
    {
        return false;
    }
    if let (Some(allowed), Some(path)) = (&session.allowed_paths, current_path) {
        if !allowed.allows(path) {
            return false;
        }
    }
    true
}

/// Screens this session may navigate to; feeds the menu layer. The login
/// screen is public and therefore not listed.
pub fn authorized_screens(session: &SessionContext) -> Vec<Screen> {
    Screen::all()
        .into_iter()
        .filter(|screen| *screen != Screen::Login && is_authorized(session, *screen, None))
        .collect()
}

/// One card on the menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub screen: Screen,
    pub icon: &'static str,
    roles: &'static [UserRole],
}

impl MenuEntry {
    pub fn title(&self) -> &'static str {
        self.screen.title()
    }

    pub fn subtitle(&self) -> &'static str {
        self.screen.subtitle()
    }
}

// The menu lists the purchase requisition inquiry only for the
// disembarkation crew even though the route itself admits every stage role.
static MENU: Lazy<Vec<MenuEntry>> = Lazy::new(|| {
    vec![
        MenuEntry {
            screen: Screen::Disembarkation,
            icon: "⚓",
            roles: DISEMBARKATION_ROLES,
        },
        MenuEntry {
            screen: Screen::Conference,
            icon: "📦",
            roles: CONFERENCE_ROLES,
        },
        MenuEntry {
            screen: Screen::Shipment,
            icon: "🚢",
            roles: SHIPMENT_ROLES,
        },
        MenuEntry {
            screen: Screen::StatusInquiry,
            icon: "🔎",
            roles: ALL_STAGE_ROLES,
        },
        MenuEntry {
            screen: Screen::PurchaseRequisitionInquiry,
            icon: "📄",
            roles: DISEMBARKATION_ROLES,
        },
        MenuEntry {
            screen: Screen::AnalyticsDashboard,
            icon: "📈",
            roles: ADMIN_ONLY,
        },
    ]
});

/// Menu cards visible to this session, in display order.
pub fn menu_entries(session: &SessionContext) -> Vec<MenuEntry> {
    MENU.iter()
        .filter(|entry| session.is_admin() || entry.roles.contains(&session.role))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::AllowedPaths;

    fn session(role: UserRole) -> SessionContext {
        SessionContext {
            username: "joao.lima".to_string(),
            role,
            groups: Vec::new(),
            allowed_paths: None,
            form_type: None,
            ou: None,
        }
    }

    /// Expected authorized set for a groupless, override-free session.
    fn expected_screens(role: UserRole) -> Vec<Screen> {
        Screen::all()
            .into_iter()
            .filter(|screen| match screen {
                Screen::Login => false,
                // group-gated regardless of role
                Screen::SupplierList | Screen::Approval => false,
                _ => authorized_roles(*screen).contains(&role),
            })
            .collect()
    }

    #[test]
    fn test_admin_is_authorized_everywhere() {
        let admin = session(UserRole::Admin);
        for screen in Screen::all() {
            assert!(is_authorized(&admin, screen, Some(screen.path())));
        }
    }

    #[test]
    fn test_role_matrix_matches_static_table() {
        for role in [UserRole::Desembarque, UserRole::Conferente, UserRole::Embarque] {
            let s = session(role);
            let expected = expected_screens(role);
            for screen in Screen::all() {
                if screen == Screen::Login {
                    continue;
                }
                assert_eq!(
                    is_authorized(&s, screen, None),
                    expected.contains(&screen),
                    "role {:?} on screen {:?}",
                    role,
                    screen
                );
            }
        }
    }

    #[test]
    fn test_no_access_sees_nothing_but_login() {
        let s = session(UserRole::NoAccess);
        for screen in Screen::all() {
            assert_eq!(is_authorized(&s, screen, None), screen == Screen::Login);
        }
        assert!(authorized_screens(&s).is_empty());
    }

    #[test]
    fn test_conferente_denied_shipment_redirects_to_conference() {
        use crate::workflow::landing::default_screen_for_role;

        let s = session(UserRole::Conferente);
        assert!(!is_authorized(&s, Screen::Shipment, None));
        assert_eq!(default_screen_for_role(s.role), Screen::Conference);
    }

    #[test]
    fn test_approval_screens_need_group() {
        let mut s = session(UserRole::Conferente);
        assert!(!is_authorized(&s, Screen::SupplierList, None));

        s.groups = vec!["VDF_COORDINATOR".to_string()];
        assert!(is_authorized(&s, Screen::SupplierList, None));
        assert!(is_authorized(&s, Screen::Approval, None));
    }

    #[test]
    fn test_allow_list_restricts_paths() {
        let mut s = session(UserRole::Conferente);
        s.allowed_paths = Some(AllowedPaths::Paths(vec!["conferencia".to_string()]));

        assert!(is_authorized(&s, Screen::Conference, Some(Screen::Conference.path())));
        // role allows quarantine, but the per-user list does not
        assert!(!is_authorized(&s, Screen::Quarantine, Some(Screen::Quarantine.path())));
        // without a path to compare the role table alone decides
        assert!(is_authorized(&s, Screen::Quarantine, None));

        s.allowed_paths = Some(AllowedPaths::Sentinel("ALL".to_string()));
        assert!(is_authorized(&s, Screen::Quarantine, Some(Screen::Quarantine.path())));
    }

    #[test]
    fn test_menu_entries_per_role() {
        let admin_menu = menu_entries(&session(UserRole::Admin));
        assert_eq!(admin_menu.len(), 6);

        let conferente_menu: Vec<Screen> = menu_entries(&session(UserRole::Conferente))
            .iter()
            .map(|e| e.screen)
            .collect();
        assert_eq!(conferente_menu, vec![Screen::Conference, Screen::StatusInquiry]);

        // route table admits every stage role, menu narrows to desembarque
        let embarque_menu: Vec<Screen> = menu_entries(&session(UserRole::Embarque))
            .iter()
            .map(|e| e.screen)
            .collect();
        assert!(!embarque_menu.contains(&Screen::PurchaseRequisitionInquiry));
        assert!(embarque_menu.contains(&Screen::Shipment));
    }
}
