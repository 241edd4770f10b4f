/// Approval pipeline for supplier registration requests.
///
/// The backend stores the state as a bare integer; the happy path is
/// `Pending → CoordinatorVerified → ManagerApproved → Completed`, with the
/// coordinator closing the loop, plus a manager-initiated return leg through
/// `BackToCoordinator`. `Rejected` is terminal from any live state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApprovalStatus {
    Pending,
    ManagerApproved,
    Rejected,
    CoordinatorVerified,
    BackToCoordinator,
    Completed,
}

impl ApprovalStatus {
    /// Numeric wire code. The numbering is historical; ordering carries no
    /// meaning.
    pub fn code(&self) -> u8 {
        match self {
            ApprovalStatus::Pending => 0,
            ApprovalStatus::ManagerApproved => 1,
            ApprovalStatus::Rejected => 2,
            ApprovalStatus::CoordinatorVerified => 3,
            ApprovalStatus::BackToCoordinator => 4,
            ApprovalStatus::Completed => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ApprovalStatus::Pending),
            1 => Some(ApprovalStatus::ManagerApproved),
            2 => Some(ApprovalStatus::Rejected),
            3 => Some(ApprovalStatus::CoordinatorVerified),
            4 => Some(ApprovalStatus::BackToCoordinator),
            5 => Some(ApprovalStatus::Completed),
            _ => None,
        }
    }

    pub fn all() -> Vec<ApprovalStatus> {
        vec![
            ApprovalStatus::Pending,
            ApprovalStatus::ManagerApproved,
            ApprovalStatus::Rejected,
            ApprovalStatus::CoordinatorVerified,
            ApprovalStatus::BackToCoordinator,
            ApprovalStatus::Completed,
        ]
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ApprovalStatus::Completed | ApprovalStatus::Rejected)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pendente",
            ApprovalStatus::ManagerApproved => "Aguardando Cadastro",
            ApprovalStatus::Rejected => "Reprovado",
            ApprovalStatus::CoordinatorVerified => "Verificado por Coordenador",
            ApprovalStatus::BackToCoordinator => "Retornado para Coordenador",
            ApprovalStatus::Completed => "Concluído",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "status-pending",
            ApprovalStatus::ManagerApproved => "status-approved",
            ApprovalStatus::Rejected => "status-rejected",
            ApprovalStatus::CoordinatorVerified => "status-review",
            ApprovalStatus::BackToCoordinator => "status-back-to-review",
            ApprovalStatus::Completed => "status-completed",
        }
    }

    /// Slug used by the requisition listing endpoints.
    pub fn to_requisition_slug(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pendente",
            ApprovalStatus::ManagerApproved => "aprovado",
            ApprovalStatus::Rejected => "reprovado",
            ApprovalStatus::CoordinatorVerified | ApprovalStatus::BackToCoordinator => "em_revisao",
            ApprovalStatus::Completed => "concluido",
        }
    }

    /// Inverse of [`to_requisition_slug`]. The return leg shares the
    /// `em_revisao` slug, which maps back to `CoordinatorVerified`.
    pub fn from_requisition_slug(slug: &str) -> Option<Self> {
        match slug {
            "pendente" => Some(ApprovalStatus::Pending),
            "em_revisao" => Some(ApprovalStatus::CoordinatorVerified),
            "aprovado" => Some(ApprovalStatus::ManagerApproved),
            "concluido" => Some(ApprovalStatus::Completed),
            "reprovado" => Some(ApprovalStatus::Rejected),
            _ => None,
        }
    }
}

/// Who is acting on a request. Derived from group membership, coordinator
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalActor {
    Coordinator,
    Manager,
}

impl ApprovalActor {
    pub fn from_groups(groups: &[String]) -> Option<Self> {
        if groups.iter().any(|g| g == "VDF_COORDINATOR") {
            Some(ApprovalActor::Coordinator)
        } else if groups.iter().any(|g| g == "VDF_MANAGER") {
            Some(ApprovalActor::Manager)
        } else {
            None
        }
    }
}

/// Whether `actor` may advance a request currently in `state`.
pub fn can_approve(actor: ApprovalActor, state: ApprovalStatus) -> bool {
    match actor {
        ApprovalActor::Coordinator => matches!(
            state,
            ApprovalStatus::Pending
                | ApprovalStatus::BackToCoordinator
                | ApprovalStatus::ManagerApproved
        ),
        ApprovalActor::Manager => state == ApprovalStatus::CoordinatorVerified,
    }
}

/// Whether `actor` may reject a request currently in `state`. Terminal
/// states cannot be rejected by anyone.
pub fn can_reject(actor: ApprovalActor, state: ApprovalStatus) -> bool {
    if state.is_terminal() {
        return false;
    }
    match actor {
        ApprovalActor::Coordinator => matches!(
            state,
            ApprovalStatus::Pending
                | ApprovalStatus::CoordinatorVerified
                | ApprovalStatus::BackToCoordinator
        ),
        ApprovalActor::Manager => matches!(
            state,
            ApprovalStatus::CoordinatorVerified | ApprovalStatus::ManagerApproved
        ),
    }
}

/// Advances the state along the approval path.
///
/// Any (actor, state) pair outside the transition table is a no-op returning
/// the input state unchanged; the UI renders such actions disabled instead of
/// the router erroring.
pub fn next_state(actor: ApprovalActor, state: ApprovalStatus) -> ApprovalStatus {
    match (actor, state) {
        (ApprovalActor::Coordinator, ApprovalStatus::Pending) => ApprovalStatus::CoordinatorVerified,
        (ApprovalActor::Coordinator, ApprovalStatus::BackToCoordinator) => ApprovalStatus::Completed,
        (ApprovalActor::Coordinator, ApprovalStatus::ManagerApproved) => ApprovalStatus::Completed,
        (ApprovalActor::Manager, ApprovalStatus::CoordinatorVerified) => {
            ApprovalStatus::ManagerApproved
        }
        (_, unchanged) => unchanged,
    }
}

/// One-way transition to `Rejected`; `None` when the actor may not reject
/// from `state`.
pub fn reject(actor: ApprovalActor, state: ApprovalStatus) -> Option<ApprovalStatus> {
    can_reject(actor, state).then_some(ApprovalStatus::Rejected)
}

/// Caption for the advance button as seen by `actor` on `state`.
pub fn approval_button_label(actor: ApprovalActor, state: ApprovalStatus) -> &'static str {
    match (actor, state) {
        (ApprovalActor::Coordinator, ApprovalStatus::Pending) => "Verificar",
        (ApprovalActor::Coordinator, ApprovalStatus::BackToCoordinator) => "Concluir",
        (ApprovalActor::Coordinator, ApprovalStatus::ManagerApproved) => "Confirmar Cadastro",
        (ApprovalActor::Coordinator, ApprovalStatus::CoordinatorVerified) => {
            "Aguardar Aprovação da Gerência"
        }
        _ => "Aprovar",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTORS: [ApprovalActor; 2] = [ApprovalActor::Coordinator, ApprovalActor::Manager];

    #[test]
    fn test_code_round_trip() {
        for state in ApprovalStatus::all() {
            assert_eq!(ApprovalStatus::from_code(state.code()), Some(state));
        }
        assert_eq!(ApprovalStatus::from_code(6), None);
        assert_eq!(ApprovalStatus::from_code(255), None);
    }

    #[test]
    fn test_happy_path() {
        let s = ApprovalStatus::Pending;
        assert!(can_approve(ApprovalActor::Coordinator, s));
        let s = next_state(ApprovalActor::Coordinator, s);
        assert_eq!(s, ApprovalStatus::CoordinatorVerified);

        assert!(can_approve(ApprovalActor::Manager, s));
        let s = next_state(ApprovalActor::Manager, s);
        assert_eq!(s, ApprovalStatus::ManagerApproved);

        assert!(can_approve(ApprovalActor::Coordinator, s));
        let s = next_state(ApprovalActor::Coordinator, s);
        assert_eq!(s, ApprovalStatus::Completed);
    }

    #[test]
    fn test_return_leg() {
        assert_eq!(
            next_state(ApprovalActor::Coordinator, ApprovalStatus::BackToCoordinator),
            ApprovalStatus::Completed
        );
    }

    #[test]
    fn test_next_state_is_noop_outside_table() {
        let table = [
            (ApprovalActor::Coordinator, ApprovalStatus::Pending),
            (ApprovalActor::Coordinator, ApprovalStatus::BackToCoordinator),
            (ApprovalActor::Coordinator, ApprovalStatus::ManagerApproved),
            (ApprovalActor::Manager, ApprovalStatus::CoordinatorVerified),
        ];
        for actor in ACTORS {
            for state in ApprovalStatus::all() {
                if table.contains(&(actor, state)) {
                    assert_ne!(next_state(actor, state), state);
                } else {
                    assert_eq!(next_state(actor, state), state, "{:?} on {:?}", actor, state);
                }
            }
        }
    }

    #[test]
    fn test_terminal_states_cannot_be_rejected() {
        for actor in ACTORS {
            assert!(!can_reject(actor, ApprovalStatus::Completed));
            assert!(!can_reject(actor, ApprovalStatus::Rejected));
            assert_eq!(reject(actor, ApprovalStatus::Completed), None);
            assert_eq!(reject(actor, ApprovalStatus::Rejected), None);
        }
    }

    #[test]
    fn test_reject_matrix() {
        assert!(can_reject(ApprovalActor::Coordinator, ApprovalStatus::Pending));
        assert!(can_reject(ApprovalActor::Coordinator, ApprovalStatus::CoordinatorVerified));
        assert!(can_reject(ApprovalActor::Coordinator, ApprovalStatus::BackToCoordinator));
        assert!(!can_reject(ApprovalActor::Coordinator, ApprovalStatus::ManagerApproved));

        assert!(can_reject(ApprovalActor::Manager, ApprovalStatus::CoordinatorVerified));
        assert!(can_reject(ApprovalActor::Manager, ApprovalStatus::ManagerApproved));
        assert!(!can_reject(ApprovalActor::Manager, ApprovalStatus::Pending));

        assert_eq!(
            reject(ApprovalActor::Manager, ApprovalStatus::ManagerApproved),
            Some(ApprovalStatus::Rejected)
        );
    }

    #[test]
    fn test_actor_from_groups() {
        let coordinator = vec!["VDF_COORDINATOR".to_string(), "VDF_MANAGER".to_string()];
        assert_eq!(
            ApprovalActor::from_groups(&coordinator),
            Some(ApprovalActor::Coordinator)
        );

        let manager = vec!["VDF_MANAGER".to_string()];
        assert_eq!(ApprovalActor::from_groups(&manager), Some(ApprovalActor::Manager));

        assert_eq!(ApprovalActor::from_groups(&[]), None);
    }

    #[test]
    fn test_slug_round_trip() {
        for state in ApprovalStatus::all() {
            let slug = state.to_requisition_slug();
            let back = ApprovalStatus::from_requisition_slug(slug).unwrap();
            // the shared em_revisao slug folds the return leg onto the
            // verified state
            if state == ApprovalStatus::BackToCoordinator {
                assert_eq!(back, ApprovalStatus::CoordinatorVerified);
            } else {
                assert_eq!(back, state);
            }
        }
        assert_eq!(ApprovalStatus::from_requisition_slug("desconhecido"), None);
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(
            approval_button_label(ApprovalActor::Coordinator, ApprovalStatus::Pending),
            "Verificar"
        );
        assert_eq!(
            approval_button_label(ApprovalActor::Manager, ApprovalStatus::CoordinatorVerified),
            "Aprovar"
        );
    }
}
