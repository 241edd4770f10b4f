use super::screen::Screen;

/// Ordered classification table for the backend's free-text movement status
/// labels. First match wins, so the more specific labels must come before
/// the generic ones ("AGUARDANDO CONFERÊNCIA BASE" would otherwise be
/// swallowed by the "CONFERÊNCIA" rule). A label change is a one-line edit
/// here.
const STATUS_RULES: &[(&str, Screen)] = &[
    ("AGUARDANDO CONFERÊNCIA BASE", Screen::Disembarkation),
    ("CONFERÊNCIA", Screen::Conference),
    ("QUARENTENA", Screen::Quarantine),
    ("LOM", Screen::PendingLom),
    ("ENVIADO PARA EMBARQUE", Screen::Shipment),
];

/// Classifies a movement status label into the stage screen the record
/// belongs to.
///
/// Total over all strings: an unrecognized label yields `None`, which callers
/// treat as "stay on the current screen".
pub fn resolve_screen_for_status(status: &str) -> Option<Screen> {
    let normalized = status.trim().to_uppercase();
    STATUS_RULES
        .iter()
        .find(|(needle, _)| normalized.contains(needle))
        .map(|(_, screen)| *screen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_labels() {
        assert_eq!(
            resolve_screen_for_status("Aguardando Conferência Base"),
            Some(Screen::Disembarkation)
        );
        assert_eq!(
            resolve_screen_for_status("Aguardando Conferência"),
            Some(Screen::Conference)
        );
        assert_eq!(
            resolve_screen_for_status("Quarentena"),
            Some(Screen::Quarantine)
        );
        assert_eq!(
            resolve_screen_for_status("Aguardando LOM"),
            Some(Screen::PendingLom)
        );
        assert_eq!(
            resolve_screen_for_status("Enviado para Embarque"),
            Some(Screen::Shipment)
        );
    }

    #[test]
    fn test_base_conference_takes_priority() {
        // Contains both the "BASE" label and the plain "CONFERÊNCIA"
        // substring; rule 1 must win.
        assert_eq!(
            resolve_screen_for_status("AGUARDANDO CONFERÊNCIA BASE"),
            Some(Screen::Disembarkation)
        );
        assert_eq!(
            resolve_screen_for_status("item em aguardando conferência base"),
            Some(Screen::Disembarkation)
        );
    }

    #[test]
    fn test_normalization() {
        assert_eq!(
            resolve_screen_for_status("  enviado para embarque  "),
            Some(Screen::Shipment)
        );
        assert_eq!(
            resolve_screen_for_status("quarentena - aguardando análise"),
            Some(Screen::Quarantine)
        );
    }

    #[test]
    fn test_unmatched_is_none_not_error() {
        assert_eq!(resolve_screen_for_status(""), None);
        assert_eq!(resolve_screen_for_status("Concluído"), None);
        assert_eq!(resolve_screen_for_status("qualquer texto aleatório 123"), None);
        assert_eq!(resolve_screen_for_status("\u{0} \u{7f} ✓"), None);
    }
}
