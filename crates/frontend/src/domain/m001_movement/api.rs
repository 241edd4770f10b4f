use contracts::domain::m001_movement::MovementRecord;
use contracts::workflow::screen::Screen;
use contracts::workflow::session::SessionContext;

use crate::system::auth::api::fetch_with_user;

/// Backend list endpoint for a stage screen. Transfer variants read the same
/// queue as their list screen.
fn stage_endpoint(screen: Screen) -> Option<&'static str> {
    match screen {
        Screen::Disembarkation | Screen::DisembarkationTransfer => Some("/api/desembarque"),
        Screen::Conference | Screen::ConferenceTransfer => Some("/api/conferencia"),
        Screen::Quarantine | Screen::QuarantineTransfer => Some("/api/quarentena"),
        Screen::PendingLom | Screen::PendingLomTransfer => Some("/api/lom"),
        Screen::Shipment | Screen::ShipmentTransfer => Some("/api/embarque"),
        _ => None,
    }
}

/// Records currently queued in a stage.
pub async fn fetch_stage_records(
    screen: Screen,
    session: &SessionContext,
) -> Result<Vec<MovementRecord>, String> {
    let Some(endpoint) = stage_endpoint(screen) else {
        return Err(format!(
            "'{}' não é uma etapa de transferência",
            screen.key()
        ));
    };
    fetch_with_user(endpoint, session).await
}

/// Cross-stage consultation list used by the status inquiry screen.
pub async fn fetch_status_inquiry(
    session: &SessionContext,
) -> Result<Vec<MovementRecord>, String> {
    fetch_with_user("/api/desembarque/consulta", session).await
}
