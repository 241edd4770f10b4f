use contracts::domain::m003_purchase_requisition::PurchaseRequisition;
use contracts::workflow::session::SessionContext;

use crate::system::auth::api::fetch_with_user;

/// Open purchase requisitions from the R2D consultation endpoint.
pub async fn fetch_open_requisitions(
    session: &SessionContext,
) -> Result<Vec<PurchaseRequisition>, String> {
    fetch_with_user("/api/R2D/consulta", session).await
}
