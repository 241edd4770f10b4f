use contracts::domain::m002_supplier_request::{
    CreateSupplierRequestDto, SupplierRequest, UpdateRequestStatusDto,
};
use contracts::workflow::approval::ApprovalStatus;
use contracts::workflow::session::SessionContext;
use uuid::Uuid;

use crate::system::auth::api::{fetch_with_user, post_with_user};

pub async fn fetch_supplier_requests(
    session: &SessionContext,
) -> Result<Vec<SupplierRequest>, String> {
    fetch_with_user("/api/solicitacoes", session).await
}

pub async fn fetch_supplier_request(
    session: &SessionContext,
    id: Uuid,
) -> Result<SupplierRequest, String> {
    fetch_with_user(&format!("/api/solicitacoes/{}", id), session).await
}

/// Moves a request to `status`. The backend re-validates the transition and
/// answers with the stored record.
pub async fn update_request_status(
    session: &SessionContext,
    id: Uuid,
    status: ApprovalStatus,
) -> Result<SupplierRequest, String> {
    let body = UpdateRequestStatusDto {
        status: status.code(),
    };
    post_with_user(&format!("/api/solicitacoes/{}/status", id), session, &body).await
}

pub async fn create_supplier_request(
    session: &SessionContext,
    dto: &CreateSupplierRequestDto,
) -> Result<SupplierRequest, String> {
    post_with_user("/api/solicitacoes", session, dto).await
}
