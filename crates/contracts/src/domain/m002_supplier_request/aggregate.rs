use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::workflow::approval::ApprovalStatus;

/// A supplier registration request going through the approval pipeline.
///
/// The backend persists the approval state as a bare integer; it stays raw
/// here so an unknown code cannot fail the whole list payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierRequest {
    pub id: Uuid,
    pub supplier_name: String,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub requester: Option<String>,
    #[serde(default)]
    pub form_type: Option<String>,
    pub status: u8,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl SupplierRequest {
    pub fn approval_status(&self) -> Option<ApprovalStatus> {
        ApprovalStatus::from_code(self.status)
    }

    /// Label for the status column; unknown codes show as such instead of
    /// breaking the row.
    pub fn status_label(&self) -> &'static str {
        self.approval_status()
            .map(|s| s.label())
            .unwrap_or("Desconhecido")
    }

    pub fn status_css_class(&self) -> &'static str {
        self.approval_status().map(|s| s.css_class()).unwrap_or("")
    }
}

/// Payload for registering a new supplier request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSupplierRequestDto {
    pub supplier_name: String,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub form_type: String,
}

/// Payload for moving a request to a new approval state. Carries the raw
/// code; the backend re-validates the transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequestStatusDto {
    pub status: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_code_degrades() {
        let request: SupplierRequest = serde_json::from_str(
            r#"{
                "id": "0f8d5b9e-6f0a-4f4d-9d3d-2c7a8f1e5a10",
                "supplier_name": "Metalúrgica Andrade LTDA",
                "status": 9
            }"#,
        )
        .unwrap();

        assert_eq!(request.approval_status(), None);
        assert_eq!(request.status_label(), "Desconhecido");
        assert_eq!(request.status_css_class(), "");
    }

    #[test]
    fn test_status_accessors() {
        let request: SupplierRequest = serde_json::from_str(
            r#"{
                "id": "0f8d5b9e-6f0a-4f4d-9d3d-2c7a8f1e5a10",
                "supplier_name": "Metalúrgica Andrade LTDA",
                "status": 3
            }"#,
        )
        .unwrap();

        assert_eq!(request.approval_status(), Some(ApprovalStatus::CoordinatorVerified));
        assert_eq!(request.status_label(), "Verificado por Coordenador");
        assert_eq!(request.status_css_class(), "status-review");
    }
}
