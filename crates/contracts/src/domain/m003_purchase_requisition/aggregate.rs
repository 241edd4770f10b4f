use serde::{Deserialize, Serialize};

/// Open purchase requisition row from the R2D consultation endpoint.
///
/// Read-only on the client; the inquiry screen only lists and filters these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequisition {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "SPN", default)]
    pub spn: String,
    #[serde(rename = "PR_TM_MASTER_REQUISIÇÃO_DE_COMPRA_NO_TM_MASTER", default)]
    pub pr_tm_master: Option<String>,
    #[serde(rename = "PR_ORACLE_REQUISIÇÃO_DE_COMPRA_NO_ORACLE", default)]
    pub pr_oracle: Option<String>,
    #[serde(rename = "NUMERO_PO", default)]
    pub po_number: Option<String>,
    #[serde(rename = "DEPARTMENT", default)]
    pub department: Option<String>,
    #[serde(rename = "UNIDADE_OPERACIONAL_PR", default)]
    pub operational_unit: Option<String>,
    #[serde(rename = "DESCRICAO_ITEM_PTB", default)]
    pub item_description_ptb: Option<String>,
    #[serde(rename = "DESCRICAO_ITEM_US", default)]
    pub item_description_us: Option<String>,
    #[serde(rename = "PRIORIDADE_COMPRA", default)]
    pub purchase_priority: Option<String>,
    #[serde(rename = "DATA_NECESSARIA_PR", default)]
    pub required_date: Option<String>,
    #[serde(rename = "STATUS_PR", default)]
    pub pr_status: Option<String>,
    #[serde(rename = "STATUS_APROVACAO_PO", default)]
    pub po_approval_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binds_r2d_payload() {
        let requisition: PurchaseRequisition = serde_json::from_str(
            r#"{
                "ID": "R2D-881",
                "SPN": "SPN-1204",
                "PR_TM_MASTER_REQUISIÇÃO_DE_COMPRA_NO_TM_MASTER": "PR-3301",
                "DEPARTMENT": "DECK",
                "STATUS_PR": "EM ABERTO"
            }"#,
        )
        .unwrap();

        assert_eq!(requisition.id, "R2D-881");
        assert_eq!(requisition.pr_tm_master.as_deref(), Some("PR-3301"));
        assert_eq!(requisition.pr_status.as_deref(), Some("EM ABERTO"));
        assert!(requisition.po_number.is_none());
    }
}
