use serde::{Deserialize, Serialize};

use crate::workflow::screen::Screen;
use crate::workflow::status_routing::resolve_screen_for_status;

/// One line item moving between two vessels/departments.
///
/// Owned and persisted by the backend; the client holds read-derived copies
/// for the duration of a page view. The wire field names are the backend's
/// bilingual column labels, kept verbatim so list payloads bind directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementRecord {
    pub id: i64,
    #[serde(rename = "FromVessel_NavioOrigem", default)]
    pub from_vessel: String,
    #[serde(rename = "ToVessel_NavioDestino", default)]
    pub to_vessel: String,
    #[serde(rename = "FromDepartment_DepartamentoOrigem", default)]
    pub from_department: Option<String>,
    #[serde(rename = "ToDepartment_DepartamentoDestino", default)]
    pub to_department: Option<String>,
    #[serde(rename = "SPN", default)]
    pub spn: String,
    #[serde(rename = "ItemDescription_DescricaoItem", default)]
    pub item_description: String,
    #[serde(rename = "PRNumberTMMaster_NumeroPRTMMaster", default)]
    pub pr_number_tm_master: Option<String>,
    #[serde(rename = "OraclePRNumber_NumeroPROracle", default)]
    pub oracle_pr_number: Option<String>,
    #[serde(rename = "QuantityToBeTransferred_QuantidadeATransferir", default)]
    pub quantity_to_transfer: Option<String>,
    #[serde(rename = "UnitValue_USD_ValorUnitario_USD", default)]
    pub unit_value_usd: Option<String>,
    #[serde(rename = "TotalAmount_USD_ValorTotal_USD", default)]
    pub total_amount_usd: Option<String>,
    #[serde(rename = "desembarque_quantidade_conferida", default)]
    pub conferred_quantity: Option<String>,
    #[serde(rename = "embarque_quantidade_enviada", default)]
    pub shipped_quantity: Option<String>,
    /// Free-text stage label, mutated server-side at each confirmation.
    #[serde(default)]
    pub status_movimentacao: Option<String>,
    /// Final status shown on conference-style listings.
    #[serde(default)]
    pub status_final: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub data_insercao: Option<String>,
}

impl MovementRecord {
    /// Effective status label: the movement status when present, the final
    /// status otherwise.
    pub fn status(&self) -> &str {
        self.status_movimentacao
            .as_deref()
            .or(self.status_final.as_deref())
            .unwrap_or("")
    }

    /// Stage screen this record routes to, per its current status. `None`
    /// means the record stays where it is.
    pub fn next_screen(&self) -> Option<Screen> {
        resolve_screen_for_status(self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binds_backend_payload() {
        let record: MovementRecord = serde_json::from_str(
            r#"{
                "id": 42,
                "FromVessel_NavioOrigem": "Seagems I",
                "ToVessel_NavioDestino": "Seagems II",
                "SPN": "SPN-0042",
                "ItemDescription_DescricaoItem": "Válvula de esfera 2\"",
                "QuantityToBeTransferred_QuantidadeATransferir": "4",
                "status_movimentacao": "Enviado para Embarque"
            }"#,
        )
        .unwrap();

        assert_eq!(record.id, 42);
        assert_eq!(record.spn, "SPN-0042");
        assert_eq!(record.status(), "Enviado para Embarque");
        assert_eq!(record.next_screen(), Some(Screen::Shipment));
    }

    #[test]
    fn test_status_fallback_and_unknown() {
        let record: MovementRecord = serde_json::from_str(
            r#"{"id": 1, "status_final": "Concluído"}"#,
        )
        .unwrap();
        assert_eq!(record.status(), "Concluído");
        assert_eq!(record.next_screen(), None);

        let record: MovementRecord = serde_json::from_str(r#"{"id": 2}"#).unwrap();
        assert_eq!(record.status(), "");
        assert_eq!(record.next_screen(), None);
    }
}
