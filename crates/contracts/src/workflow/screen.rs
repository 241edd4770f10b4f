use serde::{Deserialize, Serialize};

/// Every navigable screen of the application.
///
/// Transfer stages come in a list/detail pair: the base screen shows the
/// stage queue, the `*Transfer` variant is the stage's confirmation view for
/// a single record. The supplier-registration screens belong to the legacy
/// pre-routing flow and are landing targets only there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Login,
    Menu,
    Disembarkation,
    DisembarkationTransfer,
    Conference,
    ConferenceTransfer,
    Quarantine,
    QuarantineTransfer,
    PendingLom,
    PendingLomTransfer,
    Shipment,
    ShipmentTransfer,
    StatusInquiry,
    PurchaseRequisitionInquiry,
    AnalyticsDashboard,
    MaterialForm,
    ServiceForm,
    MaterialServiceForm,
    InternalRegistration,
    SupplierList,
    Approval,
}

impl Screen {
    /// Stable key used in the `?screen=` query parameter.
    pub fn key(&self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Menu => "menu",
            Screen::Disembarkation => "desembarque",
            Screen::DisembarkationTransfer => "desembarque_transfer",
            Screen::Conference => "conferencia",
            Screen::ConferenceTransfer => "conferencia_transfer",
            Screen::Quarantine => "quarentena",
            Screen::QuarantineTransfer => "quarentena_transfer",
            Screen::PendingLom => "lom",
            Screen::PendingLomTransfer => "lom_transfer",
            Screen::Shipment => "embarque",
            Screen::ShipmentTransfer => "embarque_transfer",
            Screen::StatusInquiry => "desembarque_consulta",
            Screen::PurchaseRequisitionInquiry => "purchase_requisitions",
            Screen::AnalyticsDashboard => "dashboard",
            Screen::MaterialForm => "supplier_forms",
            Screen::ServiceForm => "supplier_forms_s",
            Screen::MaterialServiceForm => "supplier_forms_ms",
            Screen::InternalRegistration => "cadastro_fornecedor",
            Screen::SupplierList => "suppliers",
            Screen::Approval => "aprovacao",
        }
    }

    /// Route path, matched against per-user path allow-lists.
    pub fn path(&self) -> &'static str {
        match self {
            Screen::Login => "/login",
            Screen::Menu => "/menu",
            Screen::Disembarkation => "/desembarque",
            Screen::DisembarkationTransfer => "/desembarque_transfer",
            Screen::Conference => "/conferencia",
            Screen::ConferenceTransfer => "/conferencia_transfer",
            Screen::Quarantine => "/quarentena",
            Screen::QuarantineTransfer => "/quarentena_transfer",
            Screen::PendingLom => "/lom",
            Screen::PendingLomTransfer => "/lom_transfer",
            Screen::Shipment => "/embarque",
            Screen::ShipmentTransfer => "/embarque_transfer",
            Screen::StatusInquiry => "/desembarque_consulta",
            Screen::PurchaseRequisitionInquiry => "/purchase-requisitions",
            Screen::AnalyticsDashboard => "/dashboard",
            Screen::MaterialForm => "/supplierForms",
            Screen::ServiceForm => "/supplierFormsS",
            Screen::MaterialServiceForm => "/supplierFormsMS",
            Screen::InternalRegistration => "/cadastro-fornecedor",
            Screen::SupplierList => "/suppliers",
            Screen::Approval => "/aprovacao",
        }
    }

    /// Screen title as shown in menu cards and page headers.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Menu => "Menu",
            Screen::Disembarkation => "Desembarque",
            Screen::DisembarkationTransfer => "Transferência de Desembarque",
            Screen::Conference => "Conferência",
            Screen::ConferenceTransfer => "Transferência de Conferência",
            Screen::Quarantine => "Quarentena",
            Screen::QuarantineTransfer => "Transferência de Quarentena",
            Screen::PendingLom => "LOM Pendente",
            Screen::PendingLomTransfer => "Transferência de LOM",
            Screen::Shipment => "Embarque",
            Screen::ShipmentTransfer => "Transferência de Embarque",
            Screen::StatusInquiry => "Consulta Status Transferência",
            Screen::PurchaseRequisitionInquiry => "Consulta de Requisições de Compras em Aberto",
            Screen::AnalyticsDashboard => "Analítico",
            Screen::MaterialForm => "Cadastro de Fornecedor - Material",
            Screen::ServiceForm => "Cadastro de Fornecedor - Serviço",
            Screen::MaterialServiceForm => "Cadastro de Fornecedor - Material e Serviço",
            Screen::InternalRegistration => "Cadastro Interno de Fornecedor",
            Screen::SupplierList => "Fornecedores",
            Screen::Approval => "Aprovação",
        }
    }

    /// Short description shown under the title on menu cards.
    pub fn subtitle(&self) -> &'static str {
        match self {
            Screen::Disembarkation => "Análise de itens para Desembarque",
            Screen::Conference => "Conferência de Recebimento Base",
            Screen::Shipment => "Gestão de Embarque",
            Screen::StatusInquiry => "Consulta de movimentações",
            Screen::PurchaseRequisitionInquiry => "Purchase Requisitions",
            Screen::AnalyticsDashboard => "Dashboard & Relatórios",
            Screen::Quarantine => "Itens retidos em Quarentena",
            Screen::PendingLom => "Itens aguardando LOM",
            Screen::SupplierList => "Solicitações de cadastro",
            _ => "",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|screen| screen.key() == key)
    }

    pub fn all() -> Vec<Screen> {
        vec![
            Screen::Login,
            Screen::Menu,
            Screen::Disembarkation,
            Screen::DisembarkationTransfer,
            Screen::Conference,
            Screen::ConferenceTransfer,
            Screen::Quarantine,
            Screen::QuarantineTransfer,
            Screen::PendingLom,
            Screen::PendingLomTransfer,
            Screen::Shipment,
            Screen::ShipmentTransfer,
            Screen::StatusInquiry,
            Screen::PurchaseRequisitionInquiry,
            Screen::AnalyticsDashboard,
            Screen::MaterialForm,
            Screen::ServiceForm,
            Screen::MaterialServiceForm,
            Screen::InternalRegistration,
            Screen::SupplierList,
            Screen::Approval,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for screen in Screen::all() {
            assert_eq!(Screen::from_key(screen.key()), Some(screen));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(Screen::from_key("nao_existe"), None);
        assert_eq!(Screen::from_key(""), None);
    }

    #[test]
    fn test_keys_are_unique() {
        let mut keys: Vec<&str> = Screen::all().iter().map(|s| s.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), Screen::all().len());
    }
}
