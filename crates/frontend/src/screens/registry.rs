//! Screen content registry - the single source of truth for mapping a
//! [`Screen`] to its view.
//!
//! Navigation decides *which* screen; this module decides *what it renders*.

use contracts::workflow::screen::Screen;
use leptos::prelude::*;

use crate::dashboards::overview::DashboardPage;
use crate::domain::m001_movement::ui::stage::MovementStagePage;
use crate::domain::m001_movement::ui::status_inquiry::StatusInquiryPage;
use crate::domain::m002_supplier_request::ui::approval::ApprovalPage;
use crate::domain::m002_supplier_request::ui::form::SupplierFormPage;
use crate::domain::m002_supplier_request::ui::list::SupplierListPage;
use crate::domain::m003_purchase_requisition::ui::PurchaseRequisitionsPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::menu::MenuPage;

/// Renders the content for `screen`.
///
/// The stage screens and their transfer variants share one generic page
/// parameterized by the screen itself; everything else has a dedicated view.
pub fn render_screen_content(screen: Screen) -> AnyView {
    match screen {
        Screen::Login => view! { <LoginPage /> }.into_any(),
        Screen::Menu => view! { <MenuPage /> }.into_any(),

        // Transfer stages, list + confirmation variants
        Screen::Disembarkation
        | Screen::DisembarkationTransfer
        | Screen::Conference
        | Screen::ConferenceTransfer
        | Screen::Quarantine
        | Screen::QuarantineTransfer
        | Screen::PendingLom
        | Screen::PendingLomTransfer
        | Screen::Shipment
        | Screen::ShipmentTransfer => view! { <MovementStagePage screen=screen /> }.into_any(),

        Screen::StatusInquiry => view! { <StatusInquiryPage /> }.into_any(),
        Screen::PurchaseRequisitionInquiry => view! { <PurchaseRequisitionsPage /> }.into_any(),
        Screen::AnalyticsDashboard => view! { <DashboardPage /> }.into_any(),

        // Supplier registration flow
        Screen::MaterialForm
        | Screen::ServiceForm
        | Screen::MaterialServiceForm
        | Screen::InternalRegistration => view! { <SupplierFormPage screen=screen /> }.into_any(),
        Screen::SupplierList => view! { <SupplierListPage /> }.into_any(),
        // reads the record id from the navigation context itself
        Screen::Approval => view! { <ApprovalPage /> }.into_any(),
    }
}
