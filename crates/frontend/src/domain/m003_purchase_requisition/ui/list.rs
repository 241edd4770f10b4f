use contracts::domain::m003_purchase_requisition::PurchaseRequisition;
use contracts::workflow::screen::Screen;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::m003_purchase_requisition::api::fetch_open_requisitions;
use crate::shared::date_utils::format_date;
use crate::system::auth::context::use_auth;

/// Read-only inquiry over open purchase requisitions.
#[component]
pub fn PurchaseRequisitionsPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<PurchaseRequisition>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(true);

    let (auth_state, _) = use_auth();

    let fetch = move || {
        let Some(session) = auth_state.get_untracked().session else {
            return;
        };
        set_is_loading.set(true);
        spawn_local(async move {
            match fetch_open_requisitions(&session).await {
                Ok(requisitions) => {
                    set_items.set(requisitions);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Screen::PurchaseRequisitionInquiry.title()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "Atualizar"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            <Show when=move || is_loading.get()>
                <div class="loading-screen">"Buscando..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"ID"</th>
                            <th class="table__header-cell">"SPN"</th>
                            <th class="table__header-cell">"PR TM Master"</th>
                            <th class="table__header-cell">"PR Oracle"</th>
                            <th class="table__header-cell">"Departamento"</th>
                            <th class="table__header-cell">"Prioridade"</th>
                            <th class="table__header-cell">"Data Necessária"</th>
                            <th class="table__header-cell">"Status PR"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|requisition| {
                            let required = requisition
                                .required_date
                                .as_deref()
                                .map(format_date)
                                .unwrap_or_default();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{requisition.id.clone()}</td>
                                    <td class="table__cell">{requisition.spn.clone()}</td>
                                    <td class="table__cell">
                                        {requisition.pr_tm_master.clone().unwrap_or_default()}
                                    </td>
                                    <td class="table__cell">
                                        {requisition.pr_oracle.clone().unwrap_or_default()}
                                    </td>
                                    <td class="table__cell">
                                        {requisition.department.clone().unwrap_or_default()}
                                    </td>
                                    <td class="table__cell">
                                        {requisition.purchase_priority.clone().unwrap_or_default()}
                                    </td>
                                    <td class="table__cell">{required}</td>
                                    <td class="table__cell">
                                        {requisition.pr_status.clone().unwrap_or_default()}
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
