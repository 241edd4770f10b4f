use contracts::domain::m002_supplier_request::SupplierRequest;
use contracts::workflow::screen::Screen;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::m002_supplier_request::api::fetch_supplier_requests;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::format_date;
use crate::system::auth::context::use_auth;

/// Supplier registration requests awaiting action. Rows open the approval
/// screen for the picked request.
#[component]
pub fn SupplierListPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<SupplierRequest>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(true);

    let (auth_state, _) = use_auth();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let fetch = move || {
        let Some(session) = auth_state.get_untracked().session else {
            return;
        };
        set_is_loading.set(true);
        spawn_local(async move {
            match fetch_supplier_requests(&session).await {
                Ok(requests) => {
                    set_items.set(requests);
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
                    <h1 class="header__title">{Screen::SupplierList.title()}</h1>
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
                            <th class="table__header-cell">"Fornecedor"</th>
                            <th class="table__header-cell">"CNPJ"</th>
                            <th class="table__header-cell">"Solicitante"</th>
                            <th class="table__header-cell">"Tipo"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Criado em"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|request| {
                            let id = request.id;
                            let created = request
                                .created_at
                                .map(|dt| format_date(&dt.to_rfc3339()))
                                .unwrap_or_default();
                            view! {
                                <tr
                                    class="table__row"
                                    on:click=move |_| {
                                        ctx.open_record(Screen::Approval, &id.to_string())
                                    }
                                >
                                    <td class="table__cell">{request.supplier_name.clone()}</td>
                                    <td class="table__cell">
                                        {request.cnpj.clone().unwrap_or_default()}
                                    </td>
                                    <td class="table__cell">
                                        {request.requester.clone().unwrap_or_default()}
                                    </td>
                                    <td class="table__cell">
                                        {request.form_type.clone().unwrap_or_default()}
                                    </td>
                                    <td class=format!("table__cell {}", request.status_css_class())>
                                        {request.status_label()}
                                    </td>
                                    <td class="table__cell">{created}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
