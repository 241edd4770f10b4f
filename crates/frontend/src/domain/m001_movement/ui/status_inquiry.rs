use contracts::domain::m001_movement::MovementRecord;
use contracts::workflow::screen::Screen;
use contracts::workflow::status_routing::resolve_screen_for_status;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::m001_movement::api::fetch_status_inquiry;
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::use_auth;

/// CSS class for a status cell, derived from the same classification the
/// navigation uses.
fn status_css(status: &str) -> &'static str {
    match resolve_screen_for_status(status) {
        Some(Screen::Disembarkation) => "status-base",
        Some(Screen::Conference) => "status-conference",
        Some(Screen::Quarantine) => "status-quarantine",
        Some(Screen::PendingLom) => "status-lom",
        Some(Screen::Shipment) => "status-shipment",
        _ => "",
    }
}

/// Cross-stage consultation. Clicking a status cell routes the record to the
/// stage that currently owns it; an unclassified status is not clickable and
/// the row simply stays put.
#[component]
pub fn StatusInquiryPage() -> impl IntoView {
    let (items, set_items) = signal::<Vec<MovementRecord>>(Vec::new());
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
            match fetch_status_inquiry(&session).await {
                Ok(records) => {
                    set_items.set(records);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_loading.set(false);
        });
    };

    fetch();

    let handle_status_click = move |status: String, id: i64| {
        if let Some(target) = resolve_screen_for_status(&status) {
            ctx.open_record(target, &id.to_string());
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Screen::StatusInquiry.title()}</h1>
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

            <Show when=move || !is_loading.get() && items.get().is_empty() && error.get().is_none()>
                <div class="empty-state">
                    <p>"Nenhum registro encontrado."</p>
                </div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"SPN"</th>
                            <th class="table__header-cell">"Descrição"</th>
                            <th class="table__header-cell">"Navio Origem"</th>
                            <th class="table__header-cell">"Navio Destino"</th>
                            <th class="table__header-cell">"PR TM Master"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|record| {
                            let status = record.status().to_string();
                            let clickable = resolve_screen_for_status(&status).is_some();
                            let cell_class = format!(
                                "table__cell status-cell {}{}",
                                status_css(&status),
                                if clickable { " status-cell--clickable" } else { "" }
                            );
                            let status_for_click = status.clone();
                            let id = record.id;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{record.spn.clone()}</td>
                                    <td class="table__cell">{record.item_description.clone()}</td>
                                    <td class="table__cell">{record.from_vessel.clone()}</td>
                                    <td class="table__cell">{record.to_vessel.clone()}</td>
                                    <td class="table__cell">
                                        {record.pr_number_tm_master.clone().unwrap_or_default()}
                                    </td>
                                    <td
                                        class=cell_class
                                        on:click=move |_| handle_status_click(status_for_click.clone(), id)
                                    >
                                        {status.clone()}
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
