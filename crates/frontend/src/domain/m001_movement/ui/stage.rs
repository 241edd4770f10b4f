use contracts::domain::m001_movement::MovementRecord;
use contracts::workflow::screen::Screen;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::m001_movement::api::fetch_stage_records;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::format_datetime;
use crate::system::auth::context::use_auth;

/// Generic stage queue: every transfer stage (and its confirmation variant)
/// lists the same record shape, only the backing endpoint differs. The
/// stage-specific confirm/finalize actions live server-side.
#[component]
pub fn MovementStagePage(screen: Screen) -> impl IntoView {
    let (items, set_items) = signal::<Vec<MovementRecord>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(true);

    let (auth_state, _) = use_auth();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let fetch = move || {
        let session = auth_state.get_untracked().session;
        let Some(session) = session else {
            return;
        };
        set_is_loading.set(true);
        spawn_local(async move {
            match fetch_stage_records(screen, &session).await {
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

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{screen.title()}</h1>
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
                            <th class="table__header-cell">"SPN"</th>
                            <th class="table__header-cell">"Descrição"</th>
                            <th class="table__header-cell">"Navio Origem"</th>
                            <th class="table__header-cell">"Navio Destino"</th>
                            <th class="table__header-cell">"Quantidade"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Inserido em"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let selected = ctx.record_id.get();
                            items.get().into_iter().map(|record| {
                                let is_selected =
                                    selected.as_deref() == Some(record.id.to_string().as_str());
                                let inserted = record
                                    .data_insercao
                                    .as_deref()
                                    .or(record.created.as_deref())
                                    .map(format_datetime)
                                    .unwrap_or_default();
                                view! {
                                    <tr class="table__row" class:table__row--selected=is_selected>
                                        <td class="table__cell">{record.spn.clone()}</td>
                                        <td class="table__cell">{record.item_description.clone()}</td>
                                        <td class="table__cell">{record.from_vessel.clone()}</td>
                                        <td class="table__cell">{record.to_vessel.clone()}</td>
                                        <td class="table__cell">
                                            {record.quantity_to_transfer.clone().unwrap_or_default()}
                                        </td>
                                        <td class="table__cell">{record.status().to_string()}</td>
                                        <td class="table__cell">{inserted}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
