use contracts::domain::m002_supplier_request::SupplierRequest;
use contracts::workflow::approval::{
    approval_button_label, can_approve, can_reject, next_state, reject, ApprovalActor,
    ApprovalStatus,
};
use contracts::workflow::screen::Screen;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::domain::m002_supplier_request::api::{fetch_supplier_request, update_request_status};
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::use_auth;

/// Approval detail for one supplier request.
///
/// Which buttons render, their captions and whether they are enabled all come
/// from the approval state machine; an action outside the transition table is
/// shown disabled instead of erroring after the fact.
#[component]
pub fn ApprovalPage() -> impl IntoView {
    let (request, set_request) = signal::<Option<SupplierRequest>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_busy, set_is_busy) = signal(false);

    let (auth_state, _) = use_auth();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let actor = move || {
        auth_state
            .get()
            .session
            .as_ref()
            .and_then(|session| ApprovalActor::from_groups(&session.groups))
    };

    // Follows the record carried by the navigation context.
    Effect::new(move |_| {
        let id = ctx.record_id.get().and_then(|raw| Uuid::parse_str(&raw).ok());
        let Some(id) = id else {
            set_request.set(None);
            set_error.set(Some("Selecione uma solicitação na lista".to_string()));
            return;
        };
        let Some(session) = auth_state.get_untracked().session else {
            return;
        };
        spawn_local(async move {
            match fetch_supplier_request(&session, id).await {
                Ok(found) => {
                    set_request.set(Some(found));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let apply_status = move |target: ApprovalStatus| {
        let Some(session) = auth_state.get_untracked().session else {
            return;
        };
        let Some(current) = request.get_untracked() else {
            return;
        };
        set_is_busy.set(true);
        spawn_local(async move {
            match update_request_status(&session, current.id, target).await {
                Ok(updated) => {
                    set_request.set(Some(updated));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_is_busy.set(false);
        });
    };

    let handle_approve = move |_| {
        let (Some(actor), Some(req)) = (actor(), request.get_untracked()) else {
            return;
        };
        let Some(state) = req.approval_status() else {
            return;
        };
        if can_approve(actor, state) {
            apply_status(next_state(actor, state));
        }
    };

    let handle_reject = move |_| {
        let (Some(actor), Some(req)) = (actor(), request.get_untracked()) else {
            return;
        };
        let Some(state) = req.approval_status() else {
            return;
        };
        if let Some(rejected) = reject(actor, state) {
            apply_status(rejected);
        }
    };

    let approve_enabled = move || {
        !is_busy.get()
            && matches!(
                (actor(), request.get().and_then(|r| r.approval_status())),
                (Some(actor), Some(state)) if can_approve(actor, state)
            )
    };

    let reject_enabled = move || {
        !is_busy.get()
            && matches!(
                (actor(), request.get().and_then(|r| r.approval_status())),
                (Some(actor), Some(state)) if can_reject(actor, state)
            )
    };

    let approve_caption = move || {
        match (actor(), request.get().and_then(|r| r.approval_status())) {
            (Some(actor), Some(state)) => approval_button_label(actor, state),
            _ => "Aprovar",
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Screen::Approval.title()}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| ctx.navigate_to(Screen::SupplierList)
                    >
                        "Voltar"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error-message">{e}</div>
            })}

            {move || request.get().map(|req| view! {
                <div class="detail-card">
                    <div class="detail-row">
                        <div class="detail-label">"Fornecedor"</div>
                        <div class="detail-value">{req.supplier_name.clone()}</div>
                    </div>
                    <div class="detail-row">
                        <div class="detail-label">"CNPJ"</div>
                        <div class="detail-value">{req.cnpj.clone().unwrap_or_default()}</div>
                    </div>
                    <div class="detail-row">
                        <div class="detail-label">"Solicitante"</div>
                        <div class="detail-value">{req.requester.clone().unwrap_or_default()}</div>
                    </div>
                    <div class="detail-row">
                        <div class="detail-label">"Status"</div>
                        <div class=format!("detail-value {}", req.status_css_class())>
                            {req.status_label()}
                        </div>
                    </div>

                    <Show when=move || actor().is_none()>
                        <div class="info-message">
                            "Seu perfil não atua no fluxo de aprovação."
                        </div>
                    </Show>

                    <div class="detail-actions">
                        <button
                            class="button button--primary"
                            disabled=move || !approve_enabled()
                            on:click=handle_approve
                        >
                            {approve_caption}
                        </button>
                        <button
                            class="button button--danger"
                            disabled=move || !reject_enabled()
                            on:click=handle_reject
                        >
                            "Reprovar"
                        </button>
                    </div>
                </div>
            })}
        </div>
    }
}
