use contracts::workflow::access::menu_entries;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::context::{do_logout, use_auth};

/// Landing menu: one card per screen this session may open. The entries come
/// straight from the authorization table, so a card that renders is a card
/// that navigates.
#[component]
pub fn MenuPage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let handle_logout = move |_| {
        do_logout(set_auth_state);
    };

    view! {
        <div class="menu-page-container">
            <header class="menu-header-main">
                <div class="menu-title-section">
                    <h1>"TransferPlus"</h1>
                    <p>"Sistema Integrado de Gestão Logística"</p>
                </div>
                <div class="menu-user-section">
                    {move || auth_state.get().session.map(|session| view! {
                        <div class="menu-user-info">
                            <div class="menu-user-avatar">
                                <span>
                                    {session.username.chars().next()
                                        .map(|c| c.to_uppercase().to_string())
                                        .unwrap_or_else(|| "U".to_string())}
                                </span>
                            </div>
                            <div class="menu-user-details">
                                <div class="menu-user-name">{session.username.clone()}</div>
                                <div class="menu-user-role">{session.role.display_name()}</div>
                            </div>
                        </div>
                    })}
                    <button class="menu-logout-btn" on:click=handle_logout title="Sair">
                        "Sair"
                    </button>
                </div>
            </header>

            <div class="menu-cards-grid">
                {move || {
                    let state = auth_state.get();
                    state
                        .session
                        .as_ref()
                        .map(|session| menu_entries(session))
                        .unwrap_or_default()
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <div
                                    class="menu-card"
                                    on:click=move |_| ctx.navigate_to(entry.screen)
                                >
                                    <div class="menu-card-content">
                                        <div class="menu-card-icon">{entry.icon}</div>
                                        <h3 class="menu-card-title">{entry.title()}</h3>
                                        <p class="menu-card-subtitle">{entry.subtitle()}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <footer class="menu-footer-info">
                <p>"© 2025 TransferPlus - Sistema de Gestão Logística"</p>
            </footer>
        </div>
    }
}
