use contracts::workflow::screen::Screen;
use contracts::workflow::session::SessionContext;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;

use crate::system::auth::api::fetch_with_user;
use crate::system::auth::context::use_auth;

/// Per-stage counters served by the dashboard endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleStats {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub finalizados: i64,
    #[serde(default)]
    pub pendentes: i64,
}

const STAT_SOURCES: &[(&str, &str)] = &[
    ("Desembarque", "/api/dashboard/desembarque_stats"),
    ("Conferência", "/api/dashboard/conferencia_stats"),
    ("Quarentena", "/api/dashboard/quarentena_stats"),
    ("LOM", "/api/dashboard/lom_stats"),
    ("Embarque", "/api/dashboard/embarque_stats"),
];

async fn fetch_stats(session: &SessionContext) -> Vec<(&'static str, ModuleStats)> {
    let mut stats = Vec::with_capacity(STAT_SOURCES.len());
    for (label, endpoint) in STAT_SOURCES {
        // A stage whose endpoint is down shows zeroes instead of taking the
        // whole dashboard with it.
        let module = fetch_with_user::<ModuleStats>(endpoint, session)
            .await
            .unwrap_or_default();
        stats.push((*label, module));
    }
    stats
}

/// Admin-only overview: one stat card per transfer stage.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let (stats, set_stats) = signal::<Vec<(&'static str, ModuleStats)>>(Vec::new());
    let (is_loading, set_is_loading) = signal(true);

    let (auth_state, _) = use_auth();

    let fetch = move || {
        let Some(session) = auth_state.get_untracked().session else {
            return;
        };
        set_is_loading.set(true);
        spawn_local(async move {
            set_stats.set(fetch_stats(&session).await);
            set_is_loading.set(false);
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Screen::AnalyticsDashboard.title()}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "Atualizar"
                    </button>
                </div>
            </div>

            <Show when=move || is_loading.get()>
                <div class="loading-screen">"Carregando..."</div>
            </Show>

            <div class="stat-cards-grid">
                {move || stats.get().into_iter().map(|(label, module)| view! {
                    <div class="stat-card">
                        <h3 class="stat-card__title">{label}</h3>
                        <div class="stat-card__value">{module.total}</div>
                        <div class="stat-card__detail">
                            <span>{format!("Finalizados: {}", module.finalizados)}</span>
                            <span>{format!("Pendentes: {}", module.pendentes)}</span>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
