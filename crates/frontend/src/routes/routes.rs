use crate::layout::global_context::AppGlobalContext;
use crate::screens::registry::render_screen_content;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireScreenAccess;
use crate::system::pages::login::LoginPage;
use contracts::workflow::landing::resolve_default_screen;
use contracts::workflow::screen::Screen;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let (auth_state, _) = use_auth();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    // A fresh shell (no screen restored from the URL) lands on the session's
    // default screen per the configured navigation strategy.
    if ctx.current.get_untracked() == Screen::Login {
        let state = auth_state.get_untracked();
        ctx.navigate_to(resolve_default_screen(state.session.as_ref(), ctx.strategy));
    }

    view! {
        <main class="main-content">
            {move || {
                let screen = ctx.current.get();
                view! {
                    <RequireScreenAccess screen=screen>
                        {move || render_screen_content(screen)}
                    </RequireScreenAccess>
                }
            }}
        </main>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().session.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
