use contracts::workflow::access::is_authorized;
use contracts::workflow::landing::resolve_default_screen;
use contracts::workflow::screen::Screen;
use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;

use super::context::use_auth;

/// Wraps a screen's content in the authorization check.
///
/// A denial is a navigation redirect to the session's default landing screen,
/// never an error view; while the redirect settles the fallback shows a
/// neutral loading state.
#[component]
pub fn RequireScreenAccess(screen: Screen, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let allowed = move || {
        let state = auth_state.get();
        match state.session.as_ref() {
            Some(session) => is_authorized(session, screen, Some(screen.path())),
            None => screen == Screen::Login,
        }
    };

    Effect::new(move |_| {
        if !allowed() {
            let state = auth_state.get();
            let target = resolve_default_screen(state.session.as_ref(), ctx.strategy);
            log::warn!(
                "access denied to '{}', redirecting to '{}'",
                screen.key(),
                target.key()
            );
            ctx.navigate_to(target);
        }
    });

    view! {
        <Show
            when=allowed
            fallback=|| view! { <div class="loading-screen">"Carregando..."</div> }
        >
            {children()}
        </Show>
    }
}
