use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use contracts::workflow::landing::NavigationStrategy;
use leptos::prelude::*;

/// Which navigation strategy this build runs. The legacy flow pre-routes
/// users by role/group right after login; the unified flow lands everyone on
/// the menu and lets each screen guard itself. Both remain in the codebase
/// until product settles on one.
const NAVIGATION_STRATEGY: NavigationStrategy = NavigationStrategy::UnifiedMenu;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(NAVIGATION_STRATEGY));

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
