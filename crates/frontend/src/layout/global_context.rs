use contracts::workflow::landing::NavigationStrategy;
use contracts::workflow::screen::Screen;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Navigation state shared with the whole app via context.
///
/// The current screen and the optional record id are the only mutable pieces;
/// the URL query (`?screen=…&id=…`) mirrors them so a reload or a shared link
/// lands on the same view.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current: RwSignal<Screen>,
    /// Record carried by the navigation, as its wire form: a numeric
    /// movement id or a supplier request uuid.
    pub record_id: RwSignal<Option<String>>,
    pub strategy: NavigationStrategy,
}

impl AppGlobalContext {
    pub fn new(strategy: NavigationStrategy) -> Self {
        Self {
            current: RwSignal::new(Screen::Login),
            record_id: RwSignal::new(None),
            strategy,
        }
    }

    /// Restores the screen from the URL query and keeps the query in sync
    /// with navigation afterwards. Runs once when the shell is created.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(screen) = params.get("screen").and_then(|key| Screen::from_key(key)) {
            self.current.set(screen);
        }
        if let Some(id) = params.get("id") {
            self.record_id.set(Some(id.clone()));
        }

        let this = *self;
        Effect::new(move |_| {
            let mut query = HashMap::from([(
                "screen".to_string(),
                this.current.get().key().to_string(),
            )]);
            if let Some(id) = this.record_id.get() {
                query.insert("id".to_string(), id);
            }
            let query_string = serde_qs::to_string(&query).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            // Use untracked to avoid creating unnecessary reactive dependencies
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Plain navigation; drops any record selection.
    pub fn navigate_to(&self, screen: Screen) {
        leptos::logging::log!("navigate_to: '{}'", screen.key());
        self.record_id.set(None);
        self.current.set(screen);
    }

    /// Navigation that carries a record, e.g. a status cell routing its row
    /// to the owning stage.
    pub fn open_record(&self, screen: Screen, id: &str) {
        leptos::logging::log!("open_record: '{}' id={}", screen.key(), id);
        self.record_id.set(Some(id.to_string()));
        self.current.set(screen);
    }
}
