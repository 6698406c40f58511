//! Application Context
//!
//! Shared signals provided via Leptos Context API, plus hash routing.

use leptos::prelude::*;

/// Top-level views, addressed by location hash
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Tasks,
    Chat,
}

impl Route {
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#').trim_matches('/') {
            "chat" => Route::Chat,
            _ => Route::Tasks,
        }
    }

    pub fn to_hash(self) -> &'static str {
        match self {
            Route::Tasks => "#/",
            Route::Chat => "#/chat",
        }
    }

    /// Route for the current browser location
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|h| Route::from_hash(&h))
            .unwrap_or(Route::Tasks)
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active view - read
    pub route: ReadSignal<Route>,
    /// Active view - write
    set_route: WriteSignal<Route>,
    /// Add-task dialog visibility - read
    pub adding_task: ReadSignal<bool>,
    /// Add-task dialog visibility - write
    set_adding_task: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        adding_task: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            adding_task: adding_task.0,
            set_adding_task: adding_task.1,
        }
    }

    /// Switch view and record it in the location hash
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(route.to_hash());
        }
    }

    /// Sync view from the location hash (hashchange)
    pub fn sync_route(&self) {
        self.set_route.set(Route::current());
    }

    pub fn open_add_task(&self) {
        self.set_adding_task.set(true);
    }

    pub fn close_add_task(&self) {
        self.set_adding_task.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_hash() {
        assert_eq!(Route::from_hash("#/chat"), Route::Chat);
        assert_eq!(Route::from_hash("#chat"), Route::Chat);
        assert_eq!(Route::from_hash("#/chat/"), Route::Chat);
        assert_eq!(Route::from_hash("#/"), Route::Tasks);
        assert_eq!(Route::from_hash(""), Route::Tasks);
        assert_eq!(Route::from_hash("#/unknown"), Route::Tasks);
    }

    #[test]
    fn test_route_hash_round_trip() {
        for route in [Route::Tasks, Route::Chat] {
            assert_eq!(Route::from_hash(route.to_hash()), route);
        }
    }
}
