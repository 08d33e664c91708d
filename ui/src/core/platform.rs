//! Platform glue: browser URL access and future spawning. Native builds
//! have no address bar, so the URL helpers quietly degrade there.

/// Runs a future on the browser microtask queue. Native callers block on
/// their (short) futures instead.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

/// Query string of the current page, without the leading `?`.
pub fn current_query() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        Some(search.trim_start_matches('?').to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Rewrites the page query string in place (no navigation, no scroll), so
/// the address bar always mirrors the applied selection.
pub fn replace_query(query: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let Ok(path) = location.pathname() else {
            return;
        };
        let url = if query.is_empty() {
            path
        } else {
            format!("{path}?{query}")
        };
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = query;
    }
}

/// Origin plus path of the current page, query excluded. `None` off the
/// web.
pub fn page_url() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let location = web_sys::window()?.location();
        let origin = location.origin().ok()?;
        let path = location.pathname().ok()?;
        Some(format!("{origin}{path}"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
