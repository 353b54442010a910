//! Page Configuration
//!
//! The host page may embed overrides as JSON:
//!
//! ```html
//! <script id="counter-config" type="application/json">{ "max": 50 }</script>
//! ```

use counter_core::CounterConfig;

/// Id of the element holding the JSON overrides
pub const CONFIG_ELEMENT_ID: &str = "counter-config";

/// Read the page's widget configuration, falling back to defaults
pub fn load_config() -> CounterConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    resolve_config(raw.as_deref())
}

/// Blank or missing input means defaults; invalid input is logged and
/// also means defaults.
pub fn resolve_config(raw: Option<&str>) -> CounterConfig {
    match raw.map(str::trim).filter(|json| !json.is_empty()) {
        None => CounterConfig::default(),
        Some(json) => CounterConfig::from_json(json).unwrap_or_else(|err| {
            log::warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, err);
            CounterConfig::default()
        }),
    }
}
