//! foodframe-wasm — WebAssembly bindings for foodframe-core
//!
//! This crate exposes the recommendation frame to JavaScript. Browser
//! `localStorage` backs the persisted city, `openUrl` is a JS callback, and
//! the user context comes from the host SDK.
//!
//! What it provides
//! ----------------
//! - A `Frame` class driving one activation of the widget
//! - `view()` returning a JSON-serializable render model
//!   (`{ kind: "loading" }` or `{ kind: "card", ... }`)
//! - Free helpers: `resolve_list("tokyo")`, `map_search_url("Ramen Ichiran Tokyo")`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { Frame } from 'foodframe-wasm';
//! import sdk from '@farcaster/frame-sdk';
//!
//! await init();
//! const frame = new Frame((url) => sdk.actions.openUrl(url));
//!
//! // once the SDK is loaded
//! if (frame.ready()) {
//!   sdk.context
//!     .then((ctx) => frame.offerContext(ctx))
//!     .catch((err) => frame.contextFailed(String(err)));
//! }
//!
//! frame.typeCity('Tokyo');
//! frame.requestRecommendations();
//! render(frame.view());
//! ```
//!
//! Notes
//! -----
//! - Without `window.localStorage` the frame keeps its city in memory only.
//! - A context that arrives after the user picked a city only feeds the
//!   "Use detected location" prompt; it never replaces the chosen city.
use foodframe_core::prelude::*;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing foodframe WASM module...".into());
}

/* --------------------------------------------------------------------------
   Browser collaborators
-------------------------------------------------------------------------- */

/// [`CityStore`] over `window.localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// `None` when there is no window or storage is blocked.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl CityStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(storage_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(storage_error)
    }
}

fn storage_error(err: JsValue) -> FrameError {
    FrameError::Storage(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Forwards `openUrl` to a JS function.
pub struct JsOpenUrl {
    callback: Option<js_sys::Function>,
}

impl ExternalActions for JsOpenUrl {
    fn open_url(&mut self, url: &str) {
        let Some(callback) = &self.callback else {
            web_sys::console::warn_1(&format!("No openUrl handler for {url}").into());
            return;
        };
        if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(url)) {
            web_sys::console::error_2(&"openUrl failed:".into(), &err);
        }
    }
}

/* --------------------------------------------------------------------------
   Frame
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct Frame {
    inner: WidgetController<LocalStorage, JsOpenUrl>,
    pending: Option<DetectionTask>,
}

#[wasm_bindgen]
impl Frame {
    /// `open_url` receives map links; `config_json` overrides the defaults
    /// (`{"storage_key": ..., "maps_search_base": ..., "detection": {...}}`).
    #[wasm_bindgen(constructor)]
    pub fn new(
        open_url: Option<js_sys::Function>,
        config_json: Option<String>,
    ) -> std::result::Result<Frame, JsError> {
        let config = match config_json {
            Some(json) => FrameConfig::from_json_str(&json)?,
            None => FrameConfig::default(),
        };
        let actions = JsOpenUrl { callback: open_url };
        Ok(Frame {
            inner: WidgetController::with_config(config, LocalStorage::open(), actions),
            pending: None,
        })
    }

    /// SDK readiness. Returns `true` when the host should now resolve the
    /// user context and pass it to `offerContext` (or `contextFailed`).
    pub fn ready(&mut self) -> bool {
        if let Some(task) = self.inner.on_ready() {
            self.pending = Some(task);
        }
        self.pending.is_some()
    }

    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }

    /// Resolved SDK context (`{ user: { username } }`, or null). Returns the
    /// detected city, if any.
    #[wasm_bindgen(js_name = offerContext)]
    pub fn offer_context(&mut self, context: JsValue) -> Option<String> {
        let task = self.pending.take()?;
        if context.is_null() || context.is_undefined() {
            return task.complete(Ok(None));
        }
        let outcome = serde_wasm_bindgen::from_value::<FrameContext>(context)
            .map(Some)
            .map_err(|err| FrameError::HostContext(err.to_string()));
        task.complete(outcome)
    }

    /// The SDK context promise rejected. Detection ends for this
    /// activation with nothing detected.
    #[wasm_bindgen(js_name = contextFailed)]
    pub fn context_failed(&mut self, message: String) {
        if self.pending.take().is_some() {
            web_sys::console::error_1(&format!("Error detecting location: {message}").into());
        }
    }

    #[wasm_bindgen(js_name = typeCity)]
    pub fn type_city(&mut self, text: &str) {
        self.inner.type_city(text);
    }

    /// Returns `"typed"`, `"detected"` or `"default"`, or `undefined`
    /// before readiness.
    #[wasm_bindgen(js_name = requestRecommendations)]
    pub fn request_recommendations(&mut self) -> Option<String> {
        let resolution = match self.inner.request_recommendations()? {
            Resolution::Typed { .. } => "typed",
            Resolution::Detected => "detected",
            Resolution::Default => "default",
        };
        Some(resolution.to_string())
    }

    #[wasm_bindgen(js_name = nextRecommendation)]
    pub fn next_recommendation(&mut self) -> Option<usize> {
        self.inner.next_recommendation()
    }

    #[wasm_bindgen(js_name = viewOnMap)]
    pub fn view_on_map(&mut self) -> Option<String> {
        self.inner.view_on_map()
    }

    #[wasm_bindgen(js_name = useDetectedCity)]
    pub fn use_detected_city(&mut self) -> bool {
        self.inner.use_detected_city()
    }

    #[wasm_bindgen(js_name = activeCity)]
    pub fn active_city(&self) -> Option<String> {
        self.inner.active_city().map(str::to_string)
    }

    pub fn view(&self) -> std::result::Result<JsValue, JsError> {
        Ok(to_value(&self.inner.view())?)
    }
}

/* --------------------------------------------------------------------------
   Table helpers
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn resolve_list(city: &str) -> std::result::Result<JsValue, JsError> {
    Ok(to_value(RecommendationTable::builtin().resolve_list(city))?)
}

#[wasm_bindgen]
pub fn map_search_url(query: &str) -> String {
    foodframe_core::selector::map_search_url(
        foodframe_core::config::DEFAULT_MAPS_SEARCH_BASE,
        query,
    )
}

#[wasm_bindgen]
pub fn known_cities() -> Vec<String> {
    RecommendationTable::builtin()
        .cities()
        .map(|(city, _)| city.to_string())
        .collect()
}
