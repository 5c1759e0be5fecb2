#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use foodframe_wasm::{known_cities, map_search_url, Frame};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn lists_builtin_cities() {
    assert_eq!(known_cities(), vec!["chicago", "seoul", "tokyo"]);
}

#[wasm_bindgen_test]
fn encodes_map_links() {
    assert_eq!(
        map_search_url("Ramen Ichiran Tokyo"),
        "https://www.google.com/maps/search/Ramen%20Ichiran%20Tokyo"
    );
}

#[wasm_bindgen_test]
fn frame_lifecycle() {
    let mut frame = Frame::new(None, Some(r#"{"storage_key": "foodframe-smoke"}"#.into())).unwrap();
    assert!(!frame.is_ready());
    assert_eq!(frame.request_recommendations(), None);

    if frame.ready() {
        assert_eq!(frame.offer_context(JsValue::NULL), None);
    }

    frame.type_city("Tokyo");
    assert_eq!(frame.request_recommendations().as_deref(), Some("typed"));
    assert_eq!(frame.active_city().as_deref(), Some("Tokyo"));
    assert_eq!(frame.next_recommendation(), Some(1));
    assert_eq!(
        frame.view_on_map().as_deref(),
        Some("https://www.google.com/maps/search/Sushi%20Tsukiji%20Market%20Tokyo")
    );
}

#[wasm_bindgen_test]
fn failed_context_ends_detection() {
    let mut frame = Frame::new(None, Some(r#"{"storage_key": "foodframe-smoke-failed"}"#.into())).unwrap();
    if frame.ready() {
        frame.context_failed("context unavailable".into());
        // the pending task is gone, a late context is ignored
        let late = js_sys::JSON::parse(r#"{"user": {"username": "kompreni"}}"#).unwrap();
        assert_eq!(frame.offer_context(late), None);
        assert!(!frame.use_detected_city());
    }
}
