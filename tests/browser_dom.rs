#![cfg(feature = "browser-tests")]
use premium_auto_wasm::domain::errors::MapError;
use premium_auto_wasm::infrastructure::map::{MapConfig, MapLibreBackend, MapSlot};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn attached_div() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap().dyn_into::<web_sys::HtmlElement>().unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

#[wasm_bindgen_test]
fn missing_map_library_is_reported_not_thrown() {
    let mut slot = MapSlot::new(MapLibreBackend, MapConfig::default());
    let result = slot.mount(&attached_div());
    assert!(matches!(result, Err(MapError::Unavailable(_))));
    assert!(!slot.is_mounted());
}

#[wasm_bindgen_test]
fn detached_container_is_rejected() {
    let document = web_sys::window().unwrap().document().unwrap();
    let detached = document.create_element("div").unwrap().dyn_into::<web_sys::HtmlElement>().unwrap();
    let mut slot = MapSlot::new(MapLibreBackend, MapConfig::default());
    assert_eq!(slot.mount(&detached), Err(MapError::MissingContainer));
}
