//! Showroom map. The rendering context is an owned resource: acquired once per mount,
//! released exactly once when the contacts section goes away.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::config;
use crate::domain::{errors::MapError, logging::LogComponent};
use crate::{log_debug, log_info, log_warn};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = maplibregl, js_name = Map)]
    pub type MapLibreMap;

    #[wasm_bindgen(catch, constructor, js_namespace = maplibregl, js_class = "Map")]
    fn new(options: &Object) -> Result<MapLibreMap, JsValue>;

    #[wasm_bindgen(method)]
    fn remove(this: &MapLibreMap);

    #[wasm_bindgen(method, getter, js_name = scrollZoom)]
    fn scroll_zoom(this: &MapLibreMap) -> ScrollZoomHandler;

    type ScrollZoomHandler;

    #[wasm_bindgen(method)]
    fn disable(this: &ScrollZoomHandler);

    #[wasm_bindgen(js_namespace = maplibregl, js_name = Marker)]
    type MapLibreMarker;

    #[wasm_bindgen(constructor, js_namespace = maplibregl, js_class = "Marker")]
    fn new(options: &Object) -> MapLibreMarker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    fn set_lng_lat(this: &MapLibreMarker, lng_lat: &Array) -> MapLibreMarker;

    #[wasm_bindgen(method, js_name = setPopup)]
    fn set_popup(this: &MapLibreMarker, popup: &MapLibrePopup) -> MapLibreMarker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &MapLibreMarker, map: &MapLibreMap) -> MapLibreMarker;

    #[wasm_bindgen(js_namespace = maplibregl, js_name = Popup)]
    type MapLibrePopup;

    #[wasm_bindgen(constructor, js_namespace = maplibregl, js_class = "Popup")]
    fn new(options: &Object) -> MapLibrePopup;

    #[wasm_bindgen(method, js_name = setHTML)]
    fn set_html(this: &MapLibrePopup, html: &str) -> MapLibrePopup;
}

/// What gets drawn: center, zoom, style and the marker popup
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub style_url: String,
    pub center: [f64; 2],
    pub zoom: f64,
    pub popup_html: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style_url: config::MAP_STYLE_URL.to_string(),
            center: config::SHOWROOM_COORDINATES,
            zoom: config::SHOWROOM_ZOOM,
            popup_html: format!("<strong>Premium Auto</strong><br/>{}", config::ADDRESS),
        }
    }
}

/// Creates and destroys rendering contexts for a target element
pub trait MapBackend {
    type Target;
    type Context;

    fn create(&self, target: &Self::Target, config: &MapConfig) -> Result<Self::Context, MapError>;
    fn destroy(&self, context: Self::Context);
}

/// Owned rendering context. Consumed by `release`, so it cannot be freed twice.
pub struct MapHandle<B: MapBackend> {
    context: B::Context,
}

impl<B: MapBackend> MapHandle<B> {
    pub fn acquire(backend: &B, target: &B::Target, config: &MapConfig) -> Result<Self, MapError> {
        backend.create(target, config).map(|context| Self { context })
    }

    pub fn release(self, backend: &B) {
        backend.destroy(self.context);
    }
}

/// Holds at most one handle. Mounting twice is a no-op; releasing an empty slot too.
pub struct MapSlot<B: MapBackend> {
    backend: B,
    config: MapConfig,
    handle: Option<MapHandle<B>>,
}

impl<B: MapBackend> MapSlot<B> {
    pub fn new(backend: B, config: MapConfig) -> Self {
        Self { backend, config, handle: None }
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    /// Returns `Ok(true)` when a context was created by this call.
    pub fn mount(&mut self, target: &B::Target) -> Result<bool, MapError> {
        if self.handle.is_some() {
            log_debug!(LogComponent::Infrastructure("MapSlot"), "Map already mounted, skipping");
            return Ok(false);
        }
        self.handle = Some(MapHandle::acquire(&self.backend, target, &self.config)?);
        log_info!(LogComponent::Infrastructure("MapSlot"), "🗺️ Map mounted");
        Ok(true)
    }

    /// Returns `true` when a context was destroyed by this call.
    pub fn release(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.release(&self.backend);
                log_info!(LogComponent::Infrastructure("MapSlot"), "🗺️ Map released");
                true
            }
            None => false,
        }
    }
}

impl<B: MapBackend> Drop for MapSlot<B> {
    fn drop(&mut self) {
        if self.release() {
            log_warn!(
                LogComponent::Infrastructure("MapSlot"),
                "Map slot dropped while mounted; context released on drop"
            );
        }
    }
}

const MARKER_STYLE: &str = "width: 24px; height: 24px; background: #f97316; border-radius: 50%; \
    border: 3px solid white; box-shadow: 0 2px 8px rgba(0,0,0,0.3); cursor: pointer;";

/// Round orange pin, created in the container's document.
fn marker_element(target: &web_sys::HtmlElement) -> Result<web_sys::Element, MapError> {
    let document = target.owner_document().ok_or(MapError::MissingContainer)?;
    let element = document
        .create_element("div")
        .map_err(|e| MapError::Unavailable(format!("{:?}", e)))?;
    element
        .set_attribute("style", MARKER_STYLE)
        .map_err(|e| MapError::Unavailable(format!("{:?}", e)))?;
    Ok(element)
}

/// MapLibre GL loaded as the global `maplibregl`
pub struct MapLibreBackend;

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), MapError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| MapError::Unavailable(format!("{:?}", e)))
}

impl MapBackend for MapLibreBackend {
    type Target = web_sys::HtmlElement;
    type Context = MapLibreMap;

    fn create(&self, target: &Self::Target, config: &MapConfig) -> Result<MapLibreMap, MapError> {
        if !target.is_connected() {
            return Err(MapError::MissingContainer);
        }
        let center = Array::of2(&config.center[0].into(), &config.center[1].into());

        let options = Object::new();
        set(&options, "container", target)?;
        set(&options, "style", &JsValue::from_str(&config.style_url))?;
        set(&options, "center", &center)?;
        set(&options, "zoom", &config.zoom.into())?;
        set(&options, "attributionControl", &JsValue::FALSE)?;
        for disabled in ["dragRotate", "touchZoomRotate", "keyboard"] {
            set(&options, disabled, &JsValue::FALSE)?;
        }

        // Missing global `maplibregl` surfaces here as a thrown ReferenceError.
        let map = MapLibreMap::new(&options).map_err(|e| MapError::Unavailable(format!("{:?}", e)))?;
        map.scroll_zoom().disable();

        let popup_options = Object::new();
        set(&popup_options, "offset", &25.into())?;
        let popup = MapLibrePopup::new(&popup_options).set_html(&config.popup_html);

        let marker_options = Object::new();
        set(&marker_options, "element", &JsValue::from(marker_element(target)?))?;
        MapLibreMarker::new(&marker_options)
            .set_lng_lat(&center)
            .set_popup(&popup)
            .add_to(&map);

        Ok(map)
    }

    fn destroy(&self, context: MapLibreMap) {
        context.remove();
    }
}
