//! popmap-wasm — WebAssembly bindings for popmap-core
//!
//! This crate exposes a small JS/WASM API on top of `popmap-core`. The page
//! keeps its map library (Leaflet or similar) for tiles and drawing; this
//! module owns the selected year, fetches the dataset, builds the marker
//! layer and decides which layer is current.
//!
//! What it provides
//! ----------------
//! - Panic hook installation on module load (via `#[wasm_bindgen(start)]`)
//! - `PopMap`: one map instance, driven by slider and arrow events
//!   - `start()`: legend + initial load
//!   - `select_year(y)`, `step_back()`, `step_forward()`, `refresh()`
//!   - `current_year()`, `year_bounds()`, `legend()`
//! - `radius_for(population)`: the marker scaling, for custom swatches
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { PopMap } from 'popmap-wasm';
//!
//! await init();
//! let cityLayer = null;
//! const popmap = new PopMap(
//!   { dataset: 'data.geojson' },
//!   (layer) => {
//!     if (cityLayer) map.removeLayer(cityLayer);
//!     cityLayer = L.layerGroup(layer.markers.map((m) =>
//!       L.circleMarker([m.position.lat, m.position.lng], {
//!         radius: m.radius,
//!         fillColor: layer.style.fill_color,
//!         color: layer.style.stroke_color,
//!         weight: layer.style.weight,
//!         fillOpacity: layer.style.fill_opacity,
//!       }).bindPopup(m.popup))).addTo(map);
//!   },
//!   (year) => { slider.value = year; yearLabel.textContent = year; },
//!   (legend) => renderLegend(legend),
//! );
//! slider.addEventListener('input', () => popmap.select_year(parseInt(slider.value)));
//! prevArrow.addEventListener('click', () => popmap.step_back());
//! nextArrow.addEventListener('click', () => popmap.step_forward());
//! popmap.start();
//! ```
//!
//! Notes
//! -----
//! - Every year change re-fetches the dataset. Responses may arrive out of
//!   order; only the one for the latest request reaches `on_layer`.
//! - Callbacks run after the map state is released, so they may call back
//!   into the same `PopMap` (e.g. `current_year()` from `on_layer`).
use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use js_sys::Function;
use popmap_core::{
    radius, Dataset, Legend, MapConfig, MapController, MapSurface, PopMapError, Population,
    RedrawOutcome, RedrawRequest, RenderedLayer, Year,
};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing popmap WASM module...".into());
}

/* --------------------------------------------------------------------------
   Surface: queues controller events for the JS callbacks
-------------------------------------------------------------------------- */

/// A surface event waiting for its callback.
#[derive(Debug, Clone, PartialEq)]
enum Pending {
    Year(Year),
    Layer(RenderedLayer),
    Legend(Legend),
}

/// Records events while the controller is borrowed. [`Callbacks::run`]
/// delivers them once the borrow is released, so a callback may call back
/// into its `PopMap`.
#[derive(Default)]
struct JsSurface {
    pending: Vec<Pending>,
}

impl JsSurface {
    fn take(&mut self) -> Vec<Pending> {
        std::mem::take(&mut self.pending)
    }
}

impl MapSurface for JsSurface {
    fn show_year(&mut self, year: Year) {
        self.pending.push(Pending::Year(year));
    }

    fn replace_layer(&mut self, layer: &RenderedLayer) {
        self.pending.push(Pending::Layer(layer.clone()));
    }

    fn show_legend(&mut self, legend: &Legend) {
        self.pending.push(Pending::Legend(legend.clone()));
    }

    fn report_error(&mut self, error: &PopMapError) {
        web_sys::console::error_1(&format!("Error updating map: {error}").into());
    }
}

struct Callbacks {
    on_layer: Function,
    on_year: Function,
    on_legend: Option<Function>,
}

impl Callbacks {
    fn run(&self, events: Vec<Pending>) {
        for event in events {
            match event {
                Pending::Year(year) => Self::call(&self.on_year, JsValue::from(year)),
                Pending::Layer(layer) => match to_value(&layer) {
                    Ok(value) => Self::call(&self.on_layer, value),
                    Err(e) => web_sys::console::error_1(
                        &format!("Layer serialization failed: {e}").into(),
                    ),
                },
                Pending::Legend(legend) => {
                    let Some(callback) = &self.on_legend else {
                        continue;
                    };
                    match to_value(&legend) {
                        Ok(value) => Self::call(callback, value),
                        Err(e) => web_sys::console::error_1(
                            &format!("Legend serialization failed: {e}").into(),
                        ),
                    }
                }
            }
        }
    }

    fn call(callback: &Function, value: JsValue) {
        if let Err(e) = callback.call1(&JsValue::NULL, &value) {
            web_sys::console::error_2(&"popmap callback threw:".into(), &e);
        }
    }
}

/* --------------------------------------------------------------------------
   PopMap
-------------------------------------------------------------------------- */

/// Slider attributes, as handed to JS.
#[derive(Serialize)]
struct YearBounds {
    min: Year,
    max: Year,
    step: Year,
    value: Year,
}

#[wasm_bindgen]
pub struct PopMap {
    inner: Rc<RefCell<MapController<JsSurface>>>,
    callbacks: Rc<Callbacks>,
    dataset_url: String,
}

#[wasm_bindgen]
impl PopMap {
    /// `config` is a `MapConfig`-shaped object (any field may be left out) or
    /// `undefined`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config: JsValue,
        on_layer: Function,
        on_year: Function,
        on_legend: Option<Function>,
    ) -> Result<PopMap, JsValue> {
        let config: MapConfig = if config.is_undefined() || config.is_null() {
            MapConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let controller =
            MapController::new(&config, JsSurface::default()).map_err(to_js_error)?;
        Ok(PopMap {
            inner: Rc::new(RefCell::new(controller)),
            callbacks: Rc::new(Callbacks {
                on_layer,
                on_year,
                on_legend,
            }),
            dataset_url: config.dataset,
        })
    }

    /// Shows the legend and the initial year, then loads the first layer.
    pub fn start(&self) {
        let request = self.inner.borrow_mut().start();
        self.dispatch(request);
    }

    /// Slider input. Returns `true` if the year changed and a redraw started.
    pub fn select_year(&self, year: i32) -> bool {
        let request = self.inner.borrow_mut().select_year(year);
        self.dispatch_opt(request)
    }

    pub fn step_back(&self) -> bool {
        let request = self.inner.borrow_mut().step_back();
        self.dispatch_opt(request)
    }

    pub fn step_forward(&self) -> bool {
        let request = self.inner.borrow_mut().step_forward();
        self.dispatch_opt(request)
    }

    /// Re-fetch and redraw the current year.
    pub fn refresh(&self) {
        let request = self.inner.borrow_mut().refresh();
        self.dispatch(request);
    }

    pub fn current_year(&self) -> i32 {
        self.inner.borrow().current_year()
    }

    /// `{ min, max, step, value }` for initializing the slider element.
    pub fn year_bounds(&self) -> Result<JsValue, JsValue> {
        let inner = self.inner.borrow();
        let timeline = inner.timeline();
        let bounds = YearBounds {
            min: timeline.range().min(),
            max: timeline.range().max(),
            step: timeline.step(),
            value: timeline.current(),
        };
        Ok(to_value(&bounds)?)
    }

    pub fn legend(&self) -> Result<JsValue, JsValue> {
        Ok(to_value(self.inner.borrow().legend())?)
    }
}

impl PopMap {
    /// Delivers queued surface events. Must run with no borrow of `inner` held.
    fn flush(&self) {
        let events = self.inner.borrow_mut().surface_mut().take();
        self.callbacks.run(events);
    }

    fn dispatch_opt(&self, request: Option<RedrawRequest>) -> bool {
        match request {
            Some(request) => {
                self.dispatch(request);
                true
            }
            None => false,
        }
    }

    fn dispatch(&self, request: RedrawRequest) {
        self.flush();
        let inner = Rc::clone(&self.inner);
        let callbacks = Rc::clone(&self.callbacks);
        let url = self.dataset_url.clone();
        spawn_local(async move {
            let fetched = fetch_dataset(&url).await;
            let (outcome, events) = {
                let mut controller = inner.borrow_mut();
                let outcome = controller.complete(request, fetched);
                (outcome, controller.surface_mut().take())
            };
            if let RedrawOutcome::Stale { token, latest } = outcome {
                web_sys::console::debug_1(
                    &format!("Dropped response for request {token}, latest is {latest}").into(),
                );
            }
            callbacks.run(events);
        });
    }
}

/* --------------------------------------------------------------------------
   Helpers
-------------------------------------------------------------------------- */

/// Marker radius for a population, using the default scaling.
/// Negative and NaN inputs count as zero.
#[wasm_bindgen]
pub fn radius_for(population: f64) -> f64 {
    if population.is_nan() || population <= 0.0 {
        return 0.0;
    }
    radius(population as Population)
}

async fn fetch_dataset(url: &str) -> popmap_core::Result<Dataset> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| PopMapError::Fetch(e.to_string()))?;
    if !response.ok() {
        return Err(PopMapError::Fetch(format!(
            "{} {} for {url}",
            response.status(),
            response.status_text()
        )));
    }
    let body = response
        .text()
        .await
        .map_err(|e| PopMapError::Fetch(e.to_string()))?;
    Dataset::from_json_str(&body)
}

fn to_js_error(e: PopMapError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
