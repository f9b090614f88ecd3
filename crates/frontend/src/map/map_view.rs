//! Applies render plans to a Leaflet map.
//!
//! `MapView` is the only owner of layer handles and of the closures bound to
//! their events. Overlay closures are dropped together with their layers.

use contracts::domain::a002_boundary::DepartmentBoundary;
use contracts::shared::bounds::Bounds;
use contracts::shared::config::ViewConfig;
use contracts::shared::style::PathStyle;
use contracts::usecases::u501_selection::{Overlay, RenderPlan, Viewport};
use leptos::prelude::*;
use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::leaflet::{self, to_js, Layer, LeafletMap};

type Handler = Closure<dyn FnMut(JsValue)>;

pub struct MapView {
    map: LeafletMap,
    view: ViewConfig,
    /// Department layers by position in `BoundaryIndex::departments`
    departments: Vec<Layer>,
    department_handlers: Vec<Handler>,
    overlays: Vec<Layer>,
    overlay_handlers: Vec<Handler>,
    /// First overview is framed without animation
    framed: bool,
}

impl MapView {
    /// Create the map in `element` with tiles and the initial view
    pub fn new(element: &web_sys::HtmlElement, view: &ViewConfig) -> Self {
        let map = leaflet::create_map(element, &to_js(&json!({ "zoomControl": true })));
        map.set_view(&to_js(&view.initial_center), view.initial_zoom);

        leaflet::tile_layer(
            &view.tile_url,
            &to_js(&json!({
                "attribution": view.tile_attribution,
                "maxZoom": view.max_zoom,
            })),
        )
        .add_to(&map);

        Self {
            map,
            view: view.clone(),
            departments: Vec::new(),
            department_handlers: Vec::new(),
            overlays: Vec::new(),
            overlay_handlers: Vec::new(),
            framed: false,
        }
    }

    /// Draw every department boundary once.
    ///
    /// `on_click` receives the join key of the clicked department;
    /// `hover_out` gives the style a boundary returns to on mouseout.
    pub fn draw_departments(
        &mut self,
        departments: &[DepartmentBoundary],
        on_click: Callback<String>,
        hover_out: Callback<usize, PathStyle>,
    ) {
        let tooltip_options = to_js(&json!({ "sticky": true }));

        for (position, department) in departments.iter().enumerate() {
            let layer = leaflet::geo_json(&to_js(&department.feature), &JsValue::UNDEFINED);
            layer.set_style(&to_js(&PathStyle::department_default()));
            layer.bind_tooltip(&department.label, &tooltip_options);

            let hovered = layer.clone();
            let mouseover = Handler::new(move |_: JsValue| {
                hovered.set_style(&to_js(&PathStyle::department_highlight()));
                hovered.bring_to_front();
            });
            layer.on("mouseover", mouseover.as_ref().unchecked_ref());

            let left = layer.clone();
            let mouseout = Handler::new(move |_: JsValue| {
                left.set_style(&to_js(&hover_out.run(position)));
            });
            layer.on("mouseout", mouseout.as_ref().unchecked_ref());

            self.department_handlers.push(mouseover);
            self.department_handlers.push(mouseout);

            // без ключа полигон виден, но не выбирается
            if let Some(key) = department.key.clone() {
                let click = Handler::new(move |_: JsValue| on_click.run(key.clone()));
                layer.on("click", click.as_ref().unchecked_ref());
                self.department_handlers.push(click);
            }

            layer.add_to(&self.map);
            self.departments.push(layer);
        }
    }

    /// Apply a plan: restyle boundaries, rebuild overlays, move the camera
    pub fn apply(&mut self, plan: &RenderPlan) {
        for (position, layer) in self.departments.iter().enumerate() {
            let style = plan.department_styling.tone_for(position).style();
            layer.set_style(&to_js(&style));
        }

        self.clear_overlays();
        if let Some(municipalities) = &plan.municipalities {
            self.add_overlay(municipalities);
        }
        for facility in &plan.facilities {
            self.add_overlay(&facility.overlay);
        }

        self.move_to(&plan.viewport);
    }

    fn clear_overlays(&mut self) {
        for layer in self.overlays.drain(..) {
            self.map.remove_layer(&layer);
        }
        self.overlay_handlers.clear();
    }

    fn add_overlay(&mut self, overlay: &Overlay) {
        let group = leaflet::feature_group();
        let tooltip_options = to_js(&json!({ "sticky": true }));
        let fly_options = to_js(&json!({
            "padding": [self.view.focus_padding, self.view.focus_padding],
            "maxZoom": self.view.max_zoom_on_feature,
        }));

        for item in &overlay.features {
            let layer = leaflet::geo_json(&to_js(&item.feature), &JsValue::UNDEFINED);
            layer.set_style(&to_js(&item.style));
            layer.bind_tooltip(&item.tooltip, &tooltip_options);

            if let Some(bounds) = item.bounds {
                let map = self.map.clone();
                let corners = to_js(&bounds.to_corners());
                let options = fly_options.clone();
                let click = Handler::new(move |_: JsValue| {
                    map.fly_to_bounds(&corners, &options);
                });
                layer.on("click", click.as_ref().unchecked_ref());
                self.overlay_handlers.push(click);
            }

            group.add_layer(&layer);
        }

        group.add_to(&self.map);
        self.overlays.push(group);
    }

    fn move_to(&mut self, viewport: &Viewport) {
        match viewport {
            Viewport::Overview { bounds, padding } => {
                let options = to_js(&json!({ "padding": [padding, padding] }));
                if self.framed {
                    self.map.fly_to_bounds(&corners(bounds), &options);
                } else {
                    self.map.fit_bounds(&corners(bounds), &options);
                    self.framed = true;
                }
            }
            Viewport::Focus { bounds, padding, max_zoom } => {
                self.map.fly_to_bounds(
                    &corners(bounds),
                    &to_js(&json!({ "padding": [padding, padding], "maxZoom": max_zoom })),
                );
            }
            Viewport::Unchanged => {}
        }
    }
}

fn corners(bounds: &Bounds) -> JsValue {
    to_js(&bounds.to_corners())
}
