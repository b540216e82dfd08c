use gloo_console::{error, info, warn};
use gloo_utils::document;
use leaflet::{LatLng, Map, MapOptions, Marker, Popup, PopupOptions, TileLayer, TileLayerOptions};
use mapty_lib::{
    collaborators::{MapView, ViewOptions},
    config::PopupConfig,
    view::PopupContent,
    Coordinate,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue, UnwrapThrowExt};
use web_sys::{
    js_sys::{Array, Function, Object, Reflect},
    HtmlElement, Node,
};
use yew::prelude::*;

/// Leaflet map living in a detached `div` that the app mounts with
/// [`LeafletMap::render`].
pub struct LeafletMap {
    map: Map,
    container: HtmlElement,
    on_click: Callback<Coordinate>,
    click_listener: Option<Closure<dyn FnMut(JsValue)>>,
}

impl LeafletMap {
    pub fn new(on_click: Callback<Coordinate>) -> Self {
        let container: HtmlElement = document()
            .create_element("div")
            .unwrap_throw()
            .dyn_into()
            .unwrap_throw();
        container.set_class_name("map");

        let map = Map::new_with_element(&container, &MapOptions::default());

        Self {
            map,
            container,
            on_click,
            click_listener: None,
        }
    }

    pub fn render(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }
}

impl MapView for LeafletMap {
    fn set_view(&mut self, center: Coordinate, zoom: f64, options: ViewOptions) {
        self.map.invalidate_size(false);
        let lat_lng = LatLng::new(center.latitude, center.longitude);

        if !options.animate {
            self.map.set_view(&lat_lng, zoom);
            return;
        }

        let pan = js_object(&[("duration", options.pan_duration_secs.into())]);
        let view_options = js_object(&[("animate", true.into()), ("pan", pan.into())]);
        let args = Array::of3(&lat_lng, &zoom.into(), &view_options);
        if let Err(err) = call_method(&self.map, "setView", &args) {
            error!("setView failed", err);
        }
    }

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) {
        let opts = TileLayerOptions::new();
        opts.set_update_when_idle(true);
        if let Err(err) = Reflect::set(&opts, &"attribution".into(), &attribution.into()) {
            warn!("Could not set tile attribution", err);
        }
        TileLayer::new_options(url_template, &opts).add_to(&self.map);
    }

    fn subscribe_clicks(&mut self) {
        let on_click = self.on_click.clone();
        let listener = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            match Reflect::get(&event, &"latlng".into()) {
                Ok(lat_lng) if !lat_lng.is_undefined() => {
                    let lat_lng: LatLng = lat_lng.unchecked_into();
                    on_click.emit(Coordinate::new(lat_lng.lat(), lat_lng.lng()));
                }
                _ => warn!("Map click without a position"),
            }
        });

        let args = Array::of2(&"click".into(), listener.as_ref());
        match call_method(&self.map, "on", &args) {
            Ok(_) => {
                info!("Listening for map clicks");
                self.click_listener = Some(listener);
            }
            Err(err) => error!("Could not subscribe to map clicks", err),
        }
    }

    fn add_marker(&mut self, at: Coordinate, popup: &PopupContent, options: &PopupConfig) {
        let popup_opts: PopupOptions = js_object(&[
            ("maxWidth", options.max_width.into()),
            ("minWidth", options.min_width.into()),
            ("autoClose", options.auto_close.into()),
            ("closeOnClick", options.close_on_click.into()),
            ("className", popup.class_name.as_str().into()),
        ])
        .unchecked_into();
        let leaflet_popup = Popup::new(&popup_opts, None);
        leaflet_popup.set_content(&popup.text.as_str().into());

        let marker = Marker::new(&LatLng::new(at.latitude, at.longitude));
        marker.add_to(&self.map);
        marker.bind_popup(&leaflet_popup);
        if let Err(err) = call_method(&marker, "openPopup", &Array::new()) {
            warn!("Could not open popup", err);
        }
    }
}

fn js_object(entries: &[(&str, JsValue)]) -> Object {
    let object = Object::new();
    for (key, value) in entries {
        // Setting a plain property on a fresh object cannot fail.
        let _ = Reflect::set(&object, &(*key).into(), value);
    }
    object
}

/// Calls a Leaflet method the bindings do not expose with these arguments.
fn call_method(target: &JsValue, name: &str, args: &Array) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &name.into())?.dyn_into()?;
    Reflect::apply(&method, target, args)
}
