use crate::{
    components::{
        map_component::LeafletMap,
        workout_form::WorkoutForm,
        workout_list::WorkoutItem,
    },
    geolocation::BrowserLocation,
    surface::{BrowserAlert, Sidebar},
};
use gloo_console::{error, info, warn};
use mapty_lib::{
    collaborators::LocationSource,
    error::{ControllerError, LocationError},
    form::FormField,
    Coordinate, WorkoutController, WorkoutId, WorkoutType,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

mod components;
mod config;
mod console_layer;
mod geolocation;
mod surface;

enum MainMsg {
    Located(Result<Coordinate, LocationError>),
    MapClicked(Coordinate),
    Input(FormField, String),
    TypeChanged(WorkoutType),
    Submit,
    Cancel,
    RowClicked(WorkoutId),
}

struct Model {
    controller: WorkoutController<LeafletMap, Sidebar, BrowserAlert>,
    distance_ref: NodeRef,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let config = config::load();

        let map = LeafletMap::new(link.callback(MainMsg::MapClicked));
        let sidebar = Sidebar::new(config.form.variant_on_load);
        let controller = WorkoutController::new(config, map, sidebar, BrowserAlert);

        let located = link.callback(MainMsg::Located);
        spawn_local(async move {
            located.emit(BrowserLocation.request_once().await);
        });

        Self {
            controller,
            distance_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::Located(position) => {
                if let Err(err) = self.controller.on_location(position) {
                    error!(err.to_string());
                }
            }
            MainMsg::MapClicked(at) => {
                if let Err(err) = self.controller.on_map_click(at) {
                    warn!(err.to_string());
                }
            }
            MainMsg::Input(field, value) => {
                self.controller.surface_mut().input.set(field, value);
            }
            MainMsg::TypeChanged(kind) => {
                self.controller.surface_mut().input.workout_type = kind;
                self.controller.on_type_change(kind);
            }
            MainMsg::Submit => {
                let input = self.controller.surface().input.clone();
                match self.controller.on_submit(&input) {
                    Ok(id) => info!(format!("Logged workout {id}")),
                    Err(ControllerError::Input(err)) => info!(format!("Rejected input: {err}")),
                    Err(err) => warn!(err.to_string()),
                }
            }
            MainMsg::Cancel => self.controller.cancel_input(),
            MainMsg::RowClicked(id) => {
                if let Err(err) = self.controller.on_row_click(&id) {
                    warn!(err.to_string());
                }
            }
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.controller.surface_mut().take_focus_request() {
            if let Some(input) = self.distance_ref.cast::<HtmlInputElement>() {
                if let Err(err) = input.focus() {
                    error!("focus failed", err);
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let sidebar = self.controller.surface();

        let on_input = link.callback(|(field, value): (FormField, String)| MainMsg::Input(field, value));
        let on_type_change = link.callback(MainMsg::TypeChanged);
        let on_submit = link.callback(|()| MainMsg::Submit);
        let on_cancel = link.callback(|()| MainMsg::Cancel);

        // Rows are found through their `data-id`, the same tag the list was rendered with
        let on_list_click = link.batch_callback(|e: MouseEvent| {
            let target: Element = e.target_dyn_into()?;
            let row = target.closest(".workout").ok().flatten()?;
            row.get_attribute("data-id")
                .map(|id| MainMsg::RowClicked(WorkoutId::from(id)))
        });

        html! {
            <>
                <div class="sidebar">
                    <ul class="workouts" onclick={on_list_click}>
                        <WorkoutForm
                            hidden={sidebar.form_hidden}
                            visible_variant={sidebar.visible_variant}
                            input={sidebar.input.clone()}
                            distance_ref={self.distance_ref.clone()}
                            {on_input}
                            {on_type_change}
                            {on_submit}
                            {on_cancel}
                        />
                        { for sidebar.rows.iter().map(|row| html! {
                            <WorkoutItem key={row.id.to_string()} row={row.clone()} />
                        }) }
                    </ul>
                    <p class="copyright">{"Mapty: log your workouts on the map"}</p>
                </div>
                <div id="map">
                    {self.controller.map().render()}
                </div>
            </>
        }
    }
}

fn main() {
    console_layer::init(tracing::Level::INFO);
    yew::Renderer::<Model>::new().render();
}
