use mapty_lib::{
    form::{FormField, FormInput},
    WorkoutType,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutFormProps {
    pub hidden: bool,
    pub visible_variant: WorkoutType,
    pub input: FormInput,
    pub distance_ref: NodeRef,
    pub on_input: Callback<(FormField, String)>,
    pub on_type_change: Callback<WorkoutType>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component]
pub fn WorkoutForm(props: &WorkoutFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let onkeydown = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_cancel.emit(());
            }
        })
    };

    let onchange = {
        let on_type_change = props.on_type_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(kind) = select.value().parse::<WorkoutType>() {
                on_type_change.emit(kind);
            }
        })
    };

    let input_row = |label: &'static str, field: FormField, placeholder: &'static str, node_ref: NodeRef| {
        let hidden = field.variant().is_some_and(|kind| kind != props.visible_variant);
        let on_input = props.on_input.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((field, input.value()));
        });

        html! {
            <div class={classes!("form__row", hidden.then_some("form__row--hidden"))}>
                <label class="form__label">{label}</label>
                <input
                    class={format!("form__input form__input--{field}")}
                    placeholder={placeholder}
                    ref={node_ref}
                    value={props.input.get(field).to_owned()}
                    {oninput}
                />
            </div>
        }
    };

    html! {
        <form class={classes!("form", props.hidden.then_some("hidden"))} {onsubmit} {onkeydown}>
            <div class="form__row">
                <label class="form__label">{"Type"}</label>
                <select class="form__input form__input--type" {onchange}>
                    { for WorkoutType::ALL.iter().map(|kind| html! {
                        <option value={kind.tag()} selected={*kind == props.input.workout_type}>
                            {kind.display_name()}
                        </option>
                    }) }
                </select>
            </div>
            { input_row("Distance", FormField::Distance, "km", props.distance_ref.clone()) }
            { input_row("Duration", FormField::Duration, "min", NodeRef::default()) }
            { input_row("Cadence", FormField::Cadence, "step/min", NodeRef::default()) }
            { input_row("Elev Gain", FormField::Elevation, "meters", NodeRef::default()) }
            <button class="form__btn">{"OK"}</button>
        </form>
    }
}
