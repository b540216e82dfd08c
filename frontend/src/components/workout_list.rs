use mapty_lib::view::WorkoutRow;
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutItemProps {
    pub row: WorkoutRow,
}

/// One logged workout. Clicks are picked up by the list through `data-id`.
#[function_component]
pub fn WorkoutItem(props: &WorkoutItemProps) -> Html {
    let row = &props.row;

    html! {
        <li class={row.class_name()} data-id={row.id.to_string()}>
            <h2 class="workout__title">{row.title.clone()}</h2>
            { for row.fields.iter().map(|field| html! {
                <div class="workout__details">
                    <span class="workout__icon">{field.icon}</span>
                    <span class="workout__value">{field.value.clone()}</span>
                    <span class="workout__unit">{field.unit}</span>
                </div>
            }) }
        </li>
    }
}
