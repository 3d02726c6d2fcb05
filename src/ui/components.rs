/// The sort control rendered into the host toolbar

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SortButtonProps {
    pub label: AttrValue,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SortButton)]
pub fn sort_button(props: &SortButtonProps) -> Html {
    // Inherit the host's font so the control blends into its toolbar
    let style = "margin-left: 12px; padding: 6px 12px; border: 1px solid currentColor; border-radius: 4px; background: transparent; color: inherit; font: inherit; cursor: pointer;";

    html! {
        <button
            type="button"
            onclick={props.onclick.clone()}
            style={style}
        >
            {props.label.clone()}
        </button>
    }
}
