use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ContinueButtonProps {
    pub on_next: Callback<()>,
    #[prop_or(true)]
    pub enabled: bool,
    #[prop_or("Continue 💕")]
    pub label: &'static str,
    #[prop_or_default]
    pub hint: Option<String>,
}

#[function_component(ContinueButton)]
pub fn continue_button(props: &ContinueButtonProps) -> Html {
    let onclick = {
        let on_next = props.on_next.clone();
        let enabled = props.enabled;
        Callback::from(move |_: MouseEvent| {
            if enabled {
                on_next.emit(());
            }
        })
    };

    let class = if props.enabled { styles::BUTTON_PRIMARY } else { styles::BUTTON_DISABLED };

    html! {
        <div class="flex flex-col items-center gap-2 mt-8">
            <button {class} {onclick} disabled={!props.enabled}>
                {props.label}
            </button>
            if let Some(hint) = &props.hint {
                <p class={styles::TEXT_SMALL}>{hint.clone()}</p>
            }
        </div>
    }
}
