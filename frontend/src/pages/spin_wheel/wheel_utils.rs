use yew::prelude::*;
use shared::shared_wheel_game::Prize;

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub prize: Option<&'static Prize>,
    pub show_result: bool,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    if !props.show_result {
        return html! {};
    }

    if let Some(prize) = props.prize {
        return html! {
            <div class="mt-8 mb-4 flex flex-col items-center justify-center animate-fade-in">
                <div
                    class={classes!(
                        "flex",
                        "flex-col",
                        "items-center",
                        "justify-center",
                        "px-6",
                        "py-4",
                        "rounded-2xl",
                        "text-gray-900",
                        "shadow-lg",
                        "border-2",
                        "border-white",
                        "max-w-sm",
                    )}
                    style={format!("background-color: {};", prize.color)}
                >
                    <span class="text-4xl mb-1">{prize.emoji}</span>
                    <span class="font-bold text-xl">{format!("You won: {}", prize.text)}</span>
                    <span class="text-sm mt-2 text-gray-800">{prize.description}</span>
                </div>
            </div>
        };
    }

    html! {}
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub spins_left: usize,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let is_disabled = props.is_spinning || props.spins_left == 0;

    let button_text = if props.is_spinning {
        "Spinning...".to_string()
    } else if props.spins_left == 0 {
        "No spins left".to_string()
    } else {
        format!("Spin ({} left)", props.spins_left)
    };

    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-pink-500 to-rose-500 hover:from-pink-600 hover:to-rose-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0"
    };

    // Add a spinning animation when spinning
    let spin_icon_class = if props.is_spinning {
        "inline-block mr-2 animate-spin"
    } else {
        "hidden"
    };

    html! {
        <div class={classes!("relative", "overflow-hidden", "rounded-full", "w-full", button_class)}>
            <button
                onclick={props.onclick.clone()}
                disabled={is_disabled}
                class="relative w-full px-8 py-4 font-bold text-lg transition-all duration-300 focus:outline-none focus:ring-4 focus:ring-pink-300 focus:ring-opacity-50 bg-transparent"
            >
                <div class="flex items-center justify-center relative z-10">
                    <span class={spin_icon_class}>{"🎡"}</span>
                    <span>{button_text}</span>
                </div>
            </button>
        </div>
    }
}

// Summary once every spin is used
#[derive(Properties, PartialEq)]
pub struct FinalSummaryProps {
    pub prizes: Vec<&'static Prize>,
    pub on_reset: Callback<MouseEvent>,
}

#[function_component(FinalSummary)]
pub fn final_summary(props: &FinalSummaryProps) -> Html {
    html! {
        <div class="bg-white/80 backdrop-blur-md rounded-3xl p-6 shadow-xl border border-pink-100 mt-6">
            <h3 class="text-2xl font-dancing text-rose-600 mb-4">{"Your prizes 🎁"}</h3>
            <ul class="space-y-3 text-left">
                { for props.prizes.iter().enumerate().map(|(index, prize)| html! {
                    <li key={index} class="flex items-start gap-3">
                        <span class="text-2xl">{prize.emoji}</span>
                        <div>
                            <p class="font-semibold text-gray-800">{prize.text}</p>
                            <p class="text-xs text-gray-500">{prize.description}</p>
                        </div>
                    </li>
                }) }
            </ul>
            <p class="text-sm italic text-pink-500 mt-4">{"Redeemable any time. No expiry 💕"}</p>
            <button
                class="mt-4 text-sm text-rose-500 underline hover:text-rose-700"
                onclick={props.on_reset.clone()}
            >
                {"Reset and spin again"}
            </button>
        </div>
    }
}
