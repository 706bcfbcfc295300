use yew::prelude::*;

use crate::components::GradientBackground;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct FinaleProps {
    pub on_restart: Callback<()>,
}

#[function_component(Finale)]
pub fn finale(props: &FinaleProps) -> Html {
    let onclick = {
        let on_restart = props.on_restart.clone();
        Callback::from(move |_: MouseEvent| on_restart.emit(()))
    };

    html! {
        <GradientBackground gradient={styles::BG_NIGHT} hearts={24} glyph="✨">
            <div class={styles::SCREEN}>
                <div class={styles::CONTENT}>
                    <div class="text-7xl mb-6 animate-pulse">{"💖"}</div>
                    <h2 class={styles::TITLE_LIGHT}>{"This is just the beginning"}</h2>
                    <p class="text-pink-100 text-lg leading-relaxed mb-4">
                        {"Every game, every song, every little promise in here was made for you."}
                    </p>
                    <p class="text-pink-200 italic mb-10">{"I can't wait for all the chapters we haven't written yet."}</p>
                    <p class="font-dancing text-3xl text-white mb-12">{"Forever yours ♡"}</p>

                    <button class={styles::BUTTON_SECONDARY} {onclick}>
                        {"Start again ↺"}
                    </button>
                </div>
            </div>
        </GradientBackground>
    }
}
