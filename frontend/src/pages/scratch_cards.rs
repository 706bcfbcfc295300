use shared::shared_scratch_cards::{ScratchDeck, SCRATCH_CARDS};
use yew::prelude::*;

use crate::components::{ContinueButton, GradientBackground, ProgressDots};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ScratchCardsProps {
    pub on_next: Callback<()>,
}

#[function_component(ScratchCards)]
pub fn scratch_cards(props: &ScratchCardsProps) -> Html {
    let deck = use_state(ScratchDeck::default);

    let cards = SCRATCH_CARDS.iter().enumerate().map(|(index, card)| {
        let revealed = deck.is_revealed(index);
        let onclick = {
            let deck = deck.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*deck).clone();
                if next.scratch(index) {
                    deck.set(next);
                }
            })
        };

        html! {
            <button
                key={card.id}
                class="relative h-40 rounded-2xl overflow-hidden shadow-lg focus:outline-none"
                {onclick}
            >
                <div class="absolute inset-0 bg-white flex flex-col items-center justify-center p-4">
                    <span class="text-3xl mb-1">{card.emoji}</span>
                    <h3 class="font-bold text-rose-600">{card.title}</h3>
                    <p class="text-xs text-gray-600 mt-1">{card.content}</p>
                </div>
                <div class={classes!(
                    "absolute",
                    "inset-0",
                    "bg-gradient-to-br",
                    "from-gray-300",
                    "via-gray-200",
                    "to-gray-400",
                    "flex",
                    "items-center",
                    "justify-center",
                    "transition-opacity",
                    "duration-500",
                    if revealed { "opacity-0 pointer-events-none" } else { "opacity-100" },
                )}>
                    <span class="text-gray-600 font-semibold">{"Tap to scratch ✨"}</span>
                </div>
            </button>
        }
    });

    let filled: Vec<bool> = (0..SCRATCH_CARDS.len()).map(|i| deck.is_revealed(i)).collect();
    let remaining = SCRATCH_CARDS.len() - deck.revealed_count();

    html! {
        <GradientBackground gradient={styles::BG_BLUSH}>
            <div class={styles::SCREEN_SCROLL}>
                <div class={classes!(styles::CONTENT_WIDE, "text-center")}>
                    <h2 class={styles::TITLE}>{"Scratch & Reveal 🎟️"}</h2>
                    <p class={styles::SUBTITLE}>{"Little promises, hidden just for you"}</p>

                    <div class="mb-6">
                        <ProgressDots {filled} />
                    </div>

                    <div class="grid grid-cols-2 sm:grid-cols-3 gap-4 max-w-2xl mx-auto">
                        { for cards }
                    </div>

                    <ContinueButton
                        on_next={props.on_next.clone()}
                        enabled={deck.all_revealed()}
                        hint={(!deck.all_revealed()).then(|| format!("{} left to scratch", remaining))}
                    />
                </div>
            </div>
        </GradientBackground>
    }
}
