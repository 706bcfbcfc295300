use std::rc::Rc;

use gloo_timers::callback::Interval;
use shared::constants::STORY_LINE_MS;
use shared::shared_journey::{StoryReel, STORY_LINES};
use yew::prelude::*;

use crate::components::{GradientBackground, ProgressDots};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SplashProps {
    pub on_next: Callback<()>,
}

enum ReelAction {
    Advance,
    JumpTo(usize),
}

#[derive(Clone, PartialEq)]
struct ReelState(StoryReel);

impl Reducible for ReelState {
    type Action = ReelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut reel = self.0;
        match action {
            ReelAction::Advance => {
                reel.advance();
            }
            ReelAction::JumpTo(index) => reel.jump_to(index),
        }
        Rc::new(ReelState(reel))
    }
}

#[function_component(Splash)]
pub fn splash(props: &SplashProps) -> Html {
    let reel = use_reducer(|| ReelState(StoryReel::new(STORY_LINES.len())));
    let finished = reel.0.is_finished();

    // Advance one line at a time and stop on the last one
    {
        let dispatcher = reel.dispatcher();
        use_effect_with(finished, move |finished| {
            let interval = (!*finished).then(|| {
                Interval::new(STORY_LINE_MS, move || dispatcher.dispatch(ReelAction::Advance))
            });
            move || drop(interval)
        });
    }

    let on_select = {
        let dispatcher = reel.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(ReelAction::JumpTo(index)))
    };

    let onclick = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    let index = reel.0.index();
    let filled: Vec<bool> = (0..STORY_LINES.len()).map(|i| i <= index).collect();

    html! {
        <GradientBackground gradient={styles::BG_LAVENDER} hearts={16}>
            <div class={styles::SCREEN}>
                <div class={styles::CONTENT}>
                    <div class="text-6xl mb-6 animate-bounce">{"💖"}</div>
                    <h1 key={index} class="text-3xl font-dancing text-rose-600 mb-10 min-h-[4rem] animate-fade-in">
                        {STORY_LINES[index]}
                    </h1>

                    <ProgressDots {filled} active={Some(index)} on_select={Some(on_select)} />

                    <div class="mt-12">
                        <button class={styles::BUTTON_PRIMARY} {onclick}>
                            {"Start Our Journey ✨"}
                        </button>
                    </div>
                </div>
            </div>
        </GradientBackground>
    }
}
