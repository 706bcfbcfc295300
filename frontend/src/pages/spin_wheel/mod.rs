mod wheel_face;
mod wheel_utils;

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::constants::{SPIN_DURATION_MS, WHEEL_RESULTS_KEY};
use shared::shared_wheel_game::WheelGame;
use yew::prelude::*;

use crate::components::{ContinueButton, GradientBackground};
use crate::storage::{local_results, persist};
use crate::styles;
use wheel_face::WheelFace;
use wheel_utils::{FinalSummary, ResultDisplay, SpinButton};

#[derive(Properties, PartialEq)]
pub struct SpinWheelProps {
    pub on_next: Callback<()>,
}

enum WheelAction {
    Spin,
    Complete,
    Reset,
}

#[derive(Clone, PartialEq)]
struct WheelState(WheelGame);

impl Reducible for WheelState {
    type Action = WheelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut game = self.0.clone();
        match action {
            WheelAction::Spin => {
                if game.start_spin(&mut rand::thread_rng()).is_none() {
                    return self;
                }
            }
            WheelAction::Complete => match game.complete_spin() {
                Some(prize) => log::info!("Wheel landed on {}", prize.id),
                None => return self,
            },
            WheelAction::Reset => game.reset(),
        }
        Rc::new(WheelState(game))
    }
}

#[function_component(SpinWheel)]
pub fn spin_wheel(props: &SpinWheelProps) -> Html {
    let wheel = use_reducer(|| {
        WheelState(WheelGame::with_history(local_results().load(WHEEL_RESULTS_KEY)))
    });
    let game = &wheel.0;
    let is_spinning = game.is_spinning();

    // The prize is already decided; this only waits out the animation
    {
        let dispatcher = wheel.dispatcher();
        use_effect_with(is_spinning, move |is_spinning| {
            let timeout = is_spinning.then(|| {
                Timeout::new(SPIN_DURATION_MS, move || dispatcher.dispatch(WheelAction::Complete))
            });
            move || drop(timeout)
        });
    }

    // Write through on every change to the results
    {
        let history = game.history().to_vec();
        use_effect_with(history, move |history| {
            if history.is_empty() {
                if let Err(e) = local_results().clear(WHEEL_RESULTS_KEY) {
                    log::error!("Failed to clear wheel results: {}", e);
                }
            } else {
                persist(WHEEL_RESULTS_KEY, history.as_slice());
            }
            || ()
        });
    }

    let on_spin = {
        let dispatcher = wheel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(WheelAction::Spin))
    };

    let on_reset = {
        let dispatcher = wheel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(WheelAction::Reset))
    };

    let show_summary = game.is_final() && !is_spinning;

    html! {
        <GradientBackground gradient={styles::BG_BLUSH}>
            <div class={styles::SCREEN}>
                <div class={styles::CONTENT}>
                    <h2 class={styles::TITLE}>{"Spin for a Surprise 🎡"}</h2>
                    <p class={styles::SUBTITLE}>{"Three spins. Every prize is a promise."}</p>

                    <WheelFace rotation={game.rotation()} {is_spinning} />

                    if !show_summary {
                        <div class="mt-8">
                            <SpinButton {is_spinning} spins_left={game.spins_left()} onclick={on_spin} />
                        </div>
                        <ResultDisplay prize={game.last_result()} show_result={!is_spinning} />
                        if !game.history().is_empty() {
                            <button class="mt-2 text-xs text-gray-500 underline" onclick={on_reset.clone()}>
                                {"Reset"}
                            </button>
                        }
                    } else {
                        <FinalSummary prizes={game.history_prizes()} on_reset={on_reset} />
                        <ContinueButton on_next={props.on_next.clone()} />
                    }
                </div>
            </div>
        </GradientBackground>
    }
}
