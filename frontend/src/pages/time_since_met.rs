use chrono::Local;
use gloo_timers::callback::Interval;
use shared::constants::ELAPSED_TICK_MS;
use shared::shared_countdown::{Elapsed, LOVE_VOUCHER};
use yew::prelude::*;

use crate::components::{ContinueButton, GradientBackground};
use crate::config::met_at;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct TimeSinceMetProps {
    pub on_next: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct VoucherModalProps {
    on_close: Callback<MouseEvent>,
}

#[function_component(VoucherModal)]
fn voucher_modal(props: &VoucherModalProps) -> Html {
    html! {
        <div class="fixed inset-0 bg-black/60 backdrop-blur-sm flex items-center justify-center z-50 p-4">
            <div class={classes!(styles::CARD, "max-w-sm", "w-full", "text-center", "animate-fade-in")}>
                <div class="text-6xl mb-5 animate-pulse">{"💝"}</div>
                <h3 class="text-2xl font-dancing text-rose-600 mb-3">{LOVE_VOUCHER.heading}</h3>
                <p class="text-gray-700 italic leading-relaxed mb-4">{LOVE_VOUCHER.message}</p>

                <div class="bg-gradient-to-r from-pink-50 to-rose-50 rounded-2xl p-4 border border-rose-200 mb-5 shadow-sm">
                    <p class="text-sm text-gray-600 uppercase tracking-widest mb-1">{LOVE_VOUCHER.kind}</p>
                    <p class="text-lg font-semibold text-rose-600">{LOVE_VOUCHER.title}</p>
                    <p class="text-xs text-gray-500 mt-2">{LOVE_VOUCHER.terms}</p>
                </div>

                <p class={classes!(styles::TEXT_SMALL, "mb-6")}>{LOVE_VOUCHER.usage}</p>
                <button class={styles::BUTTON_PRIMARY} onclick={props.on_close.clone()}>
                    {LOVE_VOUCHER.accept}
                </button>
                <p class="mt-4 text-xs text-gray-400 italic">{LOVE_VOUCHER.footer}</p>
            </div>
        </div>
    }
}

fn elapsed_now() -> Elapsed {
    met_at()
        .map(|met| Elapsed::between(met, Local::now().naive_local()))
        .unwrap_or_default()
}

#[function_component(TimeSinceMet)]
pub fn time_since_met(props: &TimeSinceMetProps) -> Html {
    let elapsed = use_state(elapsed_now);
    let show_voucher = use_state(|| false);

    {
        let elapsed = elapsed.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(ELAPSED_TICK_MS, move || elapsed.set(elapsed_now()));
            move || drop(interval)
        });
    }

    let on_open_voucher = {
        let show_voucher = show_voucher.clone();
        Callback::from(move |_: MouseEvent| show_voucher.set(true))
    };
    let on_close_voucher = {
        let show_voucher = show_voucher.clone();
        Callback::from(move |_: MouseEvent| show_voucher.set(false))
    };

    let units = [
        ("Days", elapsed.days),
        ("Hours", elapsed.hours),
        ("Minutes", elapsed.minutes),
        ("Seconds", elapsed.seconds),
    ];

    html! {
        <GradientBackground gradient={styles::BG_BLUSH} hearts={14}>
            <div class={styles::SCREEN}>
                <div class={styles::CONTENT}>
                    <h2 class="text-3xl font-bold text-rose-600 mb-3 font-dancing">{"Since the moment we met 💖"}</h2>
                    <p class={classes!(styles::TEXT_BODY, "mb-2")}>{"One meeting… and everything felt different."}</p>
                    <p class="text-sm text-pink-500 italic mb-8">{"29th November 2025 • 1:30 PM ✨"}</p>

                    <div class={styles::CARD}>
                        <p class="text-lg font-semibold text-gray-700 mb-6">{"📅 Time we've shared so far"}</p>
                        <div class="grid grid-cols-2 gap-4">
                            { for units.iter().map(|(label, value)| html! {
                                <div key={*label} class="bg-pink-50 rounded-2xl p-4">
                                    <div class="text-3xl font-bold text-rose-500 tabular-nums">{*value}</div>
                                    <div class="text-xs uppercase tracking-wide text-gray-500">{*label}</div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <p class="text-sm italic text-gray-500 mt-6">{"…and I'm counting every second 💞"}</p>
                    <ContinueButton on_next={props.on_next.clone()} />
                </div>
            </div>

            <button
                class="fixed bottom-6 right-6 z-20 text-2xl opacity-60 hover:opacity-100 hover:scale-110 transition-all animate-bounce"
                onclick={on_open_voucher}
                aria-label="A little surprise"
            >
                {"🎁"}
            </button>

            if *show_voucher {
                <VoucherModal on_close={on_close_voucher} />
            }
        </GradientBackground>
    }
}
