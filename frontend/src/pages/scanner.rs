use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use shared::constants::{SCAN_SETTLE_MS, SCAN_TICK_MS};
use shared::shared_scanner::{CameraStatus, ScanMeter, ScanPhase};
use yew::prelude::*;

use crate::components::{ContinueButton, GradientBackground};
use crate::hooks::use_camera;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CutenessScannerProps {
    pub on_next: Callback<()>,
}

enum ScanAction {
    Camera(CameraStatus),
    Start,
    Tick,
    Finish,
}

#[derive(Clone, PartialEq)]
struct ScanState(ScanMeter);

impl Reducible for ScanState {
    type Action = ScanAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut meter = self.0;
        match action {
            ScanAction::Camera(status) => meter.set_camera(status),
            ScanAction::Start => {
                meter.start();
            }
            ScanAction::Tick => {
                if meter.tick() {
                    log::debug!("Scan reached 100%");
                }
            }
            ScanAction::Finish => meter.finish(),
        }
        Rc::new(ScanState(meter))
    }
}

#[function_component(CutenessScanner)]
pub fn cuteness_scanner(props: &CutenessScannerProps) -> Html {
    let camera = use_camera();
    let scan = use_reducer(|| ScanState(ScanMeter::new()));
    let meter = scan.0;

    {
        let dispatcher = scan.dispatcher();
        use_effect_with(camera.status, move |status| {
            dispatcher.dispatch(ScanAction::Camera(*status));
            || ()
        });
    }

    // Fast ticks while scanning, then a short pause before the verdict
    {
        let dispatcher = scan.dispatcher();
        use_effect_with(meter.phase(), move |phase| {
            let mut interval = None;
            let mut settle = None;
            match phase {
                ScanPhase::Scanning => {
                    interval = Some(Interval::new(SCAN_TICK_MS, move || {
                        dispatcher.dispatch(ScanAction::Tick)
                    }));
                }
                ScanPhase::Settling => {
                    settle = Some(Timeout::new(SCAN_SETTLE_MS, move || {
                        dispatcher.dispatch(ScanAction::Finish)
                    }));
                }
                ScanPhase::Idle | ScanPhase::Finished => {}
            }
            move || {
                drop(interval);
                drop(settle);
            }
        });
    }

    let on_start = {
        let dispatcher = scan.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ScanAction::Start))
    };

    let camera_view = match camera.status {
        CameraStatus::Denied => html! {
            <div class="w-64 h-64 mx-auto rounded-full bg-pink-100 flex flex-col items-center justify-center p-6">
                <span class="text-5xl mb-3">{"📷"}</span>
                <p class={styles::TEXT_SMALL}>
                    {"No camera? That's okay. I already know the answer 💕"}
                </p>
            </div>
        },
        _ => html! {
            <div class="relative w-64 h-64 mx-auto rounded-full overflow-hidden border-4 border-pink-300 shadow-xl bg-pink-50">
                <video
                    ref={camera.video_ref.clone()}
                    class="w-full h-full object-cover scale-x-[-1]"
                    autoplay=true
                    muted=true
                    playsinline=true
                />
                if meter.is_scanning() {
                    <div class="absolute inset-x-0 h-1 bg-rose-400/80 animate-scan-line" />
                }
                if camera.status == CameraStatus::Pending {
                    <div class="absolute inset-0 flex items-center justify-center text-pink-400">
                        {"Waking up the camera…"}
                    </div>
                }
            </div>
        },
    };

    let status_view = if meter.show_result() {
        html! {
            <div class={classes!(styles::CARD, "mt-8")}>
                <div class="text-5xl mb-2">{"💯"}</div>
                <h3 class="text-2xl font-bold text-rose-600">{"Cuteness: 100%"}</h3>
                <p class={styles::TEXT_BODY}>{"Scientifically confirmed. Off the charts."}</p>
            </div>
        }
    } else if meter.is_scanning() {
        html! {
            <div class="mt-8">
                <p class="text-rose-500 font-medium mb-3">{meter.stage_message()}</p>
                <div class={styles::PROGRESS_TRACK}>
                    <div class={styles::PROGRESS_FILL} style={format!("width: {}%", meter.progress())} />
                </div>
                <p class={classes!(styles::TEXT_SMALL, "mt-2")}>{format!("{}%", meter.progress())}</p>
            </div>
        }
    } else if meter.can_start() {
        html! {
            <div class="mt-8">
                <button class={styles::BUTTON_PRIMARY} onclick={on_start}>{"Start Scan 🔍"}</button>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <GradientBackground gradient={styles::BG_BLUSH}>
            <div class={styles::SCREEN}>
                <div class={styles::CONTENT}>
                    <h2 class={styles::TITLE}>{"Cuteness Scanner 💘"}</h2>
                    <p class={styles::SUBTITLE}>{"Hold still… measuring something important"}</p>

                    {camera_view}
                    {status_view}

                    if meter.can_continue() {
                        <ContinueButton on_next={props.on_next.clone()} />
                    }
                </div>
            </div>
        </GradientBackground>
    }
}
