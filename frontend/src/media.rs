use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use shared::constants::FADE_TICK_MS;
use shared::shared_media::VolumeRamp;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, HtmlAudioElement, HtmlMediaElement};
use yew::NodeRef;

/// Thin wrapper over an audio or video element.
#[derive(Clone, PartialEq)]
pub struct MediaPlayer {
    element: HtmlMediaElement,
}

impl MediaPlayer {
    /// A detached `<audio>` element, like `new Audio()`.
    pub fn audio() -> Result<Self, String> {
        HtmlAudioElement::new()
            .map(|audio| Self { element: audio.unchecked_into() })
            .map_err(|e| format!("Could not create audio element: {:?}", e))
    }

    /// The `<audio>`/`<video>` element behind `node`, once it is mounted.
    pub fn from_node(node: &NodeRef) -> Option<Self> {
        node.cast::<HtmlMediaElement>().map(|element| Self { element })
    }

    pub fn load(&self, src: &str) {
        self.element.set_src(src);
        self.element.load();
    }

    /// Starts playback. Browsers may reject this (autoplay policy), which
    /// comes back as an error rather than a playing element.
    pub async fn play(&self) -> Result<(), String> {
        let promise = self
            .element
            .play()
            .map_err(|e| format!("play() failed: {:?}", e))?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| format!("Playback rejected: {:?}", e))
    }

    pub fn pause(&self) {
        if let Err(e) = self.element.pause() {
            log::warn!("pause() failed: {:?}", e);
        }
    }

    pub fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    pub fn duration(&self) -> f64 {
        self.element.duration()
    }

    pub fn seek(&self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    pub fn volume(&self) -> f64 {
        self.element.volume()
    }

    pub fn set_volume(&self, volume: f64) {
        self.element.set_volume(volume.clamp(0.0, 1.0));
    }

    pub fn set_muted(&self, muted: bool) {
        self.element.set_muted(muted);
    }

    /// Subscribes to a media event. The subscription ends when the listener
    /// is dropped.
    pub fn on<F>(&self, event: &'static str, callback: F) -> EventListener
    where
        F: FnMut(&Event) + 'static,
    {
        EventListener::new(&self.element, event, callback)
    }

    /// Stops playback and lets go of the source.
    pub fn release(&self) {
        self.pause();
        self.element.set_src("");
    }
}

/// Runs at most one volume ramp at a time. Starting a new ramp or calling
/// `cancel` stops the previous one; dropping the last handle stops it too.
#[derive(Clone, Default)]
pub struct Fader {
    slot: Rc<RefCell<Option<Interval>>>,
}

impl Fader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.slot.borrow_mut().take();
    }

    pub fn start<F>(&self, player: MediaPlayer, mut ramp: VolumeRamp, on_done: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();

        let slot: Weak<RefCell<Option<Interval>>> = Rc::downgrade(&self.slot);
        let mut on_done = Some(on_done);
        let interval = Interval::new(FADE_TICK_MS, move || {
            player.set_volume(ramp.tick());
            if !ramp.is_done() {
                return;
            }
            // Stop ticking before handing over, `on_done` may start the next ramp.
            // This drops the running Interval from inside its own callback;
            // wasm-bindgen frees a closure only after it returns.
            if let Some(slot) = slot.upgrade() {
                slot.borrow_mut().take();
            }
            if let Some(done) = on_done.take() {
                done();
            }
        });

        *self.slot.borrow_mut() = Some(interval);
    }
}
