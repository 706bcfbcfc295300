use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradientBackgroundProps {
    #[prop_or_default]
    pub children: Html,
    /// Tailwind gradient classes from `styles`
    pub gradient: &'static str,
    #[prop_or(12)]
    pub hearts: usize,
    #[prop_or("♡")]
    pub glyph: &'static str,
}

// Spread hearts over the screen without randomness so re-renders don't move them
fn heart_style(index: usize) -> String {
    let left = (index * 37 + 11) % 100;
    let top = (index * 53 + 7) % 100;
    let size = 12 + (index * 7) % 18;
    let delay = (index * 13) % 6;
    let duration = 6 + (index * 5) % 6;
    format!(
        "left: {}%; top: {}%; font-size: {}px; animation-delay: {}s; animation-duration: {}s;",
        left, top, size, delay, duration
    )
}

/// Full-screen gradient with floating hearts behind the page content.
#[function_component(GradientBackground)]
pub fn gradient_background(props: &GradientBackgroundProps) -> Html {
    html! {
        <div class={classes!("relative", "min-h-screen", "overflow-hidden", props.gradient)}>
            <div class="fixed inset-0 pointer-events-none overflow-hidden">
                { for (0..props.hearts).map(|i| html! {
                    <span key={i} class="absolute text-pink-300 opacity-30 animate-float" style={heart_style(i)}>
                        {props.glyph}
                    </span>
                }) }
            </div>

            <div class="relative z-0">
                {props.children.clone()}
            </div>
        </div>
    }
}
