use shared::constants::SPIN_DURATION_MS;
use shared::shared_wheel_game::{center_angle, segment_degrees, Prize, PRIZES};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WheelFaceProps {
    pub rotation: f64,
    pub is_spinning: bool,
}

/// Conic gradient with one band per prize, starting at the top and running
/// clockwise. The pointer math in `shared_wheel_game` assumes this origin.
pub fn wheel_gradient(prizes: &[Prize]) -> String {
    let segment = segment_degrees(prizes.len());
    let bands: Vec<String> = prizes
        .iter()
        .enumerate()
        .map(|(index, prize)| {
            let from = index as f64 * segment;
            format!("{} {}deg {}deg", prize.color, from, from + segment)
        })
        .collect();
    format!("conic-gradient(from 0deg, {})", bands.join(", "))
}

// Places a label on the centre line of its segment
fn label_style(index: usize, count: usize) -> String {
    format!("transform: rotate({}deg);", center_angle(index, count))
}

#[function_component(WheelFace)]
pub fn wheel_face(props: &WheelFaceProps) -> Html {
    let count = PRIZES.len();
    // Must stay in step with SPIN_DURATION_MS; the spin completes on that timer
    let transition = if props.is_spinning {
        format!("transform {}ms cubic-bezier(0.17, 0.67, 0.12, 0.99)", SPIN_DURATION_MS)
    } else {
        "none".to_string()
    };
    let style = format!(
        "background: {}; transform: rotate({}deg); transition: {};",
        wheel_gradient(&PRIZES),
        props.rotation,
        transition
    );

    html! {
        <div class="relative w-72 h-72 sm:w-80 sm:h-80 mx-auto">
            // Fixed pointer at the top
            <div class="absolute -top-3 left-1/2 -translate-x-1/2 z-20 w-0 h-0 border-l-[14px] border-r-[14px] border-t-[24px] border-l-transparent border-r-transparent border-t-rose-600 drop-shadow" />

            <div class="w-full h-full rounded-full border-8 border-white shadow-2xl relative overflow-hidden" {style}>
                { for PRIZES.iter().enumerate().map(|(index, prize)| html! {
                    <div
                        key={prize.id}
                        class="absolute inset-0 flex justify-center pt-4"
                        style={label_style(index, count)}
                    >
                        <span class="text-2xl select-none">{prize.emoji}</span>
                    </div>
                }) }
            </div>

            <div class="absolute inset-0 m-auto w-14 h-14 rounded-full bg-white shadow-lg flex items-center justify-center z-10 text-2xl">
                {"💝"}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_bands_cover_the_circle() {
        let gradient = wheel_gradient(&PRIZES);
        assert!(gradient.starts_with("conic-gradient(from 0deg, "));
        assert!(gradient.contains("#fde68a 135deg 180deg"));
        assert!(gradient.ends_with("315deg 360deg)"));
    }
}
