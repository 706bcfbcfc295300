use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressDotsProps {
    pub filled: Vec<bool>,
    #[prop_or_default]
    pub active: Option<usize>,
    /// Makes the dots clickable
    #[prop_or_default]
    pub on_select: Option<Callback<usize>>,
}

#[function_component(ProgressDots)]
pub fn progress_dots(props: &ProgressDotsProps) -> Html {
    html! {
        <div class="flex items-center justify-center gap-2">
            { for props.filled.iter().enumerate().map(|(index, &filled)| {
                let is_active = props.active == Some(index);
                let class = classes!(
                    "h-2.5",
                    "rounded-full",
                    "transition-all",
                    "duration-300",
                    if is_active { "w-6" } else { "w-2.5" },
                    if filled || is_active { "bg-rose-500" } else { "bg-pink-200" },
                );
                let onclick = props.on_select.clone().map(|on_select| {
                    Callback::from(move |_: MouseEvent| on_select.emit(index))
                });
                html! { <button key={index} {class} {onclick} aria-label={format!("Step {}", index + 1)} /> }
            }) }
        </div>
    }
}
