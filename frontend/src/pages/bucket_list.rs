use std::rc::Rc;

use shared::constants::{BUCKET_LIST_KEY, MIN_BUCKET_SELECTIONS};
use shared::shared_bucket_list::{BucketList, BUCKET_ITEMS};
use yew::prelude::*;

use crate::components::{ContinueButton, GradientBackground};
use crate::storage::{local_results, persist};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct BucketListProps {
    pub on_next: Callback<()>,
}

#[derive(Clone, Default, PartialEq)]
struct BucketState(BucketList);

impl Reducible for BucketState {
    type Action = u32;

    fn reduce(self: Rc<Self>, id: Self::Action) -> Rc<Self> {
        let mut list = self.0.clone();
        if !list.toggle(id) {
            return self;
        }
        Rc::new(BucketState(list))
    }
}

#[function_component(BucketListPage)]
pub fn bucket_list_page(props: &BucketListProps) -> Html {
    let bucket = use_reducer(|| {
        BucketState(BucketList::from_selected(local_results().load(BUCKET_LIST_KEY)))
    });
    let list = &bucket.0;

    // Saved on every change, an empty selection included
    {
        let selected = list.selected().to_vec();
        use_effect_with(selected, |selected| {
            persist(BUCKET_LIST_KEY, selected.as_slice());
            || ()
        });
    }

    let items = BUCKET_ITEMS.iter().map(|item| {
        let selected = list.is_selected(item.id);
        let onclick = {
            let dispatcher = bucket.dispatcher();
            let id = item.id;
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(id))
        };

        html! {
            <button
                key={item.id}
                class={classes!(
                    "flex",
                    "items-center",
                    "gap-3",
                    "p-4",
                    "rounded-2xl",
                    "text-left",
                    "border-2",
                    "transition-all",
                    "duration-200",
                    if selected {
                        "border-rose-400 bg-rose-50 shadow-md scale-[1.02]"
                    } else {
                        "border-transparent bg-white/70 hover:bg-white"
                    },
                )}
                {onclick}
            >
                <span class="text-2xl">{item.icon}</span>
                <div class="flex-1">
                    <h3 class="font-semibold text-gray-800">{item.title}</h3>
                    <p class="text-xs text-gray-500">{item.description}</p>
                </div>
                <span class="text-xl">{ if selected { "💖" } else { "🤍" } }</span>
            </button>
        }
    });

    let count = list.len();
    let hint = (!list.can_continue())
        .then(|| format!("Pick at least {} ({} chosen)", MIN_BUCKET_SELECTIONS, count));

    html! {
        <GradientBackground gradient={styles::BG_BLUSH}>
            <div class={styles::SCREEN_SCROLL}>
                <div class={classes!(styles::CONTENT_WIDE, "text-center")}>
                    <h2 class={styles::TITLE}>{"Our Bucket List 📝"}</h2>
                    <p class={styles::SUBTITLE}>{"Choose the adventures you want with me"}</p>

                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-3 max-w-3xl mx-auto">
                        { for items }
                    </div>

                    <ContinueButton on_next={props.on_next.clone()} enabled={list.can_continue()} {hint} />
                </div>
            </div>
        </GradientBackground>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_to_back_toggles_both_land() {
        let state = Rc::new(BucketState::default());
        let state = state.reduce(3);
        let state = state.reduce(7);
        assert_eq!(state.0.selected(), &[3, 7]);

        let state = state.reduce(3);
        assert_eq!(state.0.selected(), &[7]);
    }

    #[test]
    fn test_unknown_id_keeps_the_same_state() {
        let state = Rc::new(BucketState::default()).reduce(2);
        let same = state.clone().reduce(404);
        assert!(Rc::ptr_eq(&state, &same));
    }
}
