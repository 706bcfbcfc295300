use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use shared::constants::{PUZZLE_REVEAL_DELAY_MS, PUZZLE_TICK_MS};
use shared::shared_media::format_time;
use shared::shared_puzzle_game::{MoveOutcome, PuzzleGame, PuzzlePhase, TickOutcome};
use yew::prelude::*;

use crate::components::{ContinueButton, GradientBackground};
use crate::config::PUZZLE_IMAGE_URL;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct MemoryPuzzleProps {
    pub on_next: Callback<()>,
}

enum PuzzleAction {
    Slide(usize),
    Tick,
    AutoSolve,
    Reshuffle,
}

#[derive(Clone, PartialEq)]
struct PuzzleState(PuzzleGame);

impl Reducible for PuzzleState {
    type Action = PuzzleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut game = self.0.clone();
        match action {
            PuzzleAction::Slide(position) => {
                if game.move_tile(position) == MoveOutcome::Ignored {
                    return self;
                }
            }
            PuzzleAction::Tick => match game.tick() {
                TickOutcome::Idle => return self,
                TickOutcome::Expired => log::info!("Puzzle timer ran out, auto-solve unlocked"),
                TickOutcome::Counting(_) => {}
            },
            PuzzleAction::AutoSolve => {
                if !game.auto_solve() {
                    return self;
                }
            }
            PuzzleAction::Reshuffle => game.reshuffle(&mut rand::thread_rng()),
        }
        Rc::new(PuzzleState(game))
    }
}

// Slice of the photo that belongs to `tile` in its solved position
fn tile_style(tile: usize, size: usize) -> String {
    let (row, col) = (tile / size, tile % size);
    let step = 100.0 / (size - 1).max(1) as f64;
    format!(
        "background-image: url('{}'); background-size: {}% {}%; background-position: {}% {}%;",
        PUZZLE_IMAGE_URL,
        size * 100,
        size * 100,
        col as f64 * step,
        row as f64 * step,
    )
}

#[function_component(MemoryPuzzle)]
pub fn memory_puzzle(props: &MemoryPuzzleProps) -> Html {
    let puzzle = use_reducer(|| PuzzleState(PuzzleGame::new(&mut rand::thread_rng())));
    let revealed = use_state(|| false);
    let game = &puzzle.0;
    let phase = game.phase();

    // One tick per second until solved or out of time
    {
        let dispatcher = puzzle.dispatcher();
        use_effect_with(phase, move |phase| {
            let interval = (*phase == PuzzlePhase::Shuffled).then(|| {
                Interval::new(PUZZLE_TICK_MS, move || dispatcher.dispatch(PuzzleAction::Tick))
            });
            move || drop(interval)
        });
    }

    // Let the finished picture sit for a moment before the message
    {
        let revealed = revealed.clone();
        use_effect_with(phase == PuzzlePhase::Complete, move |complete| {
            revealed.set(false);
            let timeout = complete.then(|| {
                Timeout::new(PUZZLE_REVEAL_DELAY_MS, move || revealed.set(true))
            });
            move || drop(timeout)
        });
    }

    let on_auto_solve = {
        let dispatcher = puzzle.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PuzzleAction::AutoSolve))
    };

    let on_reshuffle = {
        let dispatcher = puzzle.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PuzzleAction::Reshuffle))
    };

    let grid = game.grid();
    let size = grid.size();
    let is_complete = game.is_complete();

    let tiles = grid.tiles().iter().enumerate().map(|(position, &tile)| {
        if grid.is_empty_at(position) && !is_complete {
            return html! { <div key={tile} class="aspect-square rounded-lg bg-pink-100/60" /> };
        }
        let onclick = {
            let dispatcher = puzzle.dispatcher();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(PuzzleAction::Slide(position)))
        };
        html! {
            <button
                key={tile}
                class="aspect-square rounded-lg shadow-md bg-cover transition-transform duration-150 active:scale-95"
                style={tile_style(tile, size)}
                {onclick}
                disabled={is_complete}
                aria-label={format!("Tile {}", tile + 1)}
            />
        }
    });

    let timer_class = if game.seconds_left() <= 30 { "text-rose-600 animate-pulse" } else { "text-gray-600" };

    html! {
        <GradientBackground gradient={styles::BG_BLUSH}>
            <div class={styles::SCREEN}>
                <div class={styles::CONTENT}>
                    <h2 class={styles::TITLE}>{"Piece Us Together 🧩"}</h2>
                    <p class={styles::SUBTITLE}>{"Slide the tiles to reveal our memory"}</p>

                    <div class={classes!("font-mono", "text-lg", "mb-4", timer_class)}>
                        {format!("⏱ {}", format_time(game.seconds_left() as f64))}
                    </div>

                    <div
                        class="grid gap-1.5 p-2 bg-white/70 rounded-2xl shadow-xl mx-auto"
                        style={format!("grid-template-columns: repeat({}, minmax(0, 1fr));", size)}
                    >
                        { for tiles }
                    </div>

                    <div class="flex justify-center gap-3 mt-6">
                        if game.can_auto_solve() {
                            <button class={styles::BUTTON_PRIMARY} onclick={on_auto_solve}>
                                {"Solve it for me 🪄"}
                            </button>
                        }
                        if !is_complete {
                            <button class={styles::BUTTON_SECONDARY} onclick={on_reshuffle}>
                                {"Shuffle again"}
                            </button>
                        }
                    </div>

                    if *revealed {
                        <div class={classes!(styles::CARD, "mt-8", "animate-fade-in")}>
                            <h3 class="text-2xl font-dancing text-rose-600 mb-2">{"Every piece fits 💖"}</h3>
                            <p class={styles::TEXT_BODY}>{"Just like us."}</p>
                        </div>
                        <ContinueButton on_next={props.on_next.clone()} />
                    }
                </div>
            </div>
        </GradientBackground>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_style_corners() {
        let first = tile_style(0, 3);
        assert!(first.contains("background-position: 0% 0%"));
        let last = tile_style(8, 3);
        assert!(last.contains("background-position: 100% 100%"));
        assert!(last.contains("background-size: 300% 300%"));
    }
}
