use rand::rngs::StdRng;
use rand::SeedableRng;

use shared::constants::{MAX_SPINS, WHEEL_RESULTS_KEY};
use shared::result_store::{KeyValueStore, MemoryStore, ResultStore};
use shared::shared_wheel_game::{prize_index_at, WheelGame, PRIZES};

fn spin_once(game: &mut WheelGame, rng: &mut StdRng) -> String {
    let outcome = game.start_spin(rng).expect("spin should start");
    let prize = game.complete_spin().expect("spin should complete");
    assert_eq!(prize_index_at(outcome.rotation, PRIZES.len()), outcome.prize_index);
    prize.id.to_string()
}

#[test]
fn test_results_survive_reload() {
    let store = ResultStore::new(MemoryStore::new());
    let mut rng = StdRng::seed_from_u64(42);

    let mut game = WheelGame::with_history(store.load(WHEEL_RESULTS_KEY));
    let first = spin_once(&mut game, &mut rng);
    store.save(WHEEL_RESULTS_KEY, game.history()).unwrap();

    // A fresh visit picks up where the last one stopped
    let mut reloaded = WheelGame::with_history(store.load(WHEEL_RESULTS_KEY));
    assert_eq!(reloaded.history(), &[first]);
    assert_eq!(reloaded.spins_left(), MAX_SPINS - 1);

    while !reloaded.is_final() {
        spin_once(&mut reloaded, &mut rng);
        store.save(WHEEL_RESULTS_KEY, reloaded.history()).unwrap();
    }
    let stored: Vec<String> = store.load(WHEEL_RESULTS_KEY);
    assert_eq!(stored.len(), MAX_SPINS);
    assert!(WheelGame::with_history(stored).is_final());
}

#[test]
fn test_reset_clears_stored_results() {
    let store = ResultStore::new(MemoryStore::new());
    let mut rng = StdRng::seed_from_u64(3);
    let mut game = WheelGame::new();
    for _ in 0..MAX_SPINS {
        spin_once(&mut game, &mut rng);
    }
    store.save(WHEEL_RESULTS_KEY, game.history()).unwrap();

    game.reset();
    store.clear(WHEEL_RESULTS_KEY).unwrap();

    assert!(store.backend().get(WHEEL_RESULTS_KEY).unwrap().is_none());
    let reloaded = WheelGame::with_history(store.load(WHEEL_RESULTS_KEY));
    assert_eq!(reloaded, WheelGame::new());
}

#[test]
fn test_corrupt_results_start_fresh() {
    let store = ResultStore::new(MemoryStore::new());
    store.backend().set(WHEEL_RESULTS_KEY, "{not json").unwrap();
    let game = WheelGame::with_history(store.load(WHEEL_RESULTS_KEY));
    assert_eq!(game.spins_left(), MAX_SPINS);

    store.backend().set(WHEEL_RESULTS_KEY, "[1, 2, 3]").unwrap();
    let game = WheelGame::with_history(store.load(WHEEL_RESULTS_KEY));
    assert!(game.history().is_empty());
}
