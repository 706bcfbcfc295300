#![cfg(target_arch = "wasm32")]

use frontend::storage::{local_results, LocalStore};
use shared::constants::BUCKET_LIST_KEY;
use shared::result_store::KeyValueStore;
use shared::shared_bucket_list::BucketList;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_bucket_list_round_trips_through_local_storage() {
    let store = local_results();
    store.clear(BUCKET_LIST_KEY).unwrap();

    let mut list = BucketList::new();
    for id in [2, 4, 6, 8, 10] {
        list.toggle(id);
    }
    store.save(BUCKET_LIST_KEY, list.selected()).unwrap();

    let restored = BucketList::from_selected(store.load(BUCKET_LIST_KEY));
    assert_eq!(restored, list);
    assert!(restored.can_continue());

    store.clear(BUCKET_LIST_KEY).unwrap();
}

#[wasm_bindgen_test]
fn test_garbage_in_local_storage_reads_as_empty() {
    LocalStore.set(BUCKET_LIST_KEY, "definitely not json").unwrap();
    let restored: Vec<u32> = local_results().load(BUCKET_LIST_KEY);
    assert!(restored.is_empty());
    LocalStore.remove(BUCKET_LIST_KEY).unwrap();
}
