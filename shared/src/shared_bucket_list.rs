use serde::{Serialize, Deserialize};

use crate::constants::MIN_BUCKET_SELECTIONS;

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct BucketItem {
    pub id: u32,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BUCKET_ITEMS: [BucketItem; 17] = [
    BucketItem { id: 1, icon: "📍", title: "Late-night Walks", description: "Wander under the stars 🌙" },
    BucketItem { id: 2, icon: "✈️", title: "Spontaneous Road Trip", description: "No plan, just us 🚗💨" },
    BucketItem { id: 3, icon: "☕", title: "Coffee Dates", description: "Find our favorite café ☕" },
    BucketItem { id: 4, icon: "⭐", title: "Stargazing", description: "Make wishes together ✨" },
    BucketItem { id: 5, icon: "📷", title: "Cute Photos", description: "Capture silly memories 📸" },
    BucketItem { id: 6, icon: "🍴", title: "Cook Together", description: "Our favorite comfort food 🍝" },
    BucketItem { id: 7, icon: "❤️", title: "Slow Dance at Home", description: "No music needed 💃🕺" },
    BucketItem { id: 8, icon: "☕", title: "Rainy-day Chai Talks", description: "Warm cups & deep talks ☔" },
    BucketItem { id: 9, icon: "📍", title: "Get Lost on Purpose", description: "Discover new places 🗺️" },
    BucketItem { id: 10, icon: "⭐", title: "Fall Asleep on Call", description: "Goodnight whispers 🌙📞" },
    BucketItem { id: 11, icon: "📷", title: "Sunset Hand-Holding", description: "Watch the sky glow 🌅" },
    BucketItem { id: 12, icon: "🍴", title: "Ice Cream Crawl", description: "Every flavor counts 🍦" },
    BucketItem { id: 13, icon: "❤️", title: "Letters to Future Us", description: "Open them someday 💌" },
    BucketItem { id: 14, icon: "☕", title: "Shared Playlist", description: "Songs that feel like us 🎶" },
    BucketItem { id: 15, icon: "⭐", title: "Celebrate Small Wins", description: "Every moment matters 🎉" },
    BucketItem { id: 16, icon: "❤️", title: "Random Forehead Kisses", description: "Just because ❤️" },
    BucketItem { id: 17, icon: "📷", title: "Laugh Till It Hurts", description: "Stomach-aching laughs 😂" },
];

/// Chosen bucket-list ids, in the order they were picked.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct BucketList {
    selected: Vec<u32>,
}

impl BucketList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a stored selection, skipping unknown and repeated ids.
    pub fn from_selected(ids: Vec<u32>) -> Self {
        let mut list = Self::new();
        for id in ids {
            if Self::is_known(id) && !list.is_selected(id) {
                list.selected.push(id);
            }
        }
        list
    }

    fn is_known(id: u32) -> bool {
        BUCKET_ITEMS.iter().any(|item| item.id == id)
    }

    /// Selects or deselects `id`. Unknown ids are ignored.
    pub fn toggle(&mut self, id: u32) -> bool {
        if !Self::is_known(id) {
            return false;
        }
        if let Some(position) = self.selected.iter().position(|&s| s == id) {
            self.selected.remove(position);
        } else {
            self.selected.push(id);
        }
        true
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected(&self) -> &[u32] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn can_continue(&self) -> bool {
        self.selected.len() >= MIN_BUCKET_SELECTIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_threshold() {
        let mut list = BucketList::new();
        for id in 1..=4 {
            assert!(list.toggle(id));
        }
        assert!(!list.can_continue());
        list.toggle(9);
        assert!(list.can_continue());
        list.toggle(9);
        assert!(!list.can_continue());
        assert_eq!(list.selected(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let mut list = BucketList::new();
        assert!(!list.toggle(0));
        assert!(!list.toggle(18));
        assert!(list.is_empty());

        let restored = BucketList::from_selected(vec![3, 3, 99, 5]);
        assert_eq!(restored.selected(), &[3, 5]);
    }
}
