//! Incremental "load more" paging over an already-fetched listing.

use crate::config::ListingConfig;

/// How many items of a listing are currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingWindow {
    shown: usize,
    step: usize,
}

impl ListingWindow {
    pub fn new(initial: usize, step: usize) -> Self {
        Self {
            shown: initial,
            step,
        }
    }

    pub fn from_config(config: &ListingConfig) -> Self {
        Self::new(config.initial, config.step)
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.shown.min(items.len())]
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.shown < total
    }

    pub fn load_more(&mut self) {
        self.shown = self.shown.saturating_add(self.step);
    }
}

impl Default for ListingWindow {
    fn default() -> Self {
        Self::from_config(&ListingConfig::default())
    }
}

/// The first `count` items, used for the home page's featured grid.
pub fn featured<T>(items: &[T], count: usize) -> &[T] {
    &items[..count.min(items.len())]
}
