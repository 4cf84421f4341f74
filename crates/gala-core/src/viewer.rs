//! Viewer navigation state over the filtered asset list.
//!
//! Owned entirely by the browser and rebuilt on every filter change; no
//! network calls happen here. Selection indexes the *filtered* list, and
//! next/previous wrap around its ends.

use crate::models::{Asset, CategoryFilter};

/// Keyboard input mapped onto viewer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, Clone)]
pub struct ViewerState {
    assets: Vec<Asset>,
    filter: CategoryFilter,
    selected: Option<usize>,
}

impl ViewerState {
    pub fn new(assets: Vec<Asset>) -> Self {
        Self {
            assets,
            filter: CategoryFilter::All,
            selected: None,
        }
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Index into the filtered list, `None` while the viewer is closed.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The assets visible under the current filter, in aggregation order.
    pub fn filtered(&self) -> Vec<&Asset> {
        self.assets
            .iter()
            .filter(|a| self.filter.matches(a.category))
            .collect()
    }

    pub fn selected_asset(&self) -> Option<&Asset> {
        let idx = self.selected?;
        self.filtered().get(idx).copied()
    }

    /// Change the filter. Always closes the viewer; selection is never
    /// carried across filter changes.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.selected = None;
    }

    /// Open the viewer on an index of the filtered list. Out-of-range
    /// indexes are ignored so `selected` stays valid by construction.
    pub fn select(&mut self, index: usize) {
        if index < self.filtered().len() {
            self.selected = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Advance the selection, wrapping from the last index to 0. No-op while
    /// the viewer is closed.
    pub fn next(&mut self) {
        let len = self.filtered().len();
        if let Some(current) = self.selected {
            if len > 0 {
                self.selected = Some((current + 1) % len);
            }
        }
    }

    /// Move the selection back, wrapping from 0 to the last index. No-op
    /// while the viewer is closed.
    pub fn previous(&mut self) {
        let len = self.filtered().len();
        if let Some(current) = self.selected {
            if len > 0 {
                self.selected = Some(if current == 0 { len - 1 } else { current - 1 });
            }
        }
    }

    /// Thin input-mapping layer: escape closes, arrows navigate.
    pub fn handle_key(&mut self, key: ViewerKey) {
        match key {
            ViewerKey::Escape => self.close(),
            ViewerKey::ArrowLeft => self.previous(),
            ViewerKey::ArrowRight => self.next(),
        }
    }
}
