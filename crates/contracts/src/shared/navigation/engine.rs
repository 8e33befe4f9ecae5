use super::input::NavigationCommand;
use super::state::NavigationState;
use crate::domain::a002_catalogue_book::{Catalogue, Page};
use std::sync::Arc;

/// Видимые страницы разворота.
///
/// In spread mode `right` is `None` when the left page is the last one; the
/// caller renders a blank sheet there to keep the two-page grid.
#[derive(Debug, Clone, PartialEq)]
pub struct VisiblePages {
    pub left_index: usize,
    pub left: Page,
    pub right: Option<Page>,
    pub spread: bool,
}

impl VisiblePages {
    pub fn needs_blank_sheet(&self) -> bool {
        self.spread && self.right.is_none()
    }

    pub fn contains(&self, index: usize) -> bool {
        index == self.left_index || (self.right.is_some() && index == self.left_index + 1)
    }
}

/// Book navigation over a fixed page sequence.
///
/// Every operation is total: out-of-range requests are clamped, never rejected.
#[derive(Debug, Clone)]
pub struct SpreadEngine {
    pages: Arc<[Page]>,
    state: NavigationState,
}

impl SpreadEngine {
    pub fn new(pages: Arc<[Page]>) -> Self {
        let pages = if pages.is_empty() {
            Arc::from(vec![Page::Toc])
        } else {
            pages
        };
        Self {
            pages,
            state: NavigationState::default(),
        }
    }

    pub fn from_catalogue(catalogue: &Catalogue) -> Self {
        Self::new(catalogue.pages())
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    pub fn is_spread(&self) -> bool {
        self.state.spread
    }

    pub fn max_index(&self) -> usize {
        self.state.max_index(self.pages.len())
    }

    /// Viewport crossed the breakpoint (or initial mount).
    pub fn set_viewport_spread(&mut self, is_wide: bool) {
        self.state.spread = is_wide;
        let max_index = self.max_index();
        if self.state.cursor > max_index {
            log::debug!(
                "navigation: re-clamp cursor {} -> {} (spread={})",
                self.state.cursor,
                max_index,
                is_wide
            );
            self.state.cursor = max_index;
        }
    }

    pub fn next(&mut self) {
        self.state.cursor = (self.state.cursor + self.state.step()).min(self.max_index());
    }

    pub fn previous(&mut self) {
        self.state.cursor = self.state.cursor.saturating_sub(self.state.step());
    }

    /// In spread mode lands on the even left page of the target's spread.
    pub fn jump_to(&mut self, target_index: usize) {
        let aligned = if self.state.spread {
            target_index - target_index % 2
        } else {
            target_index
        };
        self.state.cursor = aligned.min(self.max_index());
        log::debug!(
            "navigation: jump_to {} -> cursor {}",
            target_index,
            self.state.cursor
        );
    }

    pub fn apply(&mut self, command: NavigationCommand) {
        match command {
            NavigationCommand::Next => self.next(),
            NavigationCommand::Previous => self.previous(),
            NavigationCommand::JumpTo(index) => self.jump_to(index),
        }
    }

    pub fn visible_pages(&self) -> VisiblePages {
        let cursor = self.state.cursor;
        let right = if self.state.spread {
            self.pages.get(cursor + 1).cloned()
        } else {
            None
        };
        VisiblePages {
            left_index: cursor,
            left: self.pages[cursor].clone(),
            right,
            spread: self.state.spread,
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.state.cursor > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.state.cursor < self.max_index()
    }

    /// "Page 3 / 9" or, in spread mode, "Page 3-4 / 9".
    pub fn page_indicator(&self) -> String {
        let total = self.pages.len();
        let first = self.state.cursor + 1;
        let last = if self.state.spread {
            (first + 1).min(total)
        } else {
            first
        };
        if last > first {
            format!("Page {first}-{last} / {total}")
        } else {
            format!("Page {first} / {total}")
        }
    }
}
