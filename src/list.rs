//! The current result set and its pagination.

use crate::model::Recipe;

/// One numbered button of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// Everything needed to draw the pagination controls.
///
/// Derived from a single read of the current page so that it can never
/// disagree with the visible card slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub page_count: usize,
    pub buttons: Vec<PageButton>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Pagination {
    /// The controls are hidden unless there is more than one page.
    pub fn visible(&self) -> bool {
        self.page_count > 1
    }
}

/// Holds the most recently loaded recipes and the active page.
#[derive(Debug, Clone)]
pub struct RecipeListStore {
    items: Vec<Recipe>,
    page_size: usize,
    current_page: usize,
}

impl RecipeListStore {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size,
            current_page: 1,
        }
    }

    /// Replace the result set and go back to the first page.
    pub fn load(&mut self, items: Vec<Recipe>) {
        self.items = items;
        self.current_page = 1;
    }

    /// Replace the result set but stay on the current page, clamped to the new range.
    pub fn refresh(&mut self, items: Vec<Recipe>) {
        self.items = items;
        self.current_page = self.current_page.clamp(1, self.page_count().max(1));
    }

    pub fn items(&self) -> &[Recipe] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.items.iter().find(|r| r.id == id)
    }

    /// The visible slice at the configured page size.
    pub fn page(&self) -> &[Recipe] {
        self.page_of(self.page_size)
    }

    pub fn page_count(&self) -> usize {
        self.page_count_of(self.page_size)
    }

    /// Items in `[(current-1)*page_size, current*page_size)`, clipped to the set.
    pub fn page_of(&self, page_size: usize) -> &[Recipe] {
        if page_size == 0 {
            return &[];
        }
        let start = (self.current_page - 1)
            .saturating_mul(page_size)
            .min(self.items.len());
        let end = start.saturating_add(page_size).min(self.items.len());
        &self.items[start..end]
    }

    pub fn page_count_of(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.items.len().div_ceil(page_size)
    }

    /// Jump to page `n`. Out of range requests are ignored.
    pub fn go_to(&mut self, n: usize) {
        if n >= 1 && n <= self.page_count() {
            self.current_page = n;
        }
    }

    pub fn next(&mut self) {
        self.go_to(self.current_page + 1);
    }

    pub fn prev(&mut self) {
        if self.current_page > 1 {
            self.go_to(self.current_page - 1);
        }
    }

    pub fn pagination(&self) -> Pagination {
        let current_page = self.current_page;
        let page_count = self.page_count();
        Pagination {
            current_page,
            page_count,
            buttons: (1..=page_count)
                .map(|number| PageButton {
                    number,
                    active: number == current_page,
                })
                .collect(),
            prev_disabled: current_page == 1,
            next_disabled: current_page >= page_count,
        }
    }
}
