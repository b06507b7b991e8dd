//! Pagination controller for the book list.
//!
//! Pages are 1-based. [`visible_page`] and [`remaining_count`] are pure slice
//! arithmetic over whatever the filter engine produced; [`BrowseState`] carries
//! the current filter result and page between events.
//!
//! ## Transitions
//!
//! - **Reset** (new filter submitted): page goes back to 1 and the first page
//!   replaces everything rendered so far.
//! - **Advance** ("show more"): page is incremented and the slice for the new
//!   page is appended to what is already rendered.
//!
//! Out-of-range pages are not errors; they are just empty.

use crate::Book;
use serde::{Deserialize, Serialize};

/// Books per page when the catalog does not configure one
pub const DEFAULT_PAGE_SIZE: usize = 36;

/// Items belonging to `page`, clamped to what is available
pub fn visible_page<T>(filtered: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= filtered.len() {
        return &[];
    }
    let end = page.saturating_mul(page_size).min(filtered.len());
    &filtered[start..end]
}

/// Items not yet shown once `page` pages have been rendered
pub fn remaining_count<T>(filtered: &[T], page: usize, page_size: usize) -> usize {
    filtered.len().saturating_sub(page.saturating_mul(page_size))
}

/// Everything rendered after `page` pages: `filtered[..min(page * page_size, len)]`
pub fn rendered_prefix<T>(filtered: &[T], page: usize, page_size: usize) -> &[T] {
    let end = page.saturating_mul(page_size).min(filtered.len());
    &filtered[..end]
}

/// State of the "show more" control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affordance {
    pub remaining: usize,
    pub enabled: bool,
}

impl Affordance {
    pub fn from_remaining(remaining: usize) -> Self {
        Self {
            remaining,
            enabled: remaining > 0,
        }
    }

    pub fn label(&self) -> String {
        format!("Show more ({})", self.remaining)
    }
}

/// Current filter result plus how many pages of it are on screen
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    filtered_books: Vec<Book>,
    current_page: usize,
    page_size: usize,
}

impl BrowseState {
    /// Start on page 1 of `filtered_books`. A zero page size is bumped to 1.
    pub fn new(filtered_books: Vec<Book>, page_size: usize) -> Self {
        Self {
            filtered_books,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn filtered_books(&self) -> &[Book] {
        &self.filtered_books
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_empty(&self) -> bool {
        self.filtered_books.is_empty()
    }

    /// Replace the filter result and go back to page 1
    pub fn reset(self, filtered_books: Vec<Book>) -> Self {
        Self::new(filtered_books, self.page_size)
    }

    /// Move to the next page. There is no last page; past the end the
    /// visible slice is simply empty.
    pub fn advance(self) -> Self {
        Self {
            current_page: self.current_page.saturating_add(1),
            ..self
        }
    }

    /// Slice belonging to the current page only
    pub fn visible(&self) -> &[Book] {
        visible_page(&self.filtered_books, self.current_page, self.page_size)
    }

    /// All books rendered so far, across every page up to the current one
    pub fn rendered(&self) -> &[Book] {
        rendered_prefix(&self.filtered_books, self.current_page, self.page_size)
    }

    pub fn remaining(&self) -> usize {
        remaining_count(&self.filtered_books, self.current_page, self.page_size)
    }

    pub fn affordance(&self) -> Affordance {
        Affordance::from_remaining(self.remaining())
    }
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::numbered_books;
    use proptest::prelude::*;

    fn ids(books: &[Book]) -> Vec<&str> {
        books.iter().map(|book| book.id.as_str()).collect()
    }

    #[test]
    fn test_visible_page_slices_by_page() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(visible_page(&items, 1, 2), &[1, 2]);
        assert_eq!(visible_page(&items, 2, 2), &[3, 4]);
        assert_eq!(visible_page(&items, 3, 2), &[5]);
    }

    #[test]
    fn test_visible_page_out_of_range_is_empty() {
        let items = [1, 2, 3];
        assert!(visible_page(&items, 3, 2).is_empty());
        assert!(visible_page(&items, 100, 2).is_empty());
        assert!(visible_page(&items, 0, 2).is_empty());
        assert!(visible_page(&items, 1, 0).is_empty());
        assert!(visible_page::<i32>(&[], 1, 2).is_empty());
    }

    #[test]
    fn test_visible_page_does_not_overflow() {
        let items = [1, 2, 3];
        assert!(visible_page(&items, usize::MAX, usize::MAX).is_empty());
        assert_eq!(remaining_count(&items, usize::MAX, 2), 0);
    }

    #[test]
    fn test_remaining_count() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(remaining_count(&items, 1, 2), 3);
        assert_eq!(remaining_count(&items, 2, 2), 1);
        assert_eq!(remaining_count(&items, 3, 2), 0);
        assert_eq!(remaining_count(&items, 9, 2), 0);
    }

    #[test]
    fn test_affordance_enabled_only_with_remaining() {
        let affordance = Affordance::from_remaining(3);
        assert!(affordance.enabled);
        assert_eq!(affordance.label(), "Show more (3)");

        let affordance = Affordance::from_remaining(0);
        assert!(!affordance.enabled);
        assert_eq!(affordance.label(), "Show more (0)");
    }

    #[test]
    fn test_first_page_of_five_books() {
        let books = numbered_books(5);
        let state = BrowseState::new(books.clone(), 2);

        assert_eq!(state.current_page(), 1);
        assert_eq!(state.visible(), &books[0..2]);
        assert_eq!(state.remaining(), 3);
        assert!(state.affordance().enabled);
    }

    #[test]
    fn test_advance_appends_next_slice() {
        let books = numbered_books(4);
        let state = BrowseState::new(books.clone(), 2).advance();

        assert_eq!(state.current_page(), 2);
        assert_eq!(state.visible(), &books[2..4]);
        assert_eq!(state.rendered(), &books[..]);
        assert_eq!(state.remaining(), 0);
        assert_eq!(state.affordance(), Affordance::from_remaining(0));
    }

    #[test]
    fn test_advance_past_end_is_empty() {
        let state = BrowseState::new(numbered_books(2), 2).advance().advance();
        assert_eq!(state.current_page(), 3);
        assert!(state.visible().is_empty());
        assert_eq!(state.rendered().len(), 2);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let state = BrowseState::new(numbered_books(10), 3).advance().advance();
        assert_eq!(state.current_page(), 3);

        let replacement = numbered_books(4);
        let state = state.reset(replacement.clone());
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_size(), 3);
        assert_eq!(ids(state.visible()), ids(&replacement[..3]));
        assert_eq!(state.remaining(), 1);
    }

    #[test]
    fn test_reset_to_empty_disables_affordance() {
        let state = BrowseState::new(numbered_books(5), 2).reset(Vec::new());
        assert!(state.is_empty());
        assert!(state.visible().is_empty());
        assert_eq!(state.remaining(), 0);
        assert!(!state.affordance().enabled);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let state = BrowseState::new(numbered_books(3), 0);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.visible().len(), 1);
    }

    proptest! {
        #[test]
        fn prop_pages_concatenate_to_filtered(len in 0usize..60, page_size in 1usize..10) {
            let items: Vec<usize> = (0..len).collect();
            let pages = len / page_size + 2;
            let rebuilt: Vec<usize> = (1..=pages)
                .flat_map(|page| visible_page(&items, page, page_size).iter().copied())
                .collect();
            prop_assert_eq!(rebuilt, items);
        }

        #[test]
        fn prop_remaining_zero_iff_all_rendered(
            len in 0usize..60,
            page in 1usize..20,
            page_size in 1usize..10,
        ) {
            let items: Vec<usize> = (0..len).collect();
            let remaining = remaining_count(&items, page, page_size);
            prop_assert_eq!(remaining == 0, page * page_size >= len);
        }

        #[test]
        fn prop_rendered_count_matches_page(len in 0usize..40, advances in 0usize..10, page_size in 1usize..6) {
            let mut state = BrowseState::new(numbered_books(len), page_size);
            for _ in 0..advances {
                state = state.advance();
            }
            let expected = (state.current_page() * page_size).min(len);
            prop_assert_eq!(state.rendered().len(), expected);
            prop_assert_eq!(state.rendered().len() + state.remaining(), len);
        }
    }
}
