//! Browser controller: the event handlers of the catalog page.
//!
//! Each handler runs to completion for one user event, updates the
//! [`BrowseState`] and tells the [`RenderSurface`] what changed.
//!
//! - [`Browser::start`]: first page of the whole catalog plus the seeded theme
//! - [`Browser::submit_filter`]: filter, reset to page 1, replace the list
//! - [`Browser::show_more`]: next page, appended
//! - [`Browser::open_detail`]: detail overlay for a clicked preview
//! - [`Browser::change_theme`]: apply a theme chosen in settings

use crate::filter;
use crate::{
    Book, BookDetail, BookPreview, BrowseState, Catalog, FilterCriteria, RenderSurface, Theme,
};
use std::rc::Rc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Browser {
    catalog: Rc<Catalog>,
    state: BrowseState,
    criteria: FilterCriteria,
    theme: Theme,
}

impl Browser {
    /// New controller showing the unfiltered catalog on page 1
    pub fn new(catalog: Rc<Catalog>) -> Self {
        let state = BrowseState::new(catalog.books().to_vec(), catalog.page_size());
        Self {
            catalog,
            state,
            criteria: FilterCriteria::default(),
            theme: Theme::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &BrowseState {
        &self.state
    }

    /// Criteria of the last submitted search
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Initial render: first page, affordance and the theme seeded from
    /// the system "prefers dark" signal.
    pub fn start(&mut self, prefers_dark: bool, surface: &mut impl RenderSurface) {
        info!(
            books = self.catalog.len(),
            page_size = self.state.page_size(),
            "Starting catalog browser"
        );

        surface.render_books(&self.previews(self.state.visible()));
        self.sync_list_status(surface);
        self.change_theme(Theme::from_preference(prefers_dark), surface);
    }

    /// Apply new search criteria and show the first page of the result
    pub fn submit_filter(&mut self, criteria: FilterCriteria, surface: &mut impl RenderSurface) {
        let filtered = filter::apply(self.catalog.books(), &criteria);
        info!(
            title = %criteria.title,
            author = %criteria.author,
            genre = %criteria.genre,
            matches = filtered.len(),
            "Applied filter"
        );

        self.state = std::mem::take(&mut self.state).reset(filtered);
        self.criteria = criteria;

        surface.render_books(&self.previews(self.state.visible()));
        self.sync_list_status(surface);
        surface.scroll_to_top();
        surface.close_search();
    }

    /// Advance one page and append it
    pub fn show_more(&mut self, surface: &mut impl RenderSurface) {
        self.state = std::mem::take(&mut self.state).advance();

        let slice = self.state.visible();
        if slice.is_empty() {
            debug!(page = self.state.current_page(), "Show more past the last page");
        } else {
            debug!(
                page = self.state.current_page(),
                appended = slice.len(),
                remaining = self.state.remaining(),
                "Showing more books"
            );
        }

        surface.append_books(&self.previews(slice));
        surface.set_affordance(self.state.affordance());
    }

    /// Open the detail overlay for `book_id`. Returns false when the id is
    /// not in the catalog, in which case nothing is shown.
    pub fn open_detail(&self, book_id: &str, surface: &mut impl RenderSurface) -> bool {
        match self.catalog.find_book(book_id) {
            Some(book) => {
                debug!(book_id, "Opening book detail");
                surface.show_detail(BookDetail::new(book, self.author_name(book)));
                true
            }
            None => {
                warn!(book_id, "Preview refers to a book that is not in the catalog");
                false
            }
        }
    }

    pub fn change_theme(&mut self, theme: Theme, surface: &mut impl RenderSurface) {
        debug!(theme = %theme, "Applying theme");
        self.theme = theme;
        surface.set_theme(theme);
    }

    fn author_name<'a>(&'a self, book: &'a Book) -> &'a str {
        self.catalog
            .author_name(&book.author)
            .unwrap_or(&book.author)
    }

    fn previews(&self, books: &[Book]) -> Vec<BookPreview> {
        books
            .iter()
            .map(|book| BookPreview::new(book, self.author_name(book)))
            .collect()
    }

    fn sync_list_status(&self, surface: &mut impl RenderSurface) {
        surface.set_affordance(self.state.affordance());
        surface.set_empty_message(self.state.is_empty());
    }
}
