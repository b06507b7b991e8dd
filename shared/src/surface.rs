//! Rendering surface the browser controller draws onto.
//!
//! The controller never touches a presentation technology directly; it hands
//! plain values to a [`RenderSurface`]. The web frontend implements it over
//! Yew state, and tests implement it with a recorder.

use crate::{Affordance, Book, Theme};
use serde::{Deserialize, Serialize};

/// What a grid tile needs to draw one book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPreview {
    pub id: String,
    pub title: String,
    pub author_name: String,
    pub image: String,
}

impl BookPreview {
    pub fn new(book: &Book, author_name: &str) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author_name: author_name.to_string(),
            image: book.image.clone(),
        }
    }
}

/// Contents of the detail overlay for one book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetail {
    pub id: String,
    /// Cover image, also used for the blurred backdrop
    pub image: String,
    pub title: String,
    /// "<author> (<year>)"
    pub subtitle: String,
    pub description: String,
}

impl BookDetail {
    pub fn new(book: &Book, author_name: &str) -> Self {
        Self {
            id: book.id.clone(),
            image: book.image.clone(),
            title: book.title.clone(),
            subtitle: format!("{} ({})", author_name, book.published_year()),
            description: book.description.clone(),
        }
    }
}

pub trait RenderSurface {
    /// Replace every rendered book with `books`
    fn render_books(&mut self, books: &[BookPreview]);

    /// Add `books` after the ones already rendered
    fn append_books(&mut self, books: &[BookPreview]);

    fn set_affordance(&mut self, affordance: Affordance);

    /// Show or hide the "no results" message
    fn set_empty_message(&mut self, visible: bool);

    fn show_detail(&mut self, detail: BookDetail);

    fn set_theme(&mut self, theme: Theme);

    fn close_search(&mut self) {}

    fn scroll_to_top(&mut self) {}
}
