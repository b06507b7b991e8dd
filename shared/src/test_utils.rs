//! Fixtures shared by the unit tests of this crate.

use crate::{Affordance, Book, BookDetail, BookPreview, Catalog, NamedEntry, RenderSurface, Theme};
use chrono::{TimeZone, Utc};

pub fn book(id: &str, title: &str, author: &str, genres: &[&str]) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        image: format!("https://images.example.com/{}.jpg", id),
        description: format!("Description of {}", title),
        published: Utc.with_ymd_and_hms(1965, 8, 1, 0, 0, 0).unwrap(),
        genres: genres.iter().map(|genre| genre.to_string()).collect(),
    }
}

/// `count` books titled "Book N" by a1 in genre g1
pub fn numbered_books(count: usize) -> Vec<Book> {
    (1..=count)
        .map(|n| book(&format!("n{}", n), &format!("Book {}", n), "a1", &["g1"]))
        .collect()
}

pub fn sample_books() -> Vec<Book> {
    vec![
        book("b1", "The Name of the Wind", "a1", &["g1", "g2"]),
        book("b2", "Dune", "a2", &["g2"]),
        book("b3", "The Fellowship of the Ring", "a3", &["g1"]),
        book("b4", "Children of Dune", "a2", &["g2", "g3"]),
        book("b5", "Mistborn", "a1", &["g3", "g1"]),
    ]
}

pub fn sample_authors() -> Vec<NamedEntry> {
    vec![
        NamedEntry::new("a1", "Patrick Rothfuss"),
        NamedEntry::new("a2", "Frank Herbert"),
        NamedEntry::new("a3", "J. R. R. Tolkien"),
    ]
}

pub fn sample_genres() -> Vec<NamedEntry> {
    vec![
        NamedEntry::new("g1", "Fantasy"),
        NamedEntry::new("g2", "Science Fiction"),
        NamedEntry::new("g3", "Adventure"),
    ]
}

pub fn sample_catalog(page_size: usize) -> Catalog {
    Catalog::new(sample_books(), sample_authors(), sample_genres(), page_size).unwrap()
}

/// Surface calls in the order they were made
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Render(usize),
    Append(usize),
    Affordance(Affordance),
    EmptyMessage(bool),
    Detail(String),
    Theme(Theme),
    CloseSearch,
    ScrollToTop,
}

/// Surface that keeps the latest state and a log of every call
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub rendered: Vec<BookPreview>,
    pub affordance: Option<Affordance>,
    pub empty_message: Option<bool>,
    pub detail: Option<BookDetail>,
    pub theme: Option<Theme>,
    pub events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn rendered_ids(&self) -> Vec<&str> {
        self.rendered.iter().map(|preview| preview.id.as_str()).collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn render_books(&mut self, books: &[BookPreview]) {
        self.rendered = books.to_vec();
        self.events.push(SurfaceEvent::Render(books.len()));
    }

    fn append_books(&mut self, books: &[BookPreview]) {
        self.rendered.extend_from_slice(books);
        self.events.push(SurfaceEvent::Append(books.len()));
    }

    fn set_affordance(&mut self, affordance: Affordance) {
        self.affordance = Some(affordance);
        self.events.push(SurfaceEvent::Affordance(affordance));
    }

    fn set_empty_message(&mut self, visible: bool) {
        self.empty_message = Some(visible);
        self.events.push(SurfaceEvent::EmptyMessage(visible));
    }

    fn show_detail(&mut self, detail: BookDetail) {
        self.events.push(SurfaceEvent::Detail(detail.id.clone()));
        self.detail = Some(detail);
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
        self.events.push(SurfaceEvent::Theme(theme));
    }

    fn close_search(&mut self) {
        self.events.push(SurfaceEvent::CloseSearch);
    }

    fn scroll_to_top(&mut self) {
        self.events.push(SurfaceEvent::ScrollToTop);
    }
}
