//! Filter engine: narrows the catalog to the books matching a [`FilterCriteria`].
//!
//! A book matches when all three restrictions hold:
//!
//! - **Title**: the query is blank, or the lowercased title contains the lowercased query
//! - **Author**: the selection is `any`, or equals the book's author id
//! - **Genre**: the selection is `any`, or is one of the book's genre ids
//!
//! Results keep catalog order. Nothing here can fail; a filter with no
//! matches simply yields an empty list.

use crate::{Book, FilterCriteria, Selection};

/// Title restriction. Blankness is judged on the trimmed query, but a
/// non-blank query is matched exactly as typed (case folded).
pub fn title_matches(book: &Book, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    book.title.to_lowercase().contains(&query.to_lowercase())
}

pub fn author_matches(book: &Book, criteria: &FilterCriteria) -> bool {
    criteria.author.admits(&book.author)
}

pub fn genre_matches(book: &Book, criteria: &FilterCriteria) -> bool {
    match &criteria.genre {
        Selection::Any => true,
        Selection::Id(genre) => book.has_genre(genre),
    }
}

/// Whether a single book satisfies every restriction in `criteria`
pub fn matches(book: &Book, criteria: &FilterCriteria) -> bool {
    title_matches(book, &criteria.title)
        && author_matches(book, criteria)
        && genre_matches(book, criteria)
}

/// Apply `criteria` to the catalog, preserving catalog order
pub fn apply(books: &[Book], criteria: &FilterCriteria) -> Vec<Book> {
    books
        .iter()
        .filter(|book| matches(book, criteria))
        .cloned()
        .collect()
}
