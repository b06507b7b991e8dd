//! Static, read-only book catalog.
//!
//! The catalog is handed over wholesale at start-up, normally as a JSON
//! document embedded in the frontend:
//!
//! ```json
//! {
//!   "page_size": 36,
//!   "authors": [{ "id": "a1", "name": "Frank Herbert" }],
//!   "genres": [{ "id": "g1", "name": "Science Fiction" }],
//!   "books": [{ "id": "b1", "title": "Dune", "author": "a1", "...": "..." }]
//! }
//! ```
//!
//! Loading validates the cross references once, so lookups afterwards can
//! treat the data as trusted.

use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::{Book, NamedEntry, ANY};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate book id `{0}`")]
    DuplicateBook(String),
    #[error("duplicate {table} id `{id}`")]
    DuplicateEntry { table: &'static str, id: String },
    #[error("book `{book}` references unknown author `{author}`")]
    UnknownAuthor { book: String, author: String },
    #[error("book `{book}` references unknown genre `{genre}`")]
    UnknownGenre { book: String, genre: String },
    #[error("page size must be at least 1")]
    InvalidPageSize,
}

/// Option for an author or genre `<select>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Id to display-name lookup that keeps source order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameTable {
    entries: Vec<NamedEntry>,
}

impl NameTable {
    fn new(table: &'static str, entries: Vec<NamedEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateEntry {
                    table,
                    id: entry.id.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.name.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Leading `any` option labelled `any_label`, then every entry in order
    pub fn options(&self, any_label: &str) -> Vec<SelectOption> {
        std::iter::once(SelectOption {
            value: ANY.to_string(),
            label: any_label.to_string(),
        })
        .chain(self.entries.iter().map(|entry| SelectOption {
            value: entry.id.clone(),
            label: entry.name.clone(),
        }))
        .collect()
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Deserialize)]
struct CatalogDocument {
    books: Vec<Book>,
    authors: Vec<NamedEntry>,
    genres: Vec<NamedEntry>,
    #[serde(default = "default_page_size")]
    page_size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
    authors: NameTable,
    genres: NameTable,
    page_size: usize,
}

impl Catalog {
    pub fn new(
        books: Vec<Book>,
        authors: Vec<NamedEntry>,
        genres: Vec<NamedEntry>,
        page_size: usize,
    ) -> Result<Self, CatalogError> {
        if page_size == 0 {
            return Err(CatalogError::InvalidPageSize);
        }

        let authors = NameTable::new("author", authors)?;
        let genres = NameTable::new("genre", genres)?;

        let mut seen = HashSet::new();
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(CatalogError::DuplicateBook(book.id.clone()));
            }
            if !authors.contains(&book.author) {
                return Err(CatalogError::UnknownAuthor {
                    book: book.id.clone(),
                    author: book.author.clone(),
                });
            }
            if let Some(genre) = book.genres.iter().find(|genre| !genres.contains(genre)) {
                return Err(CatalogError::UnknownGenre {
                    book: book.id.clone(),
                    genre: genre.clone(),
                });
            }
        }

        Ok(Self {
            books,
            authors,
            genres,
            page_size,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(
            document.books,
            document.authors,
            document.genres,
            document.page_size,
        )
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn authors(&self) -> &NameTable {
        &self.authors
    }

    pub fn genres(&self) -> &NameTable {
        &self.genres
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Look up a book by id, e.g. from a clicked preview
    pub fn find_book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn author_name(&self, author_id: &str) -> Option<&str> {
        self.authors.get(author_id)
    }

    pub fn genre_name(&self, genre_id: &str) -> Option<&str> {
        self.genres.get(genre_id)
    }

    pub fn author_options(&self) -> Vec<SelectOption> {
        self.authors.options("All Authors")
    }

    pub fn genre_options(&self) -> Vec<SelectOption> {
        self.genres.options("All Genres")
    }
}
