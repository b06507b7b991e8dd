use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod browser;
pub mod catalog;
pub mod filter;
pub mod pagination;
pub mod surface;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_utils;

pub use browser::Browser;
pub use catalog::{Catalog, CatalogError, NameTable, SelectOption};
pub use pagination::{Affordance, BrowseState, DEFAULT_PAGE_SIZE};
pub use surface::{BookDetail, BookPreview, RenderSurface};
pub use theme::{Rgb, Theme, ThemeColors, ThemeParseError};

/// Select value meaning "no restriction" for the author and genre filters.
pub const ANY: &str = "any";

/// A single book in the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    /// Author id, resolved through the catalog's author table
    pub author: String,
    /// Cover image URI
    pub image: String,
    pub description: String,
    /// Publication timestamp (RFC 3339)
    pub published: DateTime<Utc>,
    /// Genre ids in the order the catalog lists them
    pub genres: Vec<String>,
}

impl Book {
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    pub fn has_genre(&self, genre_id: &str) -> bool {
        self.genres.iter().any(|genre| genre == genre_id)
    }
}

/// Id to display-name entry used by the author and genre tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntry {
    pub id: String,
    pub name: String,
}

impl NamedEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Author or genre restriction of a filter.
///
/// Serializes as the raw select value, so `"any"` round-trips to [`Selection::Any`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    Any,
    Id(String),
}

impl Selection {
    pub fn from_form_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ANY {
            Selection::Any
        } else {
            Selection::Id(value.to_string())
        }
    }

    pub fn as_form_value(&self) -> &str {
        match self {
            Selection::Any => ANY,
            Selection::Id(id) => id,
        }
    }

    /// Whether a book carrying `id` passes this restriction
    pub fn admits(&self, id: &str) -> bool {
        match self {
            Selection::Any => true,
            Selection::Id(expected) => expected == id,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        Selection::from_form_value(&value)
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        selection.as_form_value().to_string()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_form_value())
    }
}

/// Criteria submitted from the search form. Created fresh per submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive title substring; blank means "any title"
    pub title: String,
    pub author: Selection,
    pub genre: Selection,
}

impl FilterCriteria {
    pub fn new(title: impl Into<String>, author: Selection, genre: Selection) -> Self {
        Self {
            title: title.into(),
            author,
            genre,
        }
    }

    /// Build criteria from the raw search form fields
    pub fn from_form(title: &str, author: &str, genre: &str) -> Self {
        Self::new(
            title,
            Selection::from_form_value(author),
            Selection::from_form_value(genre),
        )
    }

    pub fn has_title_query(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// True when every book in the catalog would match
    pub fn is_unrestricted(&self) -> bool {
        !self.has_title_query() && self.author.is_any() && self.genre.is_any()
    }
}
