use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single entry of the movie catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Display title, matched by the title filter
    pub title: String,

    /// Short synopsis
    pub description: String,

    /// Poster image location (never fetched or checked)
    pub poster_url: String,

    /// Score, conventionally on a 0-10 scale
    pub rating: f64,

    /// Creation timestamp
    pub added_at: DateTime<Utc>,
}

/// Fields of a movie that is about to be added.
/// The store assigns the identifier and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub rating: f64,
}

impl Movie {
    /// Create a new Movie with a freshly generated identifier
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        poster_url: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            poster_url: poster_url.into(),
            rating,
            added_at: Utc::now(),
        }
    }

    /// Case-insensitive substring match against the title.
    /// `needle_lower` must already be lowercased.
    pub(crate) fn title_contains_lowercase(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
    }
}

impl From<NewMovie> for Movie {
    fn from(new: NewMovie) -> Self {
        Movie::new(new.title, new.description, new.poster_url, new.rating)
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/10)", self.title, self.rating)
    }
}
