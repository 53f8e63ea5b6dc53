use serde::{Deserialize, Serialize};

use crate::domain::movie::Movie;

/// Criteria for narrowing the visible movie list.
///
/// Owned by the caller and never stored with the collection.
/// A movie matches when its title contains `title_query` (case-insensitive)
/// and, if `min_rating` is set, its rating is at least `min_rating`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieFilter {
    pub title_query: String,
    pub min_rating: Option<f64>,
}

impl MovieFilter {
    pub fn new(title_query: impl Into<String>, min_rating: Option<f64>) -> Self {
        Self {
            title_query: title_query.into(),
            min_rating,
        }
    }

    /// Filter that matches every movie
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title_query: impl Into<String>) -> Self {
        self.title_query = title_query.into();
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    /// Build a filter from the raw contents of the filter inputs.
    ///
    /// A blank or non-numeric rating box means "no threshold".
    pub fn from_inputs(title_text: &str, rating_text: &str) -> Self {
        let min_rating = rating_text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite());

        Self::new(title_text, min_rating)
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        self.matches_prepared(movie, &self.title_query.to_lowercase())
    }

    /// Keep only the matching movies, preserving order
    pub fn apply<'a, I>(&self, movies: I) -> Vec<Movie>
    where
        I: IntoIterator<Item = &'a Movie>,
    {
        let needle = self.title_query.to_lowercase();
        movies
            .into_iter()
            .filter(|movie| self.matches_prepared(movie, &needle))
            .cloned()
            .collect()
    }

    fn matches_prepared(&self, movie: &Movie, needle: &str) -> bool {
        let title_ok = movie.title_contains_lowercase(needle);
        let rating_ok = self.min_rating.map_or(true, |min| movie.rating >= min);
        title_ok && rating_ok
    }
}
