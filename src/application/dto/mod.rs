// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - Input DTOs carry raw form text; parsing happens in the commands
// - Output DTOs are built FROM domain entities only

use serde::{Deserialize, Serialize};

use crate::domain::Movie;

/// Poster shown when a movie has no usable poster URL
pub const PLACEHOLDER_POSTER_URL: &str = "https://placehold.co/400x600/E0E0E0/333333?text=No+Image";

/// Message shown in place of an empty result list
pub const NO_MATCHES_MESSAGE: &str = "No movies found matching your criteria.";

// ============================================================================
// MOVIE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub display_poster_url: String,
    pub rating: f64,
    pub rating_label: String,
    pub added_at: String,
}

/// Contents of the "add a movie" form, exactly as typed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddMovieDto {
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub rating: String,
}

/// Contents of the filter inputs, exactly as typed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterDto {
    pub title: String,
    pub min_rating: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListDto {
    pub movies: Vec<MovieDto>,
    /// Size of the whole collection, before filtering
    pub total: usize,
    pub empty_message: Option<String>,
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        let display_poster_url = if movie.poster_url.trim().is_empty() {
            PLACEHOLDER_POSTER_URL.to_string()
        } else {
            movie.poster_url.clone()
        };

        Self {
            id: movie.id.to_string(),
            rating_label: format!("{}/10", movie.rating),
            title: movie.title,
            description: movie.description,
            poster_url: movie.poster_url,
            display_poster_url,
            rating: movie.rating,
            added_at: movie.added_at.to_rfc3339(),
        }
    }
}

impl MovieListDto {
    pub fn new(movies: Vec<Movie>, total: usize) -> Self {
        let empty_message = movies.is_empty().then(|| NO_MATCHES_MESSAGE.to_string());
        Self {
            movies: movies.into_iter().map(MovieDto::from).collect(),
            total,
            empty_message,
        }
    }
}
