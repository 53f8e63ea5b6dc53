use serde::{Deserialize, Serialize};

use super::entity::Movie;
use crate::domain::{DomainError, DomainResult};

/// Lower bound of the conventional rating scale
pub const MIN_RATING: f64 = 0.0;

/// Upper bound of the conventional rating scale
pub const MAX_RATING: f64 = 10.0;

/// How the 0-10 rating scale is treated when a movie is added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingPolicy {
    /// The scale is an input hint only; any finite number is accepted
    #[default]
    Hint,
    /// Ratings outside the scale are rejected
    Enforce,
}

/// Validates all Movie invariants
pub fn validate_movie(movie: &Movie, policy: RatingPolicy) -> DomainResult<()> {
    validate_required("title", &movie.title)?;
    validate_required("description", &movie.description)?;
    validate_required("poster_url", &movie.poster_url)?;
    validate_rating(movie.rating, policy)?;
    Ok(())
}

/// Parse the raw text of a rating input
pub fn parse_rating(raw: &str) -> DomainResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingField("rating"));
    }

    let rating: f64 = trimmed
        .parse()
        .map_err(|_| DomainError::InvalidRating(trimmed.to_string()))?;

    // "NaN" and "inf" parse successfully as f64
    if !rating.is_finite() {
        return Err(DomainError::InvalidRating(trimmed.to_string()));
    }

    Ok(rating)
}

fn validate_required(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(())
}

fn validate_rating(rating: f64, policy: RatingPolicy) -> DomainResult<()> {
    if !rating.is_finite() {
        return Err(DomainError::InvalidRating(rating.to_string()));
    }

    if policy == RatingPolicy::Enforce && !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(DomainError::RatingOutOfRange(rating));
    }

    Ok(())
}

/// Invariants that must hold true for Movie domain:
///
/// 1. Identity (UUID) is immutable and unique within a collection
/// 2. Title, description and poster URL are non-empty
/// 3. Rating is a finite number
/// 4. Rating lies in 0-10 only when the store enforces it
/// 5. Poster URL is never checked for syntax or reachability
