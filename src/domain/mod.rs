// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod filter;
pub mod movie;
pub mod seed;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{
    parse_rating, validate_movie, Movie, NewMovie, RatingPolicy, MAX_RATING, MIN_RATING,
};

// Filtering
pub use filter::MovieFilter;

// Fixtures
pub use seed::seed_movies;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;
use uuid::Uuid;

/// Domain-level errors
/// These represent rejected input: nothing is stored when one is raised
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Rating is not a number: {0}")]
    InvalidRating(String),

    #[error("Rating {0} is outside the 0-10 scale")]
    RatingOutOfRange(f64),

    #[error("Movie id already exists: {0}")]
    DuplicateId(Uuid),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
