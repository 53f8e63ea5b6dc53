pub mod entity;
pub mod invariants;

pub use entity::{Movie, NewMovie};
pub use invariants::{parse_rating, validate_movie, RatingPolicy, MAX_RATING, MIN_RATING};
