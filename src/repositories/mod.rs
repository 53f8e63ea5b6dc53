// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data holders
// - NO business logic
// - NO field validation
// - Id uniqueness is a storage constraint, like a primary key

pub mod movie_repository;

pub use movie_repository::{InMemoryMovieRepository, MovieRepository};

#[cfg(test)]
pub use movie_repository::MockMovieRepository;
