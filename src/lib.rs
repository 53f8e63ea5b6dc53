// src/lib.rs
// MovieHub - In-memory favorite movies catalogue
//
// Architecture:
// - Domain-centric: validation and filtering rules live in the domain
// - Explicit: no global state, every session owns its MovieStore
// - In-memory: nothing outlives the process
// - Application Layer: UI boundary taking raw form input

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    parse_rating, seed_movies, validate_movie, DomainError, DomainResult, Movie, MovieFilter,
    NewMovie, RatingPolicy,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::StoreConfig;

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{InMemoryMovieRepository, MovieRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::MovieStore;

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;
