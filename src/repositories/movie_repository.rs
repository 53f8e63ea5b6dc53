// src/repositories/movie_repository.rs
//
// Movie storage - ordered, append-only, process memory

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::domain::filter::MovieFilter;
use crate::domain::movie::Movie;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait MovieRepository: Send + Sync {
    /// Append at the end unless a movie with the same id is stored.
    /// Returns `false` (and stores nothing) on an id clash.
    fn insert_new(&self, movie: Movie) -> AppResult<bool>;
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Movie>>;
    fn list_all(&self) -> AppResult<Vec<Movie>>;
    fn list_matching(&self, filter: &MovieFilter) -> AppResult<Vec<Movie>>;
    fn count(&self) -> AppResult<usize>;
    fn exists(&self, id: Uuid) -> AppResult<bool>;
}

/// Vec-backed repository, insertion order is list order
#[derive(Default)]
pub struct InMemoryMovieRepository {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with `movies`, kept in the given order
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    // A panic can't leave the Vec half-written, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Movie>> {
        self.movies.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Movie>> {
        self.movies.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MovieRepository for InMemoryMovieRepository {
    fn insert_new(&self, movie: Movie) -> AppResult<bool> {
        let mut movies = self.write();

        if movies.iter().any(|m| m.id == movie.id) {
            return Ok(false);
        }

        movies.push(movie);
        Ok(true)
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Movie>> {
        Ok(self.read().iter().find(|m| m.id == id).cloned())
    }

    fn list_all(&self) -> AppResult<Vec<Movie>> {
        Ok(self.read().clone())
    }

    fn list_matching(&self, filter: &MovieFilter) -> AppResult<Vec<Movie>> {
        Ok(filter.apply(self.read().iter()))
    }

    fn count(&self) -> AppResult<usize> {
        Ok(self.read().len())
    }

    fn exists(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.read().iter().any(|m| m.id == id))
    }
}
