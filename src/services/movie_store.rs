// src/services/movie_store.rs
//
// MovieStore - owns one movie catalogue for one session
//
// RULES:
// - Every add is validated before anything is written
// - A failed add leaves the collection exactly as it was
// - Reads never mutate

use std::sync::Arc;

use log::{debug, info, warn};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::domain::{seed_movies, validate_movie, DomainError, Movie, MovieFilter, NewMovie};
use crate::error::{AppError, AppResult};
use crate::repositories::{InMemoryMovieRepository, MovieRepository};

pub struct MovieStore {
    movie_repo: Arc<dyn MovieRepository>,
    config: StoreConfig,
}

impl MovieStore {
    pub fn new(movie_repo: Arc<dyn MovieRepository>, config: StoreConfig) -> Self {
        Self { movie_repo, config }
    }

    /// In-memory store, pre-filled with the example catalogue when
    /// `config.seed_examples` is set
    pub fn in_memory(config: StoreConfig) -> Self {
        let movies = if config.seed_examples {
            let movies = seed_movies();
            info!("Seeding movie store with {} example movies", movies.len());
            movies
        } else {
            Vec::new()
        };

        let repo: Arc<dyn MovieRepository> = Arc::new(InMemoryMovieRepository::with_movies(movies));
        Self::new(repo, config)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Add a movie, generating its identifier
    pub fn add(&self, request: NewMovie) -> AppResult<Movie> {
        let movie = Movie::from(request);
        self.add_record(movie.clone())?;
        Ok(movie)
    }

    /// Add a movie whose identifier was generated by the caller
    pub fn add_record(&self, movie: Movie) -> AppResult<()> {
        if let Err(e) = validate_movie(&movie, self.config.rating_policy) {
            warn!("Rejected movie {:?}: {}", movie.title, e);
            return Err(AppError::Domain(e));
        }

        let id = movie.id;
        let title = movie.title.clone();

        if !self.movie_repo.insert_new(movie)? {
            warn!("Rejected movie {:?}: id {} already exists", title, id);
            return Err(AppError::Domain(DomainError::DuplicateId(id)));
        }

        info!("Added movie {:?} ({})", title, id);
        Ok(())
    }

    /// Movies matching `filter`, in insertion order
    pub fn list(&self, filter: &MovieFilter) -> AppResult<Vec<Movie>> {
        let movies = self.movie_repo.list_matching(filter)?;
        debug!(
            "Listed {} movies for title {:?}, min rating {:?}",
            movies.len(),
            filter.title_query,
            filter.min_rating
        );
        Ok(movies)
    }

    pub fn list_all(&self) -> AppResult<Vec<Movie>> {
        self.movie_repo.list_all()
    }

    pub fn get(&self, id: Uuid) -> AppResult<Option<Movie>> {
        self.movie_repo.get_by_id(id)
    }

    pub fn len(&self) -> AppResult<usize> {
        self.movie_repo.count()
    }

    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.len()? == 0)
    }
}
