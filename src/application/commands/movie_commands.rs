// src/application/commands/movie_commands.rs
//
// Movie Command Handlers
//
// RULES:
// - Accept DTOs
// - Call the MovieStore
// - Return DTOs
// - Never contain business logic

use uuid::Uuid;

use crate::application::{dto::*, error_handling::ToErrorResponse, state::AppState};
use crate::domain::{parse_rating, MovieFilter, NewMovie};
use crate::error::{AppError, AppResult};

/// List movies matching the filter inputs
pub fn list_movies(state: &AppState, dto: FilterDto) -> Result<MovieListDto, String> {
    let filter = MovieFilter::from_inputs(&dto.title, &dto.min_rating);
    list_matching(state, &filter).to_error_response()
}

/// Get a single movie by ID
pub fn get_movie(state: &AppState, movie_id: &str) -> Result<MovieDto, String> {
    find_movie(state, movie_id).to_error_response()
}

/// Submit the "add a movie" form
pub fn add_movie(state: &AppState, dto: AddMovieDto) -> Result<MovieDto, String> {
    submit_movie(state, dto).to_error_response()
}

fn list_matching(state: &AppState, filter: &MovieFilter) -> AppResult<MovieListDto> {
    let movies = state.movie_store.list(filter)?;
    let total = state.movie_store.len()?;
    Ok(MovieListDto::new(movies, total))
}

fn find_movie(state: &AppState, movie_id: &str) -> AppResult<MovieDto> {
    let id = Uuid::parse_str(movie_id)?;
    let movie = state.movie_store.get(id)?.ok_or(AppError::NotFound)?;
    Ok(MovieDto::from(movie))
}

fn submit_movie(state: &AppState, dto: AddMovieDto) -> AppResult<MovieDto> {
    let rating = parse_rating(&dto.rating)?;

    let request = NewMovie {
        title: dto.title,
        description: dto.description,
        poster_url: dto.poster_url,
        rating,
    };

    let movie = state.movie_store.add(request)?;
    Ok(MovieDto::from(movie))
}
