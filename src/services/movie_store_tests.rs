// src/services/movie_store_tests.rs
//
// MovieStore behaviour tests
//
// INVARIANTS TESTED:
// - A valid add grows the collection by exactly one, at the end
// - A rejected add changes nothing
// - list is read-only and repeatable
// - Title matching is case-insensitive, rating threshold is inclusive

#[cfg(test)]
mod store_tests {
    use std::sync::Arc;

    use crate::config::StoreConfig;
    use crate::domain::{DomainError, Movie, MovieFilter, NewMovie, RatingPolicy};
    use crate::error::AppError;
    use crate::repositories::{InMemoryMovieRepository, MockMovieRepository, MovieRepository};
    use crate::services::MovieStore;

    fn empty_config() -> StoreConfig {
        StoreConfig {
            seed_examples: false,
            ..StoreConfig::default()
        }
    }

    fn store_with(movies: Vec<Movie>) -> MovieStore {
        let repo: Arc<dyn MovieRepository> = Arc::new(InMemoryMovieRepository::with_movies(movies));
        MovieStore::new(repo, empty_config())
    }

    fn three_classics() -> MovieStore {
        store_with(vec![
            Movie::new("Inception", "Dreams within dreams.", "http://x/inception", 8.8),
            Movie::new("The Matrix", "Red pill.", "http://x/matrix", 8.7),
            Movie::new("Die Hard", "Nakatomi Plaza.", "http://x/diehard", 8.2),
        ])
    }

    fn dune() -> NewMovie {
        NewMovie {
            title: "Dune".to_string(),
            description: "...".to_string(),
            poster_url: "http://x".to_string(),
            rating: 8.0,
        }
    }

    fn titles(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.title.as_str()).collect()
    }

    #[test]
    fn test_add_appends_exactly_one_at_end() {
        let store = three_classics();
        let before = store.list(&MovieFilter::all()).unwrap();

        let added = store.add(dune()).unwrap();

        let after = store.list(&MovieFilter::all()).unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after.last(), Some(&added));
        assert_eq!(&after[..before.len()], &before[..]);
    }

    #[test]
    fn test_add_then_filter_finds_new_movie() {
        let store = three_classics();
        store.add(dune()).unwrap();

        let found = store.list(&MovieFilter::all().with_title("dune")).unwrap();
        assert_eq!(titles(&found), vec!["Dune"]);
    }

    #[test]
    fn test_add_with_empty_title_is_rejected() {
        let store = three_classics();
        let request = NewMovie {
            title: String::new(),
            ..dune()
        };

        let result = store.add(request);

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::MissingField("title")))
        ));
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_any_empty_required_field_leaves_store_unchanged() {
        let store = three_classics();

        let missing_description = NewMovie {
            description: "  ".to_string(),
            ..dune()
        };
        let missing_poster = NewMovie {
            poster_url: String::new(),
            ..dune()
        };

        assert!(store.add(missing_description).is_err());
        assert!(store.add(missing_poster).is_err());
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_non_finite_rating_rejected() {
        let store = three_classics();
        let request = NewMovie {
            rating: f64::NAN,
            ..dune()
        };

        assert!(matches!(
            store.add(request),
            Err(AppError::Domain(DomainError::InvalidRating(_)))
        ));
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_rating_scale_is_a_hint_by_default() {
        let store = three_classics();
        let request = NewMovie {
            rating: 11.0,
            ..dune()
        };

        assert!(store.add(request).is_ok());
        assert_eq!(store.len().unwrap(), 4);
    }

    #[test]
    fn test_rating_scale_enforced_when_configured() {
        let config = StoreConfig {
            seed_examples: false,
            rating_policy: RatingPolicy::Enforce,
        };
        let store = MovieStore::in_memory(config);
        let request = NewMovie {
            rating: 10.5,
            ..dune()
        };

        assert!(matches!(
            store.add(request),
            Err(AppError::Domain(DomainError::RatingOutOfRange(_)))
        ));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_add_record_rejects_duplicate_id() {
        let existing = Movie::new("Heat", "L.A. crime saga.", "http://x/heat", 8.3);
        let store = store_with(vec![existing.clone()]);

        let mut clash = Movie::new("Ronin", "Briefcase.", "http://x/ronin", 7.2);
        clash.id = existing.id;

        assert!(matches!(
            store.add_record(clash),
            Err(AppError::Domain(DomainError::DuplicateId(id))) if id == existing.id
        ));
        assert_eq!(store.list_all().unwrap(), vec![existing]);
    }

    #[test]
    fn test_add_record_keeps_caller_id() {
        let store = store_with(Vec::new());
        let movie = Movie::new("Ronin", "Briefcase.", "http://x/ronin", 7.2);
        let id = movie.id;

        store.add_record(movie).unwrap();

        assert_eq!(store.get(id).unwrap().map(|m| m.title), Some("Ronin".to_string()));
    }

    #[test]
    fn test_list_is_repeatable() {
        let store = three_classics();
        let filter = MovieFilter::new("the", Some(8.0));

        let first = store.list(&filter).unwrap();
        let second = store.list(&filter).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn test_title_filter_is_case_insensitive() {
        let store = three_classics();
        let found = store.list(&MovieFilter::all().with_title("INCEP")).unwrap();
        assert_eq!(titles(&found), vec!["Inception"]);
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let store = three_classics();
        let all = store.list(&MovieFilter::all()).unwrap();
        assert_eq!(titles(&all), vec!["Inception", "The Matrix", "Die Hard"]);
        assert_eq!(all, store.list_all().unwrap());
    }

    #[test]
    fn test_min_rating_scenario() {
        let store = three_classics();
        let found = store.list(&MovieFilter::new("", Some(8.5))).unwrap();
        assert_eq!(titles(&found), vec!["Inception", "The Matrix"]);
    }

    #[test]
    fn test_min_rating_is_inclusive() {
        let store = three_classics();
        let found = store.list(&MovieFilter::all().with_min_rating(8.2)).unwrap();
        assert_eq!(titles(&found), vec!["Inception", "The Matrix", "Die Hard"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let store = three_classics();
        let found = store.list(&MovieFilter::all().with_title("zzz")).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_seeded_store() {
        let store = MovieStore::in_memory(StoreConfig::default());
        assert_eq!(store.len().unwrap(), 6);

        let found = store.list(&MovieFilter::all().with_min_rating(8.5)).unwrap();
        assert_eq!(
            titles(&found),
            vec![
                "Inception",
                "The Matrix",
                "Interstellar",
                "Terminator 2: Judgment Day"
            ]
        );
    }

    #[test]
    fn test_sessions_are_independent() {
        let first = MovieStore::in_memory(StoreConfig::default());
        let second = MovieStore::in_memory(StoreConfig::default());

        first.add(dune()).unwrap();

        assert_eq!(first.len().unwrap(), 7);
        assert_eq!(second.len().unwrap(), 6);
    }

    #[test]
    fn test_invalid_movie_never_reaches_repository() {
        let mut repo = MockMovieRepository::new();
        repo.expect_insert_new().times(0);

        let store = MovieStore::new(Arc::new(repo), empty_config());
        let request = NewMovie {
            poster_url: String::new(),
            ..dune()
        };

        assert!(store.add(request).is_err());
    }

    #[test]
    fn test_repository_failure_propagates() {
        let mut repo = MockMovieRepository::new();
        repo.expect_insert_new()
            .times(1)
            .returning(|_| Err(AppError::Other("storage unavailable".to_string())));

        let store = MovieStore::new(Arc::new(repo), empty_config());

        assert!(matches!(store.add(dune()), Err(AppError::Other(_))));
    }
}
