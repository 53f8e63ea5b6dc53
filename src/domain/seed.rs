// Example catalogue shown on first start.

use crate::domain::movie::Movie;

const SEED: [(&str, &str, &str, f64); 6] = [
    (
        "Inception",
        "A thief who steals corporate secrets through use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
        "https://m.media-amazon.com/images/M/MV5BMjAxMzY3NjcxNF5BMl5BanBnXkFtZTcwNTI5NjgyMw@@._V1_FMjpg_UX1000_.jpg",
        8.8,
    ),
    (
        "The Matrix",
        "When a beautiful stranger leads computer hacker Neo to a forbidding underworld, he discovers the shocking truth--the life he knows is an elaborate deception of an evil cyber-intelligence.",
        "https://m.media-amazon.com/images/M/MV5BNzQzOTk3OTAtNDQ0Zi00ZTEwLThlYjAtMzRjZTljYjdmMTAwXkEyXkFqcGdeQXVyNzQzNzQxNzI@._V1_FMjpg_UX1000_.jpg",
        8.7,
    ),
    (
        "Interstellar",
        "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
        "https://m.media-amazon.com/images/M/MV5BZjdkOTI3ODBkNS00ZWI0LWExYmMtN2ExMjYwZmNhYzYxXkEyXkFqcGdeQXVyODg3NDUzMjk@._V1_FMjpg_UX1000_.jpg",
        8.6,
    ),
    (
        "Die Hard",
        "An NYPD officer tries to save his wife and several others taken hostage by German terrorists during a Christmas party at the Nakatomi Plaza in Los Angeles.",
        "https://placehold.co/400x600/3A6EA5/FFFFFF?text=Action+Hero",
        8.2,
    ),
    (
        "Mad Max: Fury Road",
        "In a post-apocalyptic wasteland, a woman rebels against a tyrannical ruler with the aid of a group of female prisoners, a psychotic worshiper, and a drifter named Max.",
        "https://placehold.co/400x600/000000/F0F0F0?text=Desert+Chase",
        8.1,
    ),
    (
        "Terminator 2: Judgment Day",
        "A cyborg is sent from the future to protect a young John Connor from a more advanced and powerful cyborg assassin.",
        "https://placehold.co/400x600/B3CDE0/000000?text=Sci-Fi+Action",
        8.5,
    ),
];

/// Build the six example movies, each with a fresh identifier
pub fn seed_movies() -> Vec<Movie> {
    SEED.iter()
        .map(|(title, description, poster_url, rating)| {
            Movie::new(*title, *description, *poster_url, *rating)
        })
        .collect()
}
