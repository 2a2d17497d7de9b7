pub mod my_artist_repo;

pub use my_artist_repo::*;
