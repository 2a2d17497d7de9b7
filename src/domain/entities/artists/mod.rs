pub mod my_artist;

pub use my_artist::*;
