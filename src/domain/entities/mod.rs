//! 영속 엔티티
//!
//! - [`users`] - 사용자 (`user` 컬렉션)
//! - [`artists`] - 즐겨찾기 아티스트 (`my_artist` 컬렉션)

pub mod users;
pub mod artists;
