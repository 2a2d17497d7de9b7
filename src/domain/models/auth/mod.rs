pub mod principal;
pub mod request_context;

pub use principal::*;
pub use request_context::*;
