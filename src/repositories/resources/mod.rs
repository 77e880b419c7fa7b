pub mod unsplash_repo;

pub use unsplash_repo::*;
