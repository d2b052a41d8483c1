//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod tutorial_repo;

pub use tutorial_repo::TutorialRepo;
