//! Repository Layer
//!
//! Data access abstractions and implementations.

mod card_repo;
mod db;
mod task_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use card_repo::CardRepository;
pub use db::{init_db, DbState};
pub use task_repo::TaskRepository;
pub use traits::Repository;
