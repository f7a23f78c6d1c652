/// State management module
///
/// This module handles the movie data beneath the UI:
/// - Loading the bundled JSON catalog (catalog.rs)
/// - The movie record itself (movie.rs)
/// - The in-memory list the UI queries and deletes from (list.rs)

pub mod catalog;
pub mod list;
pub mod movie;
