use tracing::debug;

use super::movie::Movie;
use crate::error::ListError;

/// The movies currently shown in the list, in catalog order.
///
/// Rows can only be removed; removals are never written back to the
/// catalog file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieList {
    movies: Vec<Movie>,
}

impl MovieList {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Number of movies currently held
    pub fn count(&self) -> usize {
        self.movies.len()
    }

    /// True when the list should show its "No movies" placeholder
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn item_at(&self, index: usize) -> Result<&Movie, ListError> {
        self.movies.get(index).ok_or(ListError::IndexOutOfRange {
            index,
            len: self.movies.len(),
        })
    }

    /// Remove the movie at `index`; later rows shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<Movie, ListError> {
        if index >= self.movies.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.movies.len(),
            });
        }

        let movie = self.movies.remove(index);
        debug!(index, title = %movie.title, remaining = self.movies.len(), "removed movie");
        Ok(movie)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }
}

impl From<Vec<Movie>> for MovieList {
    fn from(movies: Vec<Movie>) -> Self {
        Self::new(movies)
    }
}
