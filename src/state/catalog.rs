use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use super::movie::Movie;
use crate::error::CatalogError;

/// The catalog shipped inside the binary
const BUNDLED_CATALOG: &[u8] = include_bytes!("../../assets/movies.json");

/// Where a catalog is read from
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    /// The `movies.json` compiled into the application
    Bundled,
    /// A JSON file on disk, picked by the user or configured
    File(PathBuf),
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Bundled => write!(f, "bundled catalog"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse a catalog document into movies, in file order.
///
/// The document must be a JSON array of objects carrying every
/// `Movie` field. Any broken record fails the whole load.
pub fn load_catalog(bytes: &[u8]) -> Result<Vec<Movie>, CatalogError> {
    let document: Value = serde_json::from_slice(bytes).map_err(|e| CatalogError::Malformed {
        record: None,
        reason: e.to_string(),
    })?;

    let Value::Array(records) = document else {
        return Err(CatalogError::Malformed {
            record: None,
            reason: "top level is not an array of movies".to_string(),
        });
    };

    let mut movies = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        movies.push(parse_record(index, record)?);
    }

    debug!(count = movies.len(), "parsed catalog");
    Ok(movies)
}

fn parse_record(index: usize, record: Value) -> Result<Movie, CatalogError> {
    let movie: Movie = serde_json::from_value(record).map_err(|e| CatalogError::Malformed {
        record: Some(index),
        reason: e.to_string(),
    })?;

    if movie.title.is_empty() {
        return Err(CatalogError::Malformed {
            record: Some(index),
            reason: "title is empty".to_string(),
        });
    }

    Ok(movie)
}

/// Read and parse a catalog file from disk
pub fn load_catalog_file(path: &Path) -> Result<Vec<Movie>, CatalogError> {
    let bytes = std::fs::read(path).map_err(|source| CatalogError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    load_catalog(&bytes)
}

/// Parse the catalog compiled into the binary
pub fn bundled_catalog() -> Result<Vec<Movie>, CatalogError> {
    load_catalog(BUNDLED_CATALOG)
}

/// Load a catalog without blocking the UI thread.
///
/// Reading and parsing both run on a blocking worker.
pub async fn load_catalog_async(source: CatalogSource) -> Result<Vec<Movie>, CatalogError> {
    let label = source.to_string();

    let movies = tokio::task::spawn_blocking(move || match source {
        CatalogSource::Bundled => bundled_catalog(),
        CatalogSource::File(path) => load_catalog_file(&path),
    })
    .await
    .map_err(|e| CatalogError::Malformed {
        record: None,
        reason: format!("Task join error: {}", e),
    })??;

    info!("🎬 Loaded {} movies from {}", movies.len(), label);
    Ok(movies)
}
