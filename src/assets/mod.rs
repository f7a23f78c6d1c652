/// Poster asset lookup
///
/// This module handles:
/// - Finding the poster file for a movie's image reference
/// - Generating small thumbnails for list rows
/// - Caching those thumbnails to disk

pub mod thumbnail;

use std::path::{Path, PathBuf};

/// Extensions tried when an image reference has none
const POSTER_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Find the poster file for `reference` inside `assets_dir`.
///
/// An exact file name wins; otherwise each known extension is tried.
pub fn resolve_poster(assets_dir: &Path, reference: &str) -> Option<PathBuf> {
    if reference.is_empty() {
        return None;
    }

    let exact = assets_dir.join(reference);
    if exact.is_file() {
        return Some(exact);
    }

    POSTER_EXTENSIONS
        .iter()
        .map(|ext| assets_dir.join(format!("{}.{}", reference, ext)))
        .find(|candidate| candidate.is_file())
}
